// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::Article;
use crate::domain::models::entity::Entity;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the plain article listing.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ArticleQueryDto {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ArticleListDto {
    pub articles: Vec<Article>,
    pub limit: u32,
    pub offset: u32,
    pub total: usize,
}

/// An article enriched with the entities resolved from its content.
#[derive(Debug, Serialize)]
pub struct ArticleDetailDto {
    #[serde(flatten)]
    pub article: Article,
    pub entities: Vec<Entity>,
}
