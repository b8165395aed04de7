// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SearchRequestDto {
    // An empty query would normalize to "" and match every article.
    #[validate(length(min = 1, message = "Query cannot be empty"))]
    pub query: String,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponseDto {
    /// The original query, pre-normalization.
    pub query: String,
    pub results: Vec<SearchResult>,
}
