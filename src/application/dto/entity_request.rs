// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::entity::Entity;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the entity listing. `entity_type` filters before
/// offset/limit are applied; an unknown type yields an empty list.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct EntityQueryDto {
    pub entity_type: Option<String>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct EntityListDto {
    pub entities: Vec<Entity>,
    pub limit: u32,
    pub offset: u32,
}
