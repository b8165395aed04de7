// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::Article;
use crate::domain::models::entity::Entity;
use serde::{Deserialize, Serialize};

/// A matched article plus its derived similarity tier. Constructed per
/// query, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(flatten)]
    pub article: Article,
    pub similarity: f64,
    /// Entity enrichment, only present when the caller asked for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
}

impl SearchResult {
    pub fn new(article: Article, similarity: f64) -> Self {
        Self {
            article,
            similarity,
            entities: None,
        }
    }

    pub fn with_entities(mut self, entities: Vec<Entity>) -> Self {
        self.entities = Some(entities);
        self
    }
}
