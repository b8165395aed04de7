// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::Article;
use crate::domain::models::entity::Entity;
use std::collections::HashMap;

/// The immutable corpus snapshot every query operates on.
///
/// Populated once at process start (or test setup) and shared by `Arc`
/// afterwards; no query operation mutates it, so handlers may read it
/// concurrently without locking. Article and entity ids must be unique
/// within the corpus.
#[derive(Debug)]
pub struct CorpusStore {
    articles: Vec<Article>,
    entities: Vec<Entity>,
    // id -> position in `articles`, for O(1) detail lookups
    article_index: HashMap<String, usize>,
}

impl CorpusStore {
    pub fn new(articles: Vec<Article>, entities: Vec<Entity>) -> Self {
        let article_index = articles
            .iter()
            .enumerate()
            .map(|(idx, article)| (article.id.clone(), idx))
            .collect();
        Self {
            articles,
            entities,
            article_index,
        }
    }

    /// Articles in corpus insertion order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Entities in corpus insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Looks up an article by id; an absent id is a `None`, not an error.
    pub fn article_by_id(&self, id: &str) -> Option<&Article> {
        self.article_index.get(id).map(|&idx| &self.articles[idx])
    }
}
