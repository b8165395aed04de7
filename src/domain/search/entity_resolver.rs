// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::Article;
use crate::domain::models::entity::Entity;

/// Finds the entities whose name appears, case-insensitively, in the
/// article's content.
///
/// A stable filter over `all_entities`: the output is a subsequence of the
/// input, preserving corpus entity order. No matches is a valid empty
/// result.
pub fn resolve_entities(article: &Article, all_entities: &[Entity]) -> Vec<Entity> {
    let content = article.content.to_lowercase();
    all_entities
        .iter()
        .filter(|entity| content.contains(&entity.name.to_lowercase()))
        .cloned()
        .collect()
}
