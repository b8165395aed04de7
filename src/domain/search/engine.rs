// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::Article;
use crate::domain::models::search_result::SearchResult;
use std::cmp::Ordering;

/// Similarity tier for a term found in the article title.
pub const TITLE_MATCH_SIMILARITY: f64 = 0.95;
/// Similarity tier for a term found only in the article content.
pub const CONTENT_MATCH_SIMILARITY: f64 = 0.85;

/// Scans the corpus for the given canonical terms and returns a ranked,
/// truncated result list.
///
/// Terms are tested in normalizer output order with case-insensitive
/// substring containment; the first term that matches an article decides
/// its tier and the remaining terms are skipped for that article. Articles
/// matching no term are excluded.
///
/// Results are ordered by descending similarity; the sort is stable, so
/// ties keep corpus insertion order and the ranking is deterministic.
/// Truncation to `limit` happens after sorting.
pub fn search(articles: &[Article], terms: &[String], limit: usize) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = Vec::new();

    for article in articles {
        let title = article.title.to_lowercase();
        let content = article.content.to_lowercase();

        for term in terms {
            if title.contains(term.as_str()) {
                results.push(SearchResult::new(article.clone(), TITLE_MATCH_SIMILARITY));
                break;
            }
            if content.contains(term.as_str()) {
                results.push(SearchResult::new(article.clone(), CONTENT_MATCH_SIMILARITY));
                break;
            }
        }
    }

    // Vec::sort_by is stable; equal tiers stay in corpus order.
    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(limit);
    results
}
