// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::Article;
use crate::domain::models::filter_criteria::FilterCriteria;

/// Applies structured criteria to the corpus and paginates the outcome.
///
/// Filters are conjunctive and applied in order: category membership
/// (skipped when the category set is empty), then the inclusive start
/// bound, then the inclusive end bound. The returned total counts matches
/// after filtering, before pagination.
///
/// Pagination slices the filtered sequence at `(page - 1) * page_size`; a
/// page past the end is an empty page, not an error.
pub fn filter_articles(articles: &[Article], criteria: &FilterCriteria) -> (Vec<Article>, usize) {
    let filtered: Vec<&Article> = articles
        .iter()
        .filter(|a| {
            criteria.categories.is_empty() || criteria.categories.contains(&a.category)
        })
        .filter(|a| criteria.start_date.is_none_or(|start| a.publication_date >= start))
        .filter(|a| criteria.end_date.is_none_or(|end| a.publication_date <= end))
        .collect();

    let total = filtered.len();
    let offset = (criteria.page - 1) * criteria.page_size;
    let page = filtered
        .into_iter()
        .skip(offset)
        .take(criteria.page_size)
        .cloned()
        .collect();

    (page, total)
}
