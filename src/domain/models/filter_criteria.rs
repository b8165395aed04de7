// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;

/// Structured (non-free-text) query constraints: category set, inclusive
/// date bounds and 1-based pagination.
///
/// Invariants: `page >= 1` and `page_size > 0`. The transport layer rejects
/// out-of-contract values before criteria are built.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Empty set means no category filter.
    pub categories: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            start_date: None,
            end_date: None,
            page: 1,
            page_size: 10,
        }
    }
}
