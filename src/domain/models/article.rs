// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A news article in the corpus. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Serialized as ISO `YYYY-MM-DD`; parsed up front so date-range
    /// comparisons never depend on string ordering.
    pub publication_date: NaiveDate,
    pub source: String,
    pub is_advertisement: bool,
    pub quality_score: f64,
    pub word_count: u32,
}
