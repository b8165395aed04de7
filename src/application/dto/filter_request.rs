// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::Article;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct FilterRequestDto {
    pub categories: Option<Vec<String>>,
    pub date_range: Option<DateRangeDto>,
    // 1-based; page 0 is a caller contract violation and rejected here.
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
}

/// Inclusive publication-date bounds, ISO `YYYY-MM-DD`.
#[derive(Debug, Deserialize, Serialize)]
pub struct DateRangeDto {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct FilterResponseDto {
    pub articles: Vec<Article>,
    /// Count after filtering, before pagination.
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}
