// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::article_request::{ArticleDetailDto, ArticleListDto, ArticleQueryDto};
use crate::application::dto::entity_request::{EntityListDto, EntityQueryDto};
use crate::application::dto::filter_request::{FilterRequestDto, FilterResponseDto};
use crate::application::dto::search_request::{SearchRequestDto, SearchResponseDto};
use crate::config::settings::Settings;
use crate::domain::corpus::store::CorpusStore;
use crate::domain::models::filter_criteria::FilterCriteria;
use crate::domain::search::{engine, entity_resolver, filter, normalizer};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use validator::Validate;

#[derive(Error, Debug)]
pub enum QueryServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Article not found")]
    NotFound,
}

/// Query façade over the immutable corpus snapshot.
///
/// Every operation validates its DTO, then delegates to the pure functions
/// in `domain::search`. Nothing here mutates the store, so a service may be
/// constructed per request and operations may run concurrently.
pub struct QueryService {
    store: Arc<CorpusStore>,
    settings: Arc<Settings>,
}

impl QueryService {
    pub fn new(store: Arc<CorpusStore>, settings: Arc<Settings>) -> Self {
        Self { store, settings }
    }

    // Configured defaults and ceiling; the DTO range check already rejects
    // out-of-contract values, this keeps operators able to lower the cap.
    fn effective_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.settings.search.default_limit)
            .min(self.settings.search.max_limit)
    }

    /// Free-text search: normalize, scan, rank, truncate.
    pub fn search(&self, dto: SearchRequestDto) -> Result<SearchResponseDto, QueryServiceError> {
        dto.validate()
            .map_err(|e| QueryServiceError::Validation(e.to_string()))?;

        let terms = normalizer::normalize(&dto.query);
        debug!(query = %dto.query, ?terms, "normalized search query");

        let limit = self.effective_limit(dto.limit);
        let results = engine::search(self.store.articles(), &terms, limit as usize);
        debug!(matches = results.len(), "search completed");

        Ok(SearchResponseDto {
            query: dto.query,
            results,
        })
    }

    /// Structured filtering with 1-based pagination.
    pub fn filter(&self, dto: FilterRequestDto) -> Result<FilterResponseDto, QueryServiceError> {
        dto.validate()
            .map_err(|e| QueryServiceError::Validation(e.to_string()))?;

        let page = dto.page.unwrap_or(1);
        let limit = self.effective_limit(dto.limit);
        let criteria = FilterCriteria {
            categories: dto.categories.unwrap_or_default(),
            start_date: dto.date_range.as_ref().and_then(|r| r.start),
            end_date: dto.date_range.as_ref().and_then(|r| r.end),
            page: page as usize,
            page_size: limit as usize,
        };

        let (articles, total) = filter::filter_articles(self.store.articles(), &criteria);

        Ok(FilterResponseDto {
            articles,
            total,
            page,
            limit,
        })
    }

    /// Article lookup enriched with the entities found in its content.
    pub fn article_detail(&self, id: &str) -> Result<ArticleDetailDto, QueryServiceError> {
        let article = self
            .store
            .article_by_id(id)
            .ok_or(QueryServiceError::NotFound)?;

        let entities = entity_resolver::resolve_entities(article, self.store.entities());

        Ok(ArticleDetailDto {
            article: article.clone(),
            entities,
        })
    }

    /// Plain offset/limit article listing, no relevance scoring.
    pub fn list_articles(&self, dto: ArticleQueryDto) -> Result<ArticleListDto, QueryServiceError> {
        dto.validate()
            .map_err(|e| QueryServiceError::Validation(e.to_string()))?;

        let limit = self.effective_limit(dto.limit);
        let offset = dto.offset.unwrap_or(0);
        let articles = self.store.articles();

        let page = articles
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(ArticleListDto {
            articles: page,
            limit,
            offset,
            total: articles.len(),
        })
    }

    /// Entity listing, optionally filtered by type, then offset/limit.
    pub fn list_entities(&self, dto: EntityQueryDto) -> Result<EntityListDto, QueryServiceError> {
        dto.validate()
            .map_err(|e| QueryServiceError::Validation(e.to_string()))?;

        let limit = self.effective_limit(dto.limit);
        let offset = dto.offset.unwrap_or(0);

        let entities = self
            .store
            .entities()
            .iter()
            .filter(|e| {
                dto.entity_type
                    .as_deref()
                    .is_none_or(|t| e.entity_type.as_str() == t)
            })
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(EntityListDto {
            entities,
            limit,
            offset,
        })
    }
}
