// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;

use crate::{
    application::dto::entity_request::{EntityListDto, EntityQueryDto},
    config::settings::Settings,
    domain::{corpus::store::CorpusStore, services::query_service::QueryService},
    presentation::errors::AppError,
};

/// 处理实体列表请求
///
/// 可按entity_type过滤，再应用offset/limit；未知类型返回空列表
pub async fn list_entities(
    Extension(store): Extension<Arc<CorpusStore>>,
    Extension(settings): Extension<Arc<Settings>>,
    Query(params): Query<EntityQueryDto>,
) -> Result<Json<EntityListDto>, AppError> {
    let service = QueryService::new(store, settings);
    let response = service.list_entities(params)?;
    Ok(Json(response))
}
