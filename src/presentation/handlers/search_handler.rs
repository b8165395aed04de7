// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::{
    application::dto::search_request::{SearchRequestDto, SearchResponseDto},
    config::settings::Settings,
    domain::{corpus::store::CorpusStore, services::query_service::QueryService},
    presentation::errors::AppError,
};

/// 处理自由文本检索请求
///
/// # 参数
///
/// * `store` - 语料库存储实例
/// * `settings` - 应用配置
/// * `payload` - 检索请求数据
///
/// # 返回值
///
/// 返回排序并截断后的检索结果，或错误信息
///
/// # 错误
///
/// 查询为空或limit超出范围时返回400错误响应
pub async fn search(
    Extension(store): Extension<Arc<CorpusStore>>,
    Extension(settings): Extension<Arc<Settings>>,
    Json(payload): Json<SearchRequestDto>,
) -> Result<Json<SearchResponseDto>, AppError> {
    let service = QueryService::new(store, settings);
    let response = service.search(payload)?;
    Ok(Json(response))
}
