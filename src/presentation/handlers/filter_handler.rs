// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::{
    application::dto::filter_request::{FilterRequestDto, FilterResponseDto},
    config::settings::Settings,
    domain::{corpus::store::CorpusStore, services::query_service::QueryService},
    presentation::errors::AppError,
};

/// 处理结构化过滤请求
///
/// # 参数
///
/// * `store` - 语料库存储实例
/// * `settings` - 应用配置
/// * `payload` - 过滤条件数据
///
/// # 返回值
///
/// 返回过滤并分页后的文章列表及匹配总数
///
/// # 错误
///
/// page为0或limit超出范围时返回400错误响应
pub async fn filter_articles(
    Extension(store): Extension<Arc<CorpusStore>>,
    Extension(settings): Extension<Arc<Settings>>,
    Json(payload): Json<FilterRequestDto>,
) -> Result<Json<FilterResponseDto>, AppError> {
    let service = QueryService::new(store, settings);
    let response = service.filter(payload)?;
    Ok(Json(response))
}
