// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Path, Query};
use std::sync::Arc;

use crate::{
    application::dto::article_request::{ArticleDetailDto, ArticleListDto, ArticleQueryDto},
    config::settings::Settings,
    domain::{corpus::store::CorpusStore, services::query_service::QueryService},
    presentation::errors::AppError,
};

/// 处理文章列表请求
///
/// 按offset/limit返回语料库文章，不做相关性评分
pub async fn list_articles(
    Extension(store): Extension<Arc<CorpusStore>>,
    Extension(settings): Extension<Arc<Settings>>,
    Query(params): Query<ArticleQueryDto>,
) -> Result<Json<ArticleListDto>, AppError> {
    let service = QueryService::new(store, settings);
    let response = service.list_articles(params)?;
    Ok(Json(response))
}

/// 处理文章详情请求
///
/// # 返回值
///
/// 返回文章及其内容中解析出的实体
///
/// # 错误
///
/// 文章ID不存在时返回404错误响应
pub async fn get_article(
    Extension(store): Extension<Arc<CorpusStore>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(id): Path<String>,
) -> Result<Json<ArticleDetailDto>, AppError> {
    let service = QueryService::new(store, settings);
    let response = service.article_detail(&id)?;
    Ok(Json(response))
}
