// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{
    article_handler, entity_handler, filter_handler, search_handler,
};
use axum::{
    routing::{get, post},
    Router,
};

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let query_routes = Router::new()
        .route("/v1/search", post(search_handler::search))
        .route("/v1/filter", post(filter_handler::filter_articles))
        .route("/v1/articles", get(article_handler::list_articles))
        .route("/v1/articles/{id}", get(article_handler::get_article))
        .route("/v1/entities", get(entity_handler::list_entities));

    Router::new().merge(public_routes).merge(query_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
