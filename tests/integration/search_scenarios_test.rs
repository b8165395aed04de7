// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

/// FDR缩写检索测试
///
/// "FDR"归一化为"roosevelt"，标题命中相似度0.95
#[tokio::test]
async fn fdr_query_finds_roosevelt_title_match() {
    let server = create_test_app();

    let response = server.post("/v1/search").json(&json!({ "query": "FDR" })).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["query"], "FDR");

    let results = body["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert_eq!(
        results[0]["title"],
        "Roosevelt Begins Third Term as War Looms"
    );
    assert_eq!(results[0]["similarity"], 0.95);
}

/// 拼写错误检索测试
///
/// "roosvelt"与"FDR"归一化为同一规范词，结果一致
#[tokio::test]
async fn misspelled_query_matches_like_the_abbreviation() {
    let server = create_test_app();

    let from_fdr: Value = server
        .post("/v1/search")
        .json(&json!({ "query": "FDR" }))
        .await
        .json();
    let from_misspelling: Value = server
        .post("/v1/search")
        .json(&json!({ "query": "roosvelt" }))
        .await
        .json();

    assert_eq!(from_fdr["results"], from_misspelling["results"]);
}

/// 相似度分层测试
///
/// 标题命中0.95，仅内容命中0.85，且结果按相似度降序
#[tokio::test]
async fn results_are_tiered_and_sorted_by_similarity() {
    let server = create_test_app();

    let body: Value = server
        .post("/v1/search")
        .json(&json!({ "query": "churchill" }))
        .await
        .json();

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    // "Churchill and Roosevelt Meet Aboard Warships" is a title match.
    assert_eq!(results[0]["similarity"], 0.95);

    let body: Value = server
        .post("/v1/search")
        .json(&json!({ "query": "pearl harbor" }))
        .await
        .json();

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["similarity"], 0.95);

    // "infamy" appears in content only.
    let body: Value = server
        .post("/v1/search")
        .json(&json!({ "query": "infamy" }))
        .await
        .json();

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["similarity"], 0.85);
}

/// limit截断测试
#[tokio::test]
async fn search_limit_truncates_after_ranking() {
    let server = create_test_app();

    // Four seed articles mention Roosevelt; limit 2 keeps the two best.
    let body: Value = server
        .post("/v1/search")
        .json(&json!({ "query": "roosevelt", "limit": 2 }))
        .await
        .json();

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    for result in results {
        assert_eq!(result["similarity"], 0.95);
    }
}

/// 无匹配检索测试
///
/// 未命中任何文章时返回空结果而不是错误
#[tokio::test]
async fn unmatched_query_returns_empty_results() {
    let server = create_test_app();

    let response = server
        .post("/v1/search")
        .json(&json!({ "query": "moon landing" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert!(body["results"].as_array().unwrap().is_empty());
}

/// 类别过滤测试
///
/// 种子语料库中类别为war的文章恰好一篇
#[tokio::test]
async fn category_filter_returns_single_war_article() {
    let server = create_test_app();

    let response = server
        .post("/v1/filter")
        .json(&json!({ "categories": ["war"], "page": 1, "limit": 10 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);

    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(
        articles[0]["title"],
        "Roosevelt Declares War After Pearl Harbor Attack"
    );
}

/// 起始日期过滤测试
///
/// 1942-01-01之后只有女性劳动力一篇
#[tokio::test]
async fn start_date_filter_returns_only_1942_article() {
    let server = create_test_app();

    let body: Value = server
        .post("/v1/filter")
        .json(&json!({ "date_range": { "start": "1942-01-01" } }))
        .await
        .json();

    assert_eq!(body["total"], 1);
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(
        articles[0]["title"],
        "Women Join Workforce as War Production Accelerates"
    );
}

/// 超出范围页码测试
///
/// 请求页超过可用数据时返回空页，而不是错误
#[tokio::test]
async fn page_past_available_data_is_empty() {
    let server = create_test_app();

    let response = server
        .post("/v1/filter")
        .json(&json!({ "page": 3, "limit": 10 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["total"], 5);
    assert!(body["articles"].as_array().unwrap().is_empty());
}

/// 组合过滤分页往返测试
///
/// 逐页拼接可无缺漏地还原全部过滤结果
#[tokio::test]
async fn sequential_filter_pages_cover_the_corpus() {
    let server = create_test_app();

    let mut seen: Vec<String> = Vec::new();
    for page in 1..=3 {
        let body: Value = server
            .post("/v1/filter")
            .json(&json!({ "page": page, "limit": 2 }))
            .await
            .json();
        for article in body["articles"].as_array().unwrap() {
            seen.push(article["id"].as_str().unwrap().to_string());
        }
    }

    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 5);
}
