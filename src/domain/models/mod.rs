// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 文章（article）：语料库中的一篇新闻文章
/// - 实体（entity）：与文章交叉引用的命名实体
/// - 检索结果（search_result）：文章加派生的相似度分值
/// - 过滤条件（filter_criteria）：结构化查询约束
pub mod article;
pub mod entity;
pub mod filter_criteria;
pub mod search_result;
