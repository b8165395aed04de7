// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 编排语料库查询操作：检索、过滤、文章详情和实体列表
pub mod query_service;
