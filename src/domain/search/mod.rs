// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 检索模块
///
/// 包含查询词归一化、相关性评分、结构化过滤与实体解析，
/// 全部为作用于不可变语料库的纯函数
pub mod engine;
pub mod entity_resolver;
pub mod filter;
pub mod normalizer;
