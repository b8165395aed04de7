// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 语料库模块
///
/// 持有启动时加载的不可变文章与实体集合
pub mod store;
