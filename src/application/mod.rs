// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含应用层的数据传输对象
/// 该模块将API请求/响应结构与领域模型分离
pub mod dto;
