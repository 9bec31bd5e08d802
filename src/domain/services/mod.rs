// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了
/// 业务规则和领域逻辑。
///
/// 包含的服务：
/// - 摘要服务（summarize_service）：调用Gemini生成式API对视频内容生成要点摘要
pub mod summarize_service;
