// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 摘要响应数据传输对象
///
/// 用于封装服务器对摘要请求的成功响应
#[derive(Debug, Deserialize, Serialize)]
pub struct SummarizeResponseDto {
    /// 视频内容的五条要点摘要文本
    pub summary: String,
}
