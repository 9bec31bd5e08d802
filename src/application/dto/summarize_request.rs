// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};

/// 摘要请求数据传输对象
///
/// 用于封装客户端发起的视频摘要请求参数
#[derive(Debug, Deserialize, Serialize)]
pub struct SummarizeRequestDto {
    /// 要进行摘要的YouTube视频链接，缺失或为空时拒绝请求
    pub youtube_link: Option<String>,
}
