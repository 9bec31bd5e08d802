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

use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, error};

use crate::{
    application::dto::{
        summarize_request::SummarizeRequestDto, summarize_response::SummarizeResponseDto,
    },
    domain::services::summarize_service::SummarizeService,
    presentation::errors::AppError,
    utils::url_utils::normalize_youtube_url,
};

/// 处理视频摘要请求
///
/// 校验请求体中的视频链接，规范化为标准观看链接后提交给摘要服务，
/// 将摘要文本或错误信息以JSON形式返回
pub async fn summarize(
    Extension(service): Extension<Arc<dyn SummarizeService>>,
    payload: Result<Json<SummarizeRequestDto>, JsonRejection>,
) -> Result<Response, AppError> {
    // A body the extractor cannot parse surfaces through the catch-all error shape
    let Json(payload) = payload?;

    // Reject before any upstream call when the link is missing or empty
    let youtube_link = match payload.youtube_link.as_deref() {
        Some(link) if !link.is_empty() => link,
        _ => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Missing 'youtube_link' in request."
                })),
            )
                .into_response());
        }
    };

    counter!("summarize_requests_total").increment(1);

    let watch_url = normalize_youtube_url(youtube_link);
    debug!("Normalized {} to {}", youtube_link, watch_url);

    match service.summarize_video(&watch_url).await {
        Ok(summary) => {
            let response = SummarizeResponseDto { summary };
            Ok((StatusCode::OK, Json(response)).into_response())
        }
        Err(e) => {
            error!("Summarization failed for {}: {}", watch_url, e);
            counter!("summarize_failures_total").increment(1);
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": e.to_string()
                })),
            )
                .into_response())
        }
    }
}
