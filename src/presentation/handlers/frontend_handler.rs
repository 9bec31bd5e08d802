// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::io::ErrorKind;
use std::sync::Arc;
use tracing::warn;

use crate::{config::settings::Settings, presentation::errors::AppError};

/// 返回摘要前端页面
///
/// 页面文件路径由配置指定，文件缺失时返回404而不是服务器错误
pub async fn index(Extension(settings): Extension<Arc<Settings>>) -> Result<Response, AppError> {
    match tokio::fs::read_to_string(&settings.frontend.index_path).await {
        Ok(page) => Ok(Html(page).into_response()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Frontend page {} not found", settings.frontend.index_path);
            Ok((StatusCode::NOT_FOUND, "Frontend page not found").into_response())
        }
        Err(e) => Err(e.into()),
    }
}
