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

use axum::Extension;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use ytsum::config::settings::Settings;
use ytsum::domain::services::summarize_service::{GeminiService, SummarizeService};
use ytsum::presentation::routes;
use ytsum::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting ytsum...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize Prometheus Metrics
    ytsum::infrastructure::metrics::init_metrics(&settings.metrics);

    // 4. Initialize the Gemini client
    // A missing key is reported loudly but does not stop the server,
    // every summarize request will fail until the key is provided
    let gemini = GeminiService::new();
    if gemini.is_configured() {
        info!("Gemini client initialized successfully.");
    } else {
        error!("FATAL: Ensure GEMINI_API_KEY environment variable is set correctly.");
    }
    let summarize_service: Arc<dyn SummarizeService> = Arc::new(gemini);

    // 5. Start HTTP server
    let app = routes::routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .layer(Extension(summarize_service))
        .layer(Extension(settings.clone()));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
