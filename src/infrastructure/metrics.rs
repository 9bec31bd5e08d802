// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

use crate::config::settings::MetricsSettings;

pub fn init_metrics(settings: &MetricsSettings) {
    let builder = PrometheusBuilder::new();
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));

    // Start the exporter
    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = builder.with_http_listener(addr).install() {
        tracing::warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
    }

    describe_counter!(
        "summarize_requests_total",
        "Total number of accepted summarization requests"
    );
    describe_counter!(
        "summarize_failures_total",
        "Total number of summarization requests that failed"
    );

    info!("Metrics exporter listening on {}", addr);
}
