// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Extension;
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use ytsum::config::settings::Settings;
use ytsum::domain::services::summarize_service::{SummarizeError, SummarizeService};
use ytsum::presentation::routes;

/// 桩摘要服务的预设行为
enum StubReply {
    Summary(&'static str),
    ApiError { status: u16, message: &'static str },
    Unexpected(&'static str),
}

/// 摘要服务桩实现
///
/// 记录每次收到的链接并返回预设结果，避免测试访问真实的Gemini API
struct StubSummarizeService {
    reply: StubReply,
    seen_urls: Mutex<Vec<String>>,
}

impl StubSummarizeService {
    fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            seen_urls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SummarizeService for StubSummarizeService {
    async fn summarize_video(&self, video_url: &str) -> Result<String, SummarizeError> {
        self.seen_urls.lock().unwrap().push(video_url.to_string());
        match &self.reply {
            StubReply::Summary(text) => Ok((*text).to_string()),
            StubReply::ApiError { status, message } => Err(SummarizeError::Api {
                status: *status,
                message: (*message).to_string(),
            }),
            StubReply::Unexpected(message) => {
                Err(SummarizeError::Unexpected((*message).to_string()))
            }
        }
    }
}

fn test_server(stub: Arc<StubSummarizeService>) -> TestServer {
    let settings = Arc::new(Settings::new().unwrap());
    let service: Arc<dyn SummarizeService> = stub;
    let app = routes::routes()
        .layer(Extension(service))
        .layer(Extension(settings));
    TestServer::new(app).unwrap()
}

/// 测试成功返回摘要
///
/// 验证服务返回摘要文本时，端点以200状态码和JSON格式转发该文本
#[tokio::test]
async fn test_summarize_returns_summary() {
    let summary = "* Point one.\n* Point two.\n* Point three.\n* Point four.\n* Point five.";
    let stub = StubSummarizeService::new(StubReply::Summary(summary));
    let server = test_server(stub);

    let response = server
        .post("/summarize")
        .json(&json!({
            "youtube_link": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["summary"], summary);
}

/// 测试链接在提交前被规范化
///
/// 验证短链接在传递给摘要服务之前被改写为标准观看链接
#[tokio::test]
async fn test_summarize_normalizes_link_before_delegating() {
    let stub = StubSummarizeService::new(StubReply::Summary("* Fine."));
    let server = test_server(stub.clone());

    let response = server
        .post("/summarize")
        .json(&json!({
            "youtube_link": "https://youtu.be/dQw4w9WgXcQ"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let seen = stub.seen_urls.lock().unwrap();
    assert_eq!(*seen, ["https://www.youtube.com/watch?v=dQw4w9WgXcQ"]);
}

/// 测试缺失链接被拒绝
///
/// 验证请求体中没有youtube_link字段时返回400和固定错误信息
#[tokio::test]
async fn test_summarize_missing_link_rejected() {
    let stub = StubSummarizeService::new(StubReply::Summary("* Unused."));
    let server = test_server(stub.clone());

    let response = server.post("/summarize").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing 'youtube_link' in request.");
    assert!(stub.seen_urls.lock().unwrap().is_empty());
}

/// 测试空链接被拒绝
///
/// 验证null与空字符串链接与缺失字段同样处理
#[tokio::test]
async fn test_summarize_empty_link_rejected() {
    let stub = StubSummarizeService::new(StubReply::Summary("* Unused."));
    let server = test_server(stub.clone());

    for payload in [json!({ "youtube_link": null }), json!({ "youtube_link": "" })] {
        let response = server.post("/summarize").json(&payload).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Missing 'youtube_link' in request.");
    }
    assert!(stub.seen_urls.lock().unwrap().is_empty());
}

/// 测试API错误被转发
///
/// 验证上游API错误以500状态码返回，错误信息保留上游细节
#[tokio::test]
async fn test_summarize_api_error_returns_500() {
    let stub = StubSummarizeService::new(StubReply::ApiError {
        status: 403,
        message: "PERMISSION_DENIED: quota exceeded",
    });
    let server = test_server(stub.clone());

    let response = server
        .post("/summarize")
        .json(&json!({
            "youtube_link": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("API Error: 403"));
    assert!(message.contains("quota exceeded"));
    assert_eq!(stub.seen_urls.lock().unwrap().len(), 1);
}

/// 测试意外错误被转发
///
/// 验证网络等意外错误以500状态码和"Unexpected Error"前缀返回
#[tokio::test]
async fn test_summarize_unexpected_error_returns_500() {
    let stub = StubSummarizeService::new(StubReply::Unexpected("connection reset by peer"));
    let server = test_server(stub);

    let response = server
        .post("/summarize")
        .json(&json!({
            "youtube_link": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Unexpected Error:"));
    assert!(message.contains("connection reset by peer"));
}

/// 测试无法解析的请求体进入统一错误响应
///
/// 验证语法错误、字段类型错误、null请求体与非JSON内容类型
/// 均返回500和统一的"Internal Server Error"JSON错误格式
#[tokio::test]
async fn test_summarize_unparseable_body_returns_internal_error() {
    let stub = StubSummarizeService::new(StubReply::Summary("* Unused."));
    let server = test_server(stub.clone());

    // Invalid JSON syntax with the right content type
    let response = server
        .post("/summarize")
        .text("{not json")
        .content_type("application/json")
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Internal Server Error:"));

    // Valid JSON but the wrong type for the link field
    let response = server
        .post("/summarize")
        .json(&json!({ "youtube_link": 123 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Internal Server Error:"));
    assert!(message.contains("invalid type"));

    // A bare null body deserializes into nothing
    let response = server.post("/summarize").json(&json!(null)).await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Internal Server Error:"));

    // Plain text body without a JSON content type
    let response = server.post("/summarize").text("not json at all").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Internal Server Error:"));

    assert!(stub.seen_urls.lock().unwrap().is_empty());
}
