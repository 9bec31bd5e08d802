// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::env;
use thiserror::Error;

/// 发送给Gemini的固定摘要提示词，要求输出五条要点
const SUMMARY_PROMPT: &str = "You are an expert video summarization bot. \
Analyze the content of this YouTube video and provide a **concise summary of the main points**. \
The output **must be a list of exactly 5 bullet points**, with each point being a full sentence, \
using the markdown '*' character for the list.";

/// 摘要服务错误类型
///
/// 区分上游API明确返回的错误与请求、解析阶段的意外错误
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Gemini API返回的非成功响应
    #[error("API Error: {status} {message}")]
    Api { status: u16, message: String },
    /// 网络、配置或响应解析阶段的意外错误
    #[error("Unexpected Error: {0}")]
    Unexpected(String),
}

#[async_trait]
pub trait SummarizeService: Send + Sync {
    async fn summarize_video(&self, video_url: &str) -> Result<String, SummarizeError>;
}

/// Gemini摘要服务 - 处理与Gemini生成式API的交互
///
/// # 功能
///
/// 将YouTube观看链接作为视频输入提交给Gemini模型，返回五条要点的摘要文本
///
/// # 配置
///
/// 通过环境变量进行配置：
/// - `GEMINI_API_KEY` - Gemini API密钥
/// - `GEMINI_MODEL` - 使用的模型名称（默认为 gemini-2.5-flash）
/// - `GEMINI_API_BASE_URL` - Gemini API基础URL
pub struct GeminiService {
    api_key: Option<String>,
    model: String,
    api_base_url: String,
    client: reqwest::Client,
}

#[async_trait]
impl SummarizeService for GeminiService {
    async fn summarize_video(&self, video_url: &str) -> Result<String, SummarizeError> {
        GeminiService::summarize_video(self, video_url).await
    }
}

impl Default for GeminiService {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiService {
    pub fn new() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY").ok(),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            api_base_url: env::var("GEMINI_API_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn new_with_config(api_key: Option<String>, model: String, api_base_url: String) -> Self {
        Self {
            api_key,
            model,
            api_base_url,
            client: reqwest::Client::new(),
        }
    }

    /// API密钥是否已配置
    ///
    /// 未配置时服务仍可启动，但所有摘要请求都会失败
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// 请求Gemini对指定视频生成要点摘要
    ///
    /// # 参数
    /// * `video_url` - 规范化后的YouTube观看链接
    ///
    /// # 返回值
    /// * `Result<String, SummarizeError>` - 拼接后的摘要文本
    ///
    /// # 错误
    /// * 当Gemini API密钥未配置时返回错误
    /// * 当Gemini API返回非成功状态码时返回`SummarizeError::Api`
    /// * 当网络请求或响应解析失败时返回`SummarizeError::Unexpected`
    pub async fn summarize_video(&self, video_url: &str) -> Result<String, SummarizeError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| SummarizeError::Unexpected("Gemini API key not configured".to_string()))?;

        // The video is attached by reference, Gemini fetches the public URL itself
        let request_body = json!({
            "contents": [
                {
                    "parts": [
                        {
                            "fileData": {
                                "fileUri": video_url,
                                "mimeType": "video/mp4"
                            }
                        },
                        {
                            "text": SUMMARY_PROMPT
                        }
                    ]
                }
            ]
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url, self.model
        );
        let response = self
            .client
            .post(url)
            .query(&[("key", api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                SummarizeError::Unexpected(format!("Failed to send request to Gemini API: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Api {
                status,
                message: error_text,
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            SummarizeError::Unexpected(format!("Failed to parse Gemini API response: {}", e))
        })?;

        candidate_text(&body).ok_or_else(|| {
            SummarizeError::Unexpected("Invalid response format from Gemini API".to_string())
        })
    }
}

/// 从Gemini响应中取出首个候选的全部文本片段并拼接
fn candidate_text(body: &Value) -> Option<String> {
    let parts = body["candidates"][0]["content"]["parts"].as_array()?;
    let text = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect::<Vec<_>>()
        .join("");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
