// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 将各种形式的YouTube视频链接规范化为标准观看链接
///
/// # 参数
/// * `url` - 原始视频链接，支持 `youtu.be` 短链接和 `m.youtube.com` 移动端链接
///
/// # 返回值
/// * `String` - 规范化后的 `https://www.youtube.com/watch?v=...` 链接；
///   无法识别的输入原样返回
///
/// 该函数从不失败：解析错误或未知的链接形式一律原样返回，
/// 对已规范化的链接重复调用不会改变结果。
pub fn normalize_youtube_url(url: &str) -> String {
    canonical_watch_url(url).unwrap_or_else(|| url.to_string())
}

/// 尝试从短链接或移动端链接构造规范观看链接
///
/// 仅当链接需要改写时返回`Some`，其余情况返回`None`由调用方保留原始输入
fn canonical_watch_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    if host.contains("youtu.be") {
        // Short links carry the video ID as the path, e.g. https://youtu.be/dQw4w9WgXcQ
        let video_id = parsed.path().trim_start_matches('/');
        return Some(format!("https://www.youtube.com/watch?v={}", video_id));
    }

    if host.contains("m.youtube.com") {
        // Mobile links keep the ID in the query string, extra parameters are dropped
        if let Some(video_id) = parsed
            .query_pairs()
            .find(|(key, value)| key == "v" && !value.is_empty())
            .map(|(_, value)| value.into_owned())
        {
            return Some(format!("https://www.youtube.com/watch?v={}", video_id));
        }
    }

    // Desktop watch links are already canonical, everything else passes through untouched
    None
}
