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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、前端页面和指标导出等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 前端页面配置
    pub frontend: FrontendSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 前端页面配置设置
#[derive(Debug, Deserialize)]
pub struct FrontendSettings {
    /// 首页HTML文件路径
    pub index_path: String,
}

/// 指标导出配置设置
#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    /// Prometheus指标导出端口
    pub port: u16,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        // A bare PORT variable is common on hosting platforms and wins over all other sources
        Self::with_port_override(std::env::var("PORT").ok().and_then(|p| p.parse::<i64>().ok()))
    }

    /// 从默认值、配置文件与环境变量构建配置
    ///
    /// 平台端口覆盖由调用方显式传入，测试无需改写进程环境变量
    fn with_port_override(port_override: Option<i64>) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            // Default frontend settings
            .set_default("frontend.index_path", "index.html")?
            // Default metrics settings
            .set_default("metrics.port", 9000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("YTSUM").separator("__"))
            .set_override_option("server.port", port_override)?;

        builder.build()?.try_deserialize()
    }
}
