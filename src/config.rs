use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/app_config.toml";
const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";
const DEFAULT_API_PREFIX: &str = "/api";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_SITE_NAME: &str = "BTC Analysis Platform";
const DEFAULT_PAGE_TITLE: &str = "比特币分析";
const ENV_PREFIX: &str = "BTC";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub prefix: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            prefix: DEFAULT_API_PREFIX.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DisplayConfig {
    pub site_name: String,
    /// 路由未设置标题时使用
    pub default_title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            default_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// 配置文件路径取自 `APP_CONFIG_PATH`，文件不存在时全部使用默认值。
    /// 环境变量 `BTC__API__BASE_URL` 之类可覆盖文件中的同名项。
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("APP_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            info!(target: "config", path = %config_path.display(), "读取配置文件");
        } else {
            debug!(target: "config", path = %config_path.display(), "配置文件不存在，使用默认配置");
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(PathBuf::from(config_path)).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let file_config: FileConfig = settings.try_deserialize()?;

        Ok(Self {
            api: file_config.api.unwrap_or_default().into_domain()?,
            display: file_config.display.unwrap_or_default().into_domain(),
        })
    }
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    api: Option<FileApiConfig>,
    #[serde(default)]
    display: Option<FileDisplayConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct FileApiConfig {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default)]
    timeout_seconds: Option<u64>,
}

impl FileApiConfig {
    fn into_domain(self) -> Result<ApiConfig> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if base_url.is_empty() {
            return Err(AppError::MissingConfig("api.base_url"));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AppError::invalid_config(format!(
                "api.base_url 必须以 http:// 或 https:// 开头: {base_url}"
            )));
        }

        let prefix = self
            .prefix
            .unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());
        let prefix = normalize_prefix(&prefix);

        let timeout_seconds = self
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
            .max(1);

        Ok(ApiConfig {
            base_url,
            prefix,
            timeout: Duration::from_secs(timeout_seconds),
        })
    }
}

#[derive(Debug, Deserialize, Default)]
struct FileDisplayConfig {
    #[serde(default)]
    site_name: Option<String>,
    #[serde(default)]
    default_title: Option<String>,
}

impl FileDisplayConfig {
    fn into_domain(self) -> DisplayConfig {
        DisplayConfig {
            site_name: self
                .site_name
                .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            default_title: self
                .default_title
                .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string()),
        }
    }
}

/// `api/` -> `/api`，空串表示不加前缀。
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
