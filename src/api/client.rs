use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::ApiConfig,
    errors::{AppError, Result},
    util::{TimestampStyle, convert_value_with},
};

/// 约定俗成的时间字段：单值字段与数组字段。
const TIMESTAMP_KEYS: [&str; 3] = ["timestamp", "time", "datetime"];
const TIMESTAMP_LIST_KEYS: [&str; 1] = ["timestamps"];

/// 后端分析服务的 HTTP 客户端。接口契约对这里是不透明的，只约定返回 JSON。
#[derive(Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: String,
    prefix: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .user_agent(concat!("btc-analysis-console/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            prefix: config.prefix.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `realtime`、`/realtime` 和 `/api/realtime` 都指向 `{base}/api/realtime`。
    pub fn endpoint_url(&self, path: &str) -> String {
        let path = path.trim();
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let has_prefix = !self.prefix.is_empty()
            && (path == self.prefix || path.starts_with(&format!("{}/", self.prefix)));

        if self.prefix.is_empty() || has_prefix {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}{}", self.base_url, self.prefix, path)
        }
    }

    pub async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = self.endpoint_url(path);
        debug!(target: "api", %url, "GET");

        let response = self.http_client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status { status, url });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_localized(
        &self,
        path: &str,
        query: &[(&str, &str)],
        style: TimestampStyle,
    ) -> Result<Value> {
        let mut body = self.get_json(path, query).await?;
        localize_timestamps(&mut body, style);
        Ok(body)
    }
}

/// 递归地把响应中的 UTC 时间字段替换为北京时间显示字符串。
pub fn localize_timestamps(value: &mut Value, style: TimestampStyle) {
    match value {
        Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                if TIMESTAMP_KEYS.contains(&key.as_str()) {
                    if let Value::String(text) = field {
                        *text = style.convert(text);
                        continue;
                    }
                }
                if TIMESTAMP_LIST_KEYS.contains(&key.as_str()) && field.is_array() {
                    let converted = convert_value_with(field, style);
                    *field = Value::from(converted);
                    continue;
                }
                localize_timestamps(field, style);
            }
        }
        Value::Array(items) => {
            for item in items {
                localize_timestamps(item, style);
            }
        }
        _ => {}
    }
}
