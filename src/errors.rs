use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("缺少必要的配置: {0}")]
    MissingConfig(&'static str),

    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    #[error("无法解析的时间: {input}")]
    InvalidTimestamp { input: String },

    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("后端返回状态码 {status}: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("JSON 解析失败: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl AppError {
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            input: input.into(),
        }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
