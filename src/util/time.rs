//! 北京时间 (UTC+8) 显示格式化。
//!
//! 后端返回的时间字段是不带时区标记的 UTC 时间 (`YYYY-MM-DD HH:mm[:ss]`)。
//! 这里显式地加上固定的 +8 小时偏移后再格式化，不依赖宿主机的时区数据库，
//! 因此同一输入在任何环境下得到相同输出。
//!
//! 所有 `to_beijing_*` / `convert_*` 函数都是 fail-soft 的：解析失败时记录一条
//! `warn` 日志并原样返回输入，调用方永远不会收到错误。

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};
use serde_json::Value;
use tracing::warn;

use crate::errors::{AppError, Result};

const BEIJING_OFFSET_SECONDS: i32 = 8 * 3600;

/// `YYYY-MM-DD HH:mm:ss`
pub const FULL_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
/// `MM-DD HH:mm`
pub const SHORT_PATTERN: &str = "%m-%d %H:%M";

const INPUT_PATTERNS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

fn beijing_offset() -> FixedOffset {
    FixedOffset::east_opt(BEIJING_OFFSET_SECONDS)
        .expect("UTC+8 offset should be available for Beijing time")
}

pub fn now_in_beijing() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&beijing_offset())
}

pub fn format_beijing(now: &DateTime<FixedOffset>, pattern: &str) -> String {
    now.format(pattern).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampStyle {
    #[default]
    Full,
    Short,
}

impl TimestampStyle {
    pub fn pattern(&self) -> &'static str {
        match self {
            TimestampStyle::Full => FULL_PATTERN,
            TimestampStyle::Short => SHORT_PATTERN,
        }
    }

    pub fn convert(&self, utc: &str) -> String {
        if utc.is_empty() {
            return String::new();
        }

        match parse_utc(utc) {
            Ok(instant) => {
                format_beijing(&instant.with_timezone(&beijing_offset()), self.pattern())
            }
            Err(err) => {
                warn!(target: "timefmt", input = utc, error = %err, "时间转换失败，保留原始值");
                utc.to_string()
            }
        }
    }

    pub fn convert_opt(&self, utc: Option<&str>) -> String {
        utc.map(|value| self.convert(value)).unwrap_or_default()
    }
}

/// 严格解析无时区标记的 UTC 时间，秒可省略。
///
/// 闰秒 (`:60`) 和四位数以外的年份视为无效，保证输出始终是定宽的真实时刻。
pub fn parse_utc(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    INPUT_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
        .filter(|naive| naive.nanosecond() < 1_000_000_000)
        .filter(|naive| (0..=9999).contains(&naive.year()))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| AppError::invalid_timestamp(input))
}

pub fn to_beijing_full(utc: &str) -> String {
    TimestampStyle::Full.convert(utc)
}

pub fn to_beijing_full_opt(utc: Option<&str>) -> String {
    TimestampStyle::Full.convert_opt(utc)
}

pub fn to_beijing_short(utc: &str) -> String {
    TimestampStyle::Short.convert(utc)
}

pub fn to_beijing_short_opt(utc: Option<&str>) -> String {
    TimestampStyle::Short.convert_opt(utc)
}

pub fn convert_many<S: AsRef<str>>(timestamps: &[S]) -> Vec<String> {
    timestamps
        .iter()
        .map(|ts| to_beijing_full(ts.as_ref()))
        .collect()
}

pub fn convert_many_short<S: AsRef<str>>(timestamps: &[S]) -> Vec<String> {
    timestamps
        .iter()
        .map(|ts| to_beijing_short(ts.as_ref()))
        .collect()
}

/// 任意 JSON 值的批量转换：非数组返回空列表，数组长度与顺序保持不变。
pub fn convert_many_value(value: &Value) -> Vec<String> {
    convert_value_with(value, TimestampStyle::Full)
}

pub fn convert_many_short_value(value: &Value) -> Vec<String> {
    convert_value_with(value, TimestampStyle::Short)
}

pub(crate) fn convert_value_with(value: &Value, style: TimestampStyle) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(text) => style.convert(text),
            Value::Null => String::new(),
            // 非字符串元素无法解析，按 fail-soft 原样输出
            other => style.convert(&other.to_string()),
        })
        .collect()
}

pub fn current_beijing_time() -> String {
    format_beijing(&now_in_beijing(), FULL_PATTERN)
}
