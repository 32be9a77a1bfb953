mod time;

pub use time::{
    FULL_PATTERN, SHORT_PATTERN, TimestampStyle, convert_many, convert_many_short,
    convert_many_short_value, convert_many_value, current_beijing_time, format_beijing,
    now_in_beijing, parse_utc, to_beijing_full, to_beijing_full_opt, to_beijing_short,
    to_beijing_short_opt,
};
pub(crate) use time::convert_value_with;
