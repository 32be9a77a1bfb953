use btc_analysis_console::{
    api::localize_timestamps,
    config::DisplayConfig,
    routes::{self, page_title},
    util::{
        TimestampStyle, convert_many, convert_many_short, convert_many_value, to_beijing_full,
        to_beijing_short,
    },
};
use serde_json::json;

#[test]
fn history_table_renders_in_beijing_time() {
    let rows = ["2025-11-10 19:41", "2025-11-10 19:41:00", "", "bad-row"];

    assert_eq!(
        convert_many(&rows),
        vec!["2025-11-11 03:41:00", "2025-11-11 03:41:00", "", "bad-row"]
    );
    assert_eq!(
        convert_many_short(&rows),
        vec!["11-11 03:41", "11-11 03:41", "", "bad-row"]
    );
}

#[test]
fn conversion_is_deterministic() {
    let input = "2025-01-01 23:00:00";
    assert_eq!(to_beijing_full(input), to_beijing_full(input));
    assert_eq!(to_beijing_full(input), "2025-01-02 07:00:00");
    assert_eq!(to_beijing_short(input), "01-02 07:00");
}

#[test]
fn historical_payload_is_localized_end_to_end() {
    let mut payload = json!({
        "success": true,
        "data": {
            "timestamps": ["2025-11-10 16:00", "2025-11-10 17:00"],
            "prices": [76000.5, 76120.0]
        }
    });

    let raw = payload["data"]["timestamps"].clone();
    localize_timestamps(&mut payload, TimestampStyle::Short);

    assert_eq!(payload["data"]["timestamps"], json!(["11-11 00:00", "11-11 01:00"]));
    assert_eq!(convert_many_value(&raw), vec!["2025-11-11 00:00:00", "2025-11-11 01:00:00"]);
    assert_eq!(payload["data"]["prices"], json!([76000.5, 76120.0]));
}

#[test]
fn every_route_has_a_distinct_page_title() {
    let display = DisplayConfig::default();
    let titles: Vec<_> = routes::routes()
        .iter()
        .map(|route| page_title(Some(route), &display))
        .collect();

    assert_eq!(titles.len(), 5);
    assert!(titles.iter().all(|title| title.ends_with(" - BTC Analysis Platform")));
    assert_eq!(titles[0], "实时仪表板 - BTC Analysis Platform");
    assert_eq!(titles[4], "系统设置 - BTC Analysis Platform");
}
