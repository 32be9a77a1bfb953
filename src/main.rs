use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use btc_analysis_console::{
    ApiClient, AppConfig,
    routes::{self, page_title},
    util::{TimestampStyle, current_beijing_time, format_beijing, now_in_beijing},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::load().context("加载配置失败")?;
    info!(target: "console", base_url = %config.api.base_url, "后端地址");

    for route in routes::routes() {
        info!(
            target: "console",
            path = route.path,
            name = route.name(),
            icon = route.icon,
            "{}",
            route.title
        );
    }

    println!("当前北京时间: {}", current_beijing_time());

    let mut style = TimestampStyle::Full;
    let mut targets = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--short" => style = TimestampStyle::Short,
            "--full" => style = TimestampStyle::Full,
            _ => targets.push(arg),
        }
    }

    if targets.is_empty() {
        return Ok(());
    }

    let client = ApiClient::new(&config.api)?;

    for target in targets {
        if let Some(route) = routes::resolve(&target) {
            println!("{}", page_title(Some(route), &config.display));
            continue;
        }

        match client.get_localized(&target, &[], style).await {
            Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
            Err(err) => {
                error!(target: "console", path = %target, error = %err, "请求后端失败");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_timer(LocalTimer)
        .with_writer(std::io::stderr)
        .init();

    info!("tracing initialized");
}

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = now_in_beijing();
        write!(w, "{}", format_beijing(&now, "%Y-%m-%d %H:%M:%S%:z"))
    }
}
