use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match (verbose, level) {
            (true, _) => "freight_rates=debug,tower_http=debug,info".to_string(),
            (false, Some(level)) => format!("freight_rates={},tower_http=info,warn", level),
            (false, None) => "freight_rates=info,tower_http=info,warn".to_string(),
        };
        EnvFilter::new(directive)
    })
}

/// 初始化日誌；`json` 為 true 時輸出結構化 JSON (適合集中式日誌收集)
pub fn init_logger(verbose: bool, json: bool, level: Option<&str>) {
    let filter = default_filter(verbose, level);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}
