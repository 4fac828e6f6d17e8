use clap::Parser;
use freight_rates::http::{self, AppState};
use freight_rates::utils::error::ErrorSeverity;
use freight_rates::utils::logger;
use freight_rates::{CliConfig, RateStore};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "freight-rates")]
#[command(about = "Serves daily average freight rates between a port and a region")]
struct Cli {
    #[command(flatten)]
    config: CliConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse().config;

    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            logger::init_logger(cli.verbose, cli.json_logs, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(
        config.logging.verbose,
        config.logging.json,
        config.logging.level.as_deref(),
    );

    tracing::info!("Starting freight-rates");
    tracing::debug!("Resolved config: bind={}, store={}", config.bind_address, config.store.describe());

    let store = match config.store.build() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                "❌ Failed to prepare datastore: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            let exit_code = match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };
    tracing::info!("🗄️  Using {} datastore", store.backend_name());

    let listener = TcpListener::bind(config.socket_addr()?).await?;
    http::serve(listener, AppState::new(store), http::shutdown_signal()).await?;

    Ok(())
}
