use clap::Parser;
use freight_rates::utils::logger;
use freight_rates::{CliConfig, RateEngine, RateParams, RateQuery};

/// Runs one rate query against the configured datastore and prints the JSON rows.
#[derive(Parser)]
#[command(name = "rate_query")]
#[command(about = "One-shot daily average rate lookup")]
struct Args {
    /// First day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    date_from: String,

    /// Last day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    date_to: String,

    /// Origin port code
    #[arg(long)]
    origin: String,

    /// Destination region slug or port code
    #[arg(long)]
    destination: String,

    #[command(flatten)]
    config: CliConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.config.load()?;

    logger::init_logger(
        config.logging.verbose,
        config.logging.json,
        config.logging.level.as_deref(),
    );

    let query = RateQuery::from_params(RateParams {
        date_from: Some(args.date_from),
        date_to: Some(args.date_to),
        origin: Some(args.origin),
        destination: Some(args.destination),
    })
    .map_err(|e| {
        eprintln!("❌ {}", e.user_friendly_message());
        e
    })?;

    let engine = RateEngine::new(config.store.build()?);
    let rows = engine.daily_rates(&query).await?;

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
