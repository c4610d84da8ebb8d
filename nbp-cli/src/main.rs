//! NBP CLI
//!
//! Command-line access to the bank's rate tables.

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use nbp_feed::{DEFAULT_BASE_URL, FeedConfig, build_feed};
use nbp_hex::{DEFAULT_MAX_FALLBACK_DAYS, QueryService};
use nbp_types::{Clock, Envelope, PublicationDate, SystemClock};

#[derive(Parser)]
#[command(name = "nbp")]
#[command(author, version, about = "NBP currency rates", long_about = None)]
struct Cli {
    /// Base URL of the NBP XML feed
    #[arg(long, env = "NBP_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Timeout for each feed request, in seconds
    #[arg(
        long,
        env = "NBP_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    timeout_secs: u64,

    /// How many earlier days to search when nothing is published on the date
    #[arg(long, env = "NBP_MAX_FALLBACK_DAYS", default_value_t = DEFAULT_MAX_FALLBACK_DAYS, global = true)]
    max_fallback_days: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get average rates for all or a selection of currencies
    #[command(visible_alias = "a")]
    Avg(QueryArgs),
    /// Get buy and sell rates for all or a selection of currencies
    #[command(visible_alias = "c")]
    Both(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// Day in YYYY-MM-DD form [default: today]
    #[arg(long)]
    date: Option<String>,

    /// `*` or comma-separated currency codes (e.g. USD,EUR)
    #[arg(long, default_value = "*")]
    code: String,
}

impl QueryArgs {
    fn date_or_today(&self) -> String {
        self.date
            .clone()
            .unwrap_or_else(|| PublicationDate::from_naive(SystemClock.today()).to_string())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the JSON result only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let feed = build_feed(&FeedConfig::new(
        cli.base_url,
        Duration::from_secs(cli.timeout_secs),
    ))?;
    let service = QueryService::new(feed).with_max_fallback_days(cli.max_fallback_days);

    let result = match &cli.command {
        Commands::Avg(args) => service.average(&args.date_or_today(), &args.code).await,
        Commands::Both(args) => service.buy_and_sell(&args.date_or_today(), &args.code).await,
    };

    let envelope = match result {
        Ok(table) => Envelope::success(table),
        Err(err) => {
            tracing::debug!(error = ?err, "query failed");
            Envelope::error(err.to_string())
        }
    };

    println!("{}", serde_json::to_string_pretty(&envelope)?);

    if !envelope.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
