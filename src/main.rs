use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use subconv::core::AppConfig;
use subconv::core::config::DEFAULT_RATE_URL;
use subconv::core::log::init_logging;

/// Convert a subscription list to CSV with EUR conversion
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Input file containing subscriptions
    #[arg(value_name = "INPUT")]
    input_pos: Option<PathBuf>,

    /// Output CSV file
    #[arg(value_name = "OUTPUT")]
    output_pos: Option<PathBuf>,

    /// Input file containing subscriptions
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base URL of the exchange rate service
    #[arg(long, default_value = DEFAULT_RATE_URL)]
    rate_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = AppConfig::resolve(cli.input, cli.input_pos, cli.output, cli.output_pos)
        .with_rate_url(cli.rate_url);

    let result = subconv::run_with_default_provider(&config).await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result.map(|_| ())
}
