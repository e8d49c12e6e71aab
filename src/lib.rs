pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::{summary, ui};
use crate::core::currency::{ExchangeRateProvider, rate_or_fallback};
use crate::core::subscription::split_lines;
use crate::core::{AppConfig, SubscriptionRecord, parse_subscriptions, report};
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Outcome of one conversion run.
#[derive(Debug)]
pub struct RunReport {
    pub rate: f64,
    pub records: Vec<SubscriptionRecord>,
    pub skipped: usize,
    pub total: f64,
}

/// Converts `config.input` into the CSV report at `config.output` and prints
/// the summary. Any error reading the input aborts before output is produced.
pub async fn run(config: &AppConfig, provider: &dyn ExchangeRateProvider) -> Result<RunReport> {
    info!("Subscription converter starting...");
    debug!("Using config: {config:#?}");

    let content = std::fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read input file: {}", config.input.display()))?;
    let lines = split_lines(&content);
    debug!(lines = lines.len(), "Read input from {}", config.input.display());

    let pb = ui::new_spinner("Fetching exchange rate...");
    let rate = rate_or_fallback(provider, config.fallback_rate, &|| {
        pb.finish_and_clear();
    })
    .await;

    let parsed = parse_subscriptions(&lines, rate);
    if parsed.skipped > 0 {
        warn!(skipped = parsed.skipped, "Skipped malformed subscription records");
    }

    let total = report::write_report(&parsed.records, &config.output)?;
    summary::print_summary(&config.output, total)?;

    Ok(RunReport {
        rate,
        records: parsed.records,
        skipped: parsed.skipped,
        total,
    })
}

/// Runs the conversion against the exchange-rate service at `config.rate_url`.
pub async fn run_with_default_provider(config: &AppConfig) -> Result<RunReport> {
    let provider = providers::ExchangeRateApiProvider::new(&config.rate_url);
    run(config, &provider).await
}
