//! Currency conversion abstractions

use anyhow::Result;
use async_trait::async_trait;
use console::style;
use tracing::{debug, warn};

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64>;
}

/// Asks `provider` once for the USD to EUR rate. Any failure is reported on
/// stderr and replaced with `fallback`, so the caller always gets a rate.
/// `on_fetched` runs as soon as the request settles, before anything is printed.
pub async fn rate_or_fallback(
    provider: &dyn ExchangeRateProvider,
    fallback: f64,
    on_fetched: &(dyn Fn() + Sync),
) -> f64 {
    let fetched = provider.get_rate("USD", "EUR").await;
    on_fetched();

    match fetched {
        Ok(rate) => {
            debug!(rate, "Using live exchange rate");
            rate
        }
        Err(e) => {
            warn!(error = %e, fallback, "Exchange rate fetch failed");
            eprintln!(
                "{}",
                style("Failed to fetch exchange rate").red().for_stderr()
            );
            fallback
        }
    }
}
