use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use super::subscription::SubscriptionRecord;

pub const HEADER: [&str; 4] = ["Service", "Price", "Currency", "PriceEUR"];

#[derive(Serialize)]
struct CsvRow<'a> {
    service: &'a str,
    price: String,
    currency: &'a str,
    price_eur: String,
}

impl<'a> From<&'a SubscriptionRecord> for CsvRow<'a> {
    fn from(record: &'a SubscriptionRecord) -> Self {
        CsvRow {
            service: &record.service,
            price: record.price_display(),
            currency: &record.currency,
            price_eur: record.price_eur_display(),
        }
    }
}

/// Writes the header and one row per record to `out`. The returned EUR total
/// is summed from the PriceEUR fields exactly as written.
pub fn write_report_to<W: Write>(records: &[SubscriptionRecord], out: W) -> Result<f64> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    let mut total = 0.0;
    writer.write_record(HEADER)?;
    for record in records {
        let row = CsvRow::from(record);
        total += row.price_eur.parse::<f64>()?;
        writer.serialize(&row)?;
    }
    writer.flush()?;

    Ok(total)
}

/// Writes the CSV report to `path`. Failing to create or write the file is fatal.
pub fn write_report<P: AsRef<Path>>(records: &[SubscriptionRecord], path: P) -> Result<f64> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    let total = write_report_to(records, file)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    debug!(rows = records.len(), total, "Wrote report to {}", path.display());
    Ok(total)
}
