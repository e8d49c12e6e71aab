use tracing::debug;

/// Currency assumed when a price line carries no currency code.
pub const DEFAULT_CURRENCY: &str = "€";

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionRecord {
    pub service: String,
    pub price: f64,
    pub currency: String,
    pub price_eur: f64,
}

impl SubscriptionRecord {
    /// Builds a record, converting to EUR only when `currency` is exactly `USD`.
    /// Every other code is taken as already being in EUR.
    pub fn new(
        service: impl Into<String>,
        price: f64,
        currency: impl Into<String>,
        rate: f64,
    ) -> Self {
        let currency = currency.into();
        let price_eur = if currency == "USD" { price * rate } else { price };
        SubscriptionRecord {
            service: service.into(),
            price,
            currency,
            price_eur,
        }
    }

    pub fn price_display(&self) -> String {
        format!("{:.2}", self.price)
    }

    pub fn price_eur_display(&self) -> String {
        format!("{:.2}", self.price_eur)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedSubscriptions {
    pub records: Vec<SubscriptionRecord>,
    /// Pairs dropped because the price line was empty or not a number.
    pub skipped: usize,
}

/// Splits text into lines on `\n`, `\r\n` or a lone `\r`. A trailing line
/// terminator does not start an extra empty line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = content
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
        .collect();
    if content.is_empty() || content.ends_with(['\r', '\n']) {
        lines.pop();
    }
    lines
}

// Accepts `_` only as a single separator between two digits, e.g. `1_000`.
fn remove_digit_separators(token: &str) -> Option<String> {
    let bytes = token.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(token.replace('_', ""))
}

fn parse_price(token: &str) -> Option<f64> {
    remove_digit_separators(token.trim_start_matches('$'))?
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

fn parse_pair(service_line: &str, price_line: &str, rate: f64) -> Option<SubscriptionRecord> {
    let service = service_line.trim();
    let mut tokens = price_line.trim().trim_start_matches('\t').split_whitespace();

    let price = parse_price(tokens.next()?)?;
    let currency = tokens.next().unwrap_or(DEFAULT_CURRENCY);

    Some(SubscriptionRecord::new(service, price, currency, rate))
}

/// Reads `lines` as (service, price) pairs. A trailing unpaired line is
/// ignored; pairs whose price line is empty or malformed are skipped and
/// counted. Record order follows input order.
pub fn parse_subscriptions<S: AsRef<str>>(lines: &[S], rate: f64) -> ParsedSubscriptions {
    let mut parsed = ParsedSubscriptions::default();

    for pair in lines.chunks_exact(2) {
        let (service_line, price_line) = (pair[0].as_ref(), pair[1].as_ref());
        match parse_pair(service_line, price_line, rate) {
            Some(record) => parsed.records.push(record),
            None => {
                debug!(
                    service = service_line.trim(),
                    price_line, "Skipping malformed record"
                );
                parsed.skipped += 1;
            }
        }
    }

    parsed
}
