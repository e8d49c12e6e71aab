use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "subscriptions.txt";
pub const DEFAULT_OUTPUT: &str = "subscriptions.csv";
pub const DEFAULT_RATE_URL: &str = "https://api.exchangerate-api.com";
pub const FALLBACK_RATE: f64 = 1.0;

/// Settings for one conversion run. Built once from the command line and
/// handed to [`crate::run`] by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Base URL of the exchange-rate service, without the `/v4/...` path.
    pub rate_url: String,
    /// Rate used when the live fetch fails.
    pub fallback_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            rate_url: DEFAULT_RATE_URL.to_string(),
            fallback_rate: FALLBACK_RATE,
        }
    }
}

impl AppConfig {
    /// Picks input and output paths: flag value, then positional value, then default.
    pub fn resolve(
        input_flag: Option<PathBuf>,
        input_pos: Option<PathBuf>,
        output_flag: Option<PathBuf>,
        output_pos: Option<PathBuf>,
    ) -> Self {
        let defaults = Self::default();
        AppConfig {
            input: input_flag.or(input_pos).unwrap_or(defaults.input),
            output: output_flag.or(output_pos).unwrap_or(defaults.output),
            ..defaults
        }
    }

    pub fn with_rate_url(mut self, rate_url: impl Into<String>) -> Self {
        self.rate_url = rate_url.into();
        self
    }

    pub fn with_fallback_rate(mut self, fallback_rate: f64) -> Self {
        self.fallback_rate = fallback_rate;
        self
    }
}
