//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod log;
pub mod report;
pub mod subscription;

// Re-export main types for cleaner imports
pub use config::AppConfig;
pub use currency::{ExchangeRateProvider, rate_or_fallback};
pub use subscription::{ParsedSubscriptions, SubscriptionRecord, parse_subscriptions};
