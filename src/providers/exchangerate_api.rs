use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::currency::ExchangeRateProvider;

const USER_AGENT: &str = concat!("subconv/", env!("CARGO_PKG_VERSION"));

// ExchangeRateApiProvider implementation for ExchangeRateProvider
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateApiProvider {
    #[instrument(name = "ExchangeRateFetch", skip(self))]
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
        let url = format!("{}/v4/latest/{}", self.base_url, from);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base currency: {}", e, from))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                from
            ));
        }

        let text = response.text().await?;

        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", from, e))?;

        let rate = data
            .rates
            .get(to)
            .copied()
            .ok_or_else(|| anyhow!("No {} rate found for base currency: {}", to, from))?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(anyhow!("Invalid {} rate {} for base currency: {}", to, rate, from));
        }

        debug!(rate, "Received exchange rate");
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/latest/USD"))
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_rate_fetch() {
        let mock_response = r#"{
            "base": "USD",
            "date": "2026-10-15",
            "rates": {
                "USD": 1,
                "EUR": 0.92,
                "GBP": 0.79
            }
        }"#;
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(mock_response)).await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        let rate = provider
            .get_rate("USD", "EUR")
            .await
            .expect("Failed to get rate");
        assert_eq!(rate, 0.92);
    }

    #[tokio::test]
    async fn test_user_agent_is_sent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/latest/USD"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"rates":{"EUR":0.9}}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = ExchangeRateApiProvider::new(&format!("{}/", mock_server.uri()));
        assert_eq!(provider.get_rate("USD", "EUR").await.unwrap(), 0.9);
    }

    #[tokio::test]
    async fn test_missing_currency() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(200).set_body_string(r#"{"rates": {"GBP": 0.79}}"#),
        )
        .await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        let result = provider.get_rate("USD", "EUR").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "No EUR rate found for base currency: USD"
        );
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let mock_server = create_mock_server(ResponseTemplate::new(500)).await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        let result = provider.get_rate("USD", "EUR").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error for base currency: USD"
        );
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let mock_response = r#"{"rate": {"EUR": 0.92}}"#; // "rate" instead of "rates"
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(mock_response)).await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        let result = provider.get_rate("USD", "EUR").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON response for USD")
        );
    }

    #[tokio::test]
    async fn test_non_positive_rate_is_rejected() {
        let mock_server = create_mock_server(
            ResponseTemplate::new(200).set_body_string(r#"{"rates": {"EUR": 0}}"#),
        )
        .await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        let result = provider.get_rate("USD", "EUR").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().starts_with("Invalid EUR rate"));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        // Nothing listens on the discard port.
        let provider = ExchangeRateApiProvider::new("http://127.0.0.1:9");

        let result = provider.get_rate("USD", "EUR").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().starts_with("Request error"));
    }
}
