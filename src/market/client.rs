//! CoinGecko Market Client
//!
//! Fetches the top assets by market capitalization from a CoinGecko-compatible
//! `/coins/markets` endpoint.

use crate::asset::AssetRecord;
use crate::consts::cli_consts::{listing, refresh};
use crate::environment::Environment;
use crate::market::MarketData;
use crate::market::error::MarketError;
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("crypto-tracker/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    client: Client,
    environment: Environment,
}

impl CoinGeckoClient {
    pub fn new(environment: Environment) -> Result<Self, MarketError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(refresh::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(refresh::REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn listing_query() -> [(&'static str, String); 6] {
        [
            ("vs_currency", listing::VS_CURRENCY.to_string()),
            ("order", listing::ORDER.to_string()),
            ("per_page", listing::PER_PAGE.to_string()),
            ("page", listing::PAGE.to_string()),
            ("sparkline", "false".to_string()),
            (
                "price_change_percentage",
                listing::PRICE_CHANGE_WINDOWS.to_string(),
            ),
        ]
    }

    async fn handle_response_status(response: Response) -> Result<Response, MarketError> {
        if !response.status().is_success() {
            return Err(MarketError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl MarketData for CoinGeckoClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>, MarketError> {
        let url = self.build_url("coins/markets");
        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .query(&Self::listing_query())
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        let assets: Vec<AssetRecord> = serde_json::from_slice(&body)?;
        Ok(assets)
    }
}
