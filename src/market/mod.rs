use crate::asset::AssetRecord;
use crate::environment::Environment;
use crate::market::error::MarketError;

pub(crate) mod client;
pub use client::CoinGeckoClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MarketData: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the current top-of-market listing.
    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>, MarketError>;
}
