//! Error handling for the market data module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    /// The listing body could not be parsed as a list of assets
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl MarketError {
    pub async fn from_response(response: reqwest::Response) -> MarketError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        MarketError::Http { status, message }
    }

    /// HTTP status of the failed request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            MarketError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
