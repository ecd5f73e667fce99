use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Public CoinGecko API base URL.
const PRODUCTION_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Represents the market data endpoints available to the tracker.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The public CoinGecko API.
    #[default]
    Production,
    /// Any API that serves a CoinGecko-compatible `/coins/markets` listing.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the base URL of the market data API for this environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Production => PRODUCTION_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    /// Parses either the keyword `production` or an http(s) base URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("production") {
            return Ok(Environment::Production);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                api_url: trimmed.trim_end_matches('/').to_string(),
            });
        }
        Err(format!(
            "Invalid environment '{}': expected 'production' or an http(s) URL",
            s
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_production_keyword() {
        assert_eq!(
            "Production".parse::<Environment>(),
            Ok(Environment::Production)
        );
    }

    #[test]
    // A custom URL keeps its host and loses trailing slashes.
    fn test_parse_custom_url() {
        let env = "http://localhost:8080/api/v3/".parse::<Environment>().unwrap();
        assert_eq!(env.api_url(), "http://localhost:8080/api/v3");
        assert_eq!(env.to_string(), "Custom");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("staging".parse::<Environment>().is_err());
    }
}
