//! Asset records as served by the `/coins/markets` listing.

use serde::Deserialize;

/// One cryptocurrency's market snapshot for a given fetch.
///
/// Numeric fields the API leaves out or sends as `null` decode to `None`;
/// the renderer shows those as `N/A` instead of failing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AssetRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default, rename = "price_change_percentage_7d_in_currency")]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
}

impl AssetRecord {
    /// Creates a record with only the identifying fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Whether the case-folded name or symbol contains `needle`, which must already be lower case.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // A full listing entry decodes every field we use and ignores the rest.
    fn test_decode_listing_entry() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://example.invalid/btc.png",
            "current_price": 67123.45,
            "market_cap": 1320000000000,
            "market_cap_rank": 1,
            "total_volume": 25100000000,
            "price_change_percentage_24h": -1.234,
            "price_change_percentage_7d_in_currency": 3.5,
            "circulating_supply": 19700000.0
        }"#;

        let asset: AssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, "bitcoin");
        assert_eq!(asset.current_price, Some(67123.45));
        assert_eq!(asset.market_cap_rank, Some(1));
        assert_eq!(asset.price_change_percentage_7d, Some(3.5));
    }

    #[test]
    // Nulls and missing numbers degrade to `None` rather than failing the decode.
    fn test_decode_tolerates_nulls() {
        let json = r#"{"id": "x", "symbol": "x", "name": "X", "market_cap_rank": null, "current_price": null}"#;

        let asset: AssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(asset.market_cap_rank, None);
        assert_eq!(asset.current_price, None);
        assert_eq!(asset.total_volume, None);
    }

    #[test]
    fn test_matches_name_or_symbol() {
        let asset = AssetRecord::new("bitcoin", "Bitcoin", "BTC");
        assert!(asset.matches("coin"));
        assert!(asset.matches("bt"));
        assert!(!asset.matches("eth"));
    }
}
