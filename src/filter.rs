//! Search filtering over the fetched listing.

use crate::asset::AssetRecord;

/// Returns the assets whose name or symbol contains `term`, ignoring case.
///
/// An empty term yields a copy of `all`. Order is preserved.
pub fn filter_assets(all: &[AssetRecord], term: &str) -> Vec<AssetRecord> {
    if term.is_empty() {
        return all.to_vec();
    }
    let needle = term.to_lowercase();
    all.iter()
        .filter(|asset| asset.matches(&needle))
        .cloned()
        .collect()
}
