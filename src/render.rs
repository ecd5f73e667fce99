//! Projection of the market state into view content
//!
//! `render_market` decides *what* is shown; an [`AssetView`] decides *how*.
//! Each call replaces everything the view showed before.

use crate::asset::AssetRecord;
use crate::consts::cli_consts::{FETCH_FAILED_MESSAGE, NO_RESULTS_MESSAGE};
use crate::format::{
    PriceChange, format_large_number, format_price, format_rank, glyph, price_change,
};
use crate::pagination::PaginationView;
use crate::state::{ListStatus, MarketState};

/// Display-ready fields of one asset card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCard {
    pub glyph: String,
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub change_24h: PriceChange,
    pub change_7d: PriceChange,
    pub market_cap: String,
    pub volume_24h: String,
    pub circulating_supply: String,
    pub rank: String,
}

impl From<&AssetRecord> for AssetCard {
    fn from(asset: &AssetRecord) -> Self {
        let symbol = asset.symbol.to_uppercase();
        Self {
            glyph: glyph(&asset.name),
            name: asset.name.clone(),
            price: format_price(asset.current_price),
            change_24h: price_change(asset.price_change_percentage_24h),
            change_7d: price_change(asset.price_change_percentage_7d),
            market_cap: format_large_number(asset.market_cap),
            volume_24h: format_large_number(asset.total_volume),
            circulating_supply: format!(
                "{} {}",
                format_large_number(asset.circulating_supply),
                symbol
            ),
            rank: format_rank(asset.market_cap_rank),
            symbol,
        }
    }
}

/// A surface that can display the asset list and its pagination strip.
pub trait AssetView {
    /// Replace the list area with a loading indicator.
    fn show_loading(&mut self);

    /// Replace the list area with a single message.
    fn show_message(&mut self, message: &str);

    /// Replace the list area with cards.
    fn show_cards(&mut self, cards: Vec<AssetCard>);

    /// Replace the pagination strip. `None` clears it; controls from earlier
    /// renders must no longer respond.
    fn show_pagination(&mut self, pagination: Option<PaginationView>);
}

/// Renders the current state onto `view`.
///
/// Loading and failure only replace the list area; the pagination strip keeps
/// whatever the last full render put there.
pub fn render_market(state: &MarketState, view: &mut dyn AssetView) {
    match state.list_status() {
        ListStatus::Loading => view.show_loading(),
        ListStatus::Failed => view.show_message(FETCH_FAILED_MESSAGE),
        ListStatus::Loaded => {
            let items = state.visible_page();
            if items.is_empty() {
                view.show_message(NO_RESULTS_MESSAGE);
                view.show_pagination(None);
                return;
            }
            view.show_cards(items.iter().map(AssetCard::from).collect());
            view.show_pagination(state.pagination());
        }
    }
}
