//! One-shot listing: fetch once, print one page, exit

use super::console::ConsoleView;
use crate::environment::Environment;
use crate::error_classifier::ErrorClassifier;
use crate::market::error::MarketError;
use crate::market::{CoinGeckoClient, MarketData};
use crate::render::render_market;
use crate::state::MarketState;
use std::io::Write;

/// What to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub search: Option<String>,
    pub page: usize,
}

/// Fetches the listing from `env` and prints the requested page to stdout.
pub async fn run_list(env: Environment, options: ListOptions, color: bool) -> Result<(), MarketError> {
    let client = CoinGeckoClient::new(env)?;
    let mut view = ConsoleView::new(std::io::stdout(), color);
    print_listing(&client, &options, &mut view).await
}

/// Runs one fetch and renders the outcome onto `view`.
///
/// A failed fetch still renders the failure message before the error is returned.
pub async fn print_listing<W: Write>(
    market: &dyn MarketData,
    options: &ListOptions,
    view: &mut ConsoleView<W>,
) -> Result<(), MarketError> {
    let mut state = MarketState::default();
    state.begin_fetch(1);

    match market.fetch_assets().await {
        Ok(assets) => {
            log::debug!("Fetched {} assets", assets.len());
            state.apply_assets(1, assets);
            if let Some(term) = &options.search {
                state.apply_search(term);
            }
            state.go_to_page(options.page);
            render_market(&state, view);
            Ok(())
        }
        Err(e) => {
            let level = ErrorClassifier::new().classify_fetch_error(&e);
            log::log!(log::Level::from(level), "Error fetching cryptocurrency data: {}", e);
            state.apply_failure(1);
            render_market(&state, view);
            Err(e)
        }
    }
}
