//! Session setup and initialization

use crate::environment::Environment;
use crate::events::Event;
use crate::market::error::MarketError;
use crate::market::{CoinGeckoClient, MarketData};
use crate::runtime::start_market_worker;
use crate::workers::core::WorkerConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Requests an immediate refresh from the fetch worker
    pub refresh_sender: mpsc::Sender<()>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Where market data is fetched from
    pub environment: Environment,
}

/// Sets up a market session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Creates the market data client
/// 2. Sets up shutdown channel
/// 3. Starts the fetch worker, which fetches immediately
///
/// # Arguments
/// * `env` - Market data API to use
/// * `refresh_interval` - Time between scheduled refreshes
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(
    env: Environment,
    refresh_interval: Duration,
) -> Result<SessionData, MarketError> {
    let market: Arc<dyn MarketData> = Arc::new(CoinGeckoClient::new(env.clone())?);
    Ok(start_session(market, refresh_interval))
}

/// Starts the worker side of a session against any market source.
pub fn start_session(market: Arc<dyn MarketData>, refresh_interval: Duration) -> SessionData {
    let environment = market.environment().clone();

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, refresh_sender, handle) = start_market_worker(
        market,
        WorkerConfig::new(refresh_interval),
        shutdown_sender.subscribe(),
    );

    SessionData {
        event_receiver,
        refresh_sender,
        join_handles: vec![handle],
        shutdown_sender,
        environment,
    }
}
