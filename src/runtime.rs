//! Runtime for the market fetch worker

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, REFRESH_QUEUE_SIZE};
use crate::events::Event;
use crate::market::MarketData;
use crate::workers::core::{EventSender, WorkerConfig};
use crate::workers::fetcher::MarketFetcher;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the market fetcher.
///
/// Returns the event stream, the manual refresh channel and the worker handle.
pub fn start_market_worker(
    market: Arc<dyn MarketData>,
    config: WorkerConfig,
    shutdown: broadcast::Receiver<()>,
) -> (mpsc::Receiver<Event>, mpsc::Sender<()>, JoinHandle<()>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (refresh_sender, refresh_receiver) = mpsc::channel::<()>(REFRESH_QUEUE_SIZE);

    let fetcher = MarketFetcher::new(market, EventSender::new(event_sender), config);
    let handle = tokio::spawn(fetcher.run(refresh_receiver, shutdown));

    (event_receiver, refresh_sender, handle)
}
