//! Market listing fetcher
//!
//! Fetches once at startup, then on every tick of the refresh timer and on
//! every manual refresh request. Each fetch runs as its own task and is
//! tagged with a request id so the controller can drop stale results.
//! There is no retry: a failure is reported and the next trigger tries again.

use super::core::{EventSender, WorkerConfig};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, FetchTrigger};
use crate::market::MarketData;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{Instant, MissedTickBehavior, interval_at};

pub struct MarketFetcher {
    market: Arc<dyn MarketData>,
    event_sender: EventSender,
    config: WorkerConfig,
    classifier: ErrorClassifier,
    last_request_id: u64,
}

impl MarketFetcher {
    pub fn new(market: Arc<dyn MarketData>, event_sender: EventSender, config: WorkerConfig) -> Self {
        Self {
            market,
            event_sender,
            config,
            classifier: ErrorClassifier::new(),
            last_request_id: 0,
        }
    }

    /// Announces a new fetch and runs it in the background.
    async fn spawn_fetch(&mut self, trigger: FetchTrigger) {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.event_sender
            .send_event(Event::fetch_started(request_id, trigger))
            .await;

        tokio::spawn(fetch_listing(
            self.market.clone(),
            request_id,
            self.event_sender.clone(),
            self.classifier.clone(),
        ));
    }

    /// Runs until shutdown. Closing `refresh_requests` only stops manual refreshes.
    pub async fn run(
        mut self,
        mut refresh_requests: mpsc::Receiver<()>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        let period = self.config.refresh_interval;
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut accepting_requests = true;

        self.spawn_fetch(FetchTrigger::Startup).await;

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = ticker.tick() => {
                    self.spawn_fetch(FetchTrigger::Scheduled).await;
                }
                request = refresh_requests.recv(), if accepting_requests => {
                    match request {
                        Some(()) => self.spawn_fetch(FetchTrigger::Manual).await,
                        None => accepting_requests = false,
                    }
                }
            }
        }
    }
}

/// Performs one fetch and reports its outcome.
pub async fn fetch_listing(
    market: Arc<dyn MarketData>,
    request_id: u64,
    event_sender: EventSender,
    classifier: ErrorClassifier,
) {
    match market.fetch_assets().await {
        Ok(assets) => {
            event_sender
                .send_event(Event::fetch_loaded(request_id, assets))
                .await;
        }
        Err(e) => {
            let log_level = classifier.classify_fetch_error(&e);
            let level: log::Level = log_level.into();
            log::log!(level, "Error fetching cryptocurrency data: {}", e);
            event_sender
                .send_event(Event::fetch_failed(
                    request_id,
                    format!("Failed to fetch market data: {}", e),
                    log_level,
                ))
                .await;
        }
    }
}
