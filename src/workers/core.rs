//! Core worker utilities

use crate::events::Event;
use std::time::Duration;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event. A closed receiver means the session is ending, so the event is dropped.
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }
}

/// Worker configuration
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Time between scheduled refreshes.
    pub refresh_interval: Duration,
}

impl WorkerConfig {
    pub fn new(refresh_interval: Duration) -> Self {
        Self { refresh_interval }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self::new(crate::consts::cli_consts::refresh::refresh_interval())
    }
}
