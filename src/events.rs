//! Event System
//!
//! Types and implementations for worker events and logging

use crate::asset::AssetRecord;
use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that fetches the market listing on startup, on a timer and on demand.
    MarketFetcher,
    /// The interactive controller reacting to user input.
    Dashboard,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Input,
}

/// What started a fetch.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum FetchTrigger {
    #[strum(to_string = "startup")]
    Startup,
    #[strum(to_string = "scheduled refresh")]
    Scheduled,
    #[strum(to_string = "manual refresh")]
    Manual,
}

/// Result of one fetch, tagged with its request id.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Started { request_id: u64 },
    Loaded {
        request_id: u64,
        assets: Vec<AssetRecord>,
    },
    Failed { request_id: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Fetch progress carried to the controller; taken off before logging.
    pub outcome: Option<FetchOutcome>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            outcome: None,
        }
    }

    pub fn fetch_started(request_id: u64, trigger: FetchTrigger) -> Self {
        Self::new(
            Worker::MarketFetcher,
            format!("Fetching market data ({})...", trigger),
            EventType::Refresh,
            LogLevel::Info,
        )
        .with_outcome(FetchOutcome::Started { request_id })
    }

    pub fn fetch_loaded(request_id: u64, assets: Vec<AssetRecord>) -> Self {
        let msg = format!("Loaded {} assets", assets.len());
        Self::new(Worker::MarketFetcher, msg, EventType::Success, LogLevel::Info)
            .with_outcome(FetchOutcome::Loaded { request_id, assets })
    }

    pub fn fetch_failed(request_id: u64, msg: String, log_level: LogLevel) -> Self {
        Self::new(Worker::MarketFetcher, msg, EventType::Error, log_level)
            .with_outcome(FetchOutcome::Failed { request_id })
    }

    pub fn dashboard_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Dashboard, msg, event_type, log_level)
    }

    fn with_outcome(mut self, outcome: FetchOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
