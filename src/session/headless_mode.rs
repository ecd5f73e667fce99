//! Headless mode execution

use super::{
    SessionData,
    console::ConsoleView,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::Event;
use crate::render::render_market;
use crate::state::{Applied, MarketState};
use std::error::Error;
use std::io::Write;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Printing the first page of the listing after every fetch
/// 3. Ctrl+C shutdown handling
///
/// # Arguments
/// * `session` - Session data from setup
/// * `color` - Whether to color price changes
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(mut session: SessionData, color: bool) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let mut state = MarketState::default();
    let mut view = ConsoleView::new(std::io::stdout(), color);

    // Event loop: log events and the listing to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
                handle_event(&mut state, &mut view, event);
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    // Wait for workers to finish
    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}

/// Applies a worker event to the listing and prints the result.
fn handle_event<W: Write>(state: &mut MarketState, view: &mut ConsoleView<W>, event: Event) {
    let Some(outcome) = event.outcome else {
        return;
    };
    match state.apply_outcome(outcome) {
        Applied::Applied => render_market(state, view),
        Applied::Stale => log::debug!("Dropped a stale fetch result"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetRecord;
    use crate::consts::cli_consts::FETCH_FAILED_MESSAGE;
    use crate::error_classifier::LogLevel;
    use crate::events::{EventType, FetchTrigger};

    fn listing(n: usize) -> Vec<AssetRecord> {
        (1..=n)
            .map(|i| AssetRecord::new(format!("coin-{}", i), format!("Coin {}", i), "cn"))
            .collect()
    }

    #[test]
    fn test_events_print_loading_then_listing() {
        let mut state = MarketState::default();
        let mut view = ConsoleView::new(Vec::new(), false);

        handle_event(&mut state, &mut view, Event::fetch_started(1, FetchTrigger::Startup));
        handle_event(&mut state, &mut view, Event::fetch_loaded(1, listing(12)));

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.starts_with("Loading market data...\n"));
        assert!(text.contains("Coin 10 (CN)"));
        assert!(!text.contains("Coin 11 (CN)"));
        assert!(text.ends_with("Page 1 of 2: [1] 2 Next\n"));
    }

    #[test]
    fn test_failure_and_stale_results() {
        let mut state = MarketState::default();
        let mut view = ConsoleView::new(Vec::new(), false);

        handle_event(&mut state, &mut view, Event::fetch_started(1, FetchTrigger::Startup));
        handle_event(&mut state, &mut view, Event::fetch_started(2, FetchTrigger::Manual));
        handle_event(
            &mut state,
            &mut view,
            Event::fetch_failed(2, "HTTP 500".to_string(), LogLevel::Warn),
        );
        handle_event(&mut state, &mut view, Event::fetch_loaded(1, listing(3)));
        handle_event(
            &mut state,
            &mut view,
            Event::dashboard_with_level("noise".to_string(), EventType::Input, LogLevel::Info),
        );

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.ends_with(&format!("{}\n", FETCH_FAILED_MESSAGE)));
        assert!(state.all_assets().is_empty());
    }
}
