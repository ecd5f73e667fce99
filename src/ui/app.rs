//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::error_classifier::LogLevel;
use crate::events::{Event as WorkerEvent, EventType};
use crate::ui::dashboard::{DashboardAction, DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with the market listing.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state; fed with worker events while the splash is still up.
    dashboard: DashboardState,

    /// Receives events from the fetch worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Asks the fetch worker for an immediate refresh.
    refresh_sender: mpsc::Sender<()>,

    /// Broadcasts shutdown signal to worker threads.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        refresh_sender: mpsc::Sender<()>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(environment, Instant::now(), ui_config),
            event_receiver,
            refresh_sender,
            shutdown_sender,
        }
    }

    /// Carries out a dashboard action. Returns true when the app should exit.
    fn perform(&mut self, action: DashboardAction) -> bool {
        match action {
            DashboardAction::None => false,
            DashboardAction::Refresh => {
                if let Err(TrySendError::Full(())) = self.refresh_sender.try_send(()) {
                    self.dashboard
                        .add_to_activity_log(WorkerEvent::dashboard_with_level(
                            "A refresh is already queued".to_string(),
                            EventType::Refresh,
                            LogLevel::Debug,
                        ));
                }
                false
            }
            DashboardAction::Quit => {
                // Send shutdown signal to workers
                let _ = self.shutdown_sender.send(());
                true
            }
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.dashboard.add_event(event);
        }
        app.dashboard.update();

        let mut frame_area = Rect::default();
        terminal.draw(|f| {
            frame_area = f.area();
            render(f, app.current_screen, &app.dashboard);
        })?;
        app.dashboard.set_frame_area(frame_area);

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for input events
        if event::poll(Duration::from_millis(100))? {
            let action = match event::read()? {
                Event::Key(key) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }
                    match app.current_screen {
                        Screen::Splash => {
                            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                                DashboardAction::Quit
                            } else {
                                // Any other key skips the splash screen
                                app.current_screen = Screen::Dashboard;
                                DashboardAction::None
                            }
                        }
                        Screen::Dashboard => app.dashboard.handle_key(key),
                    }
                }
                Event::Mouse(mouse) if app.current_screen == Screen::Dashboard => {
                    app.dashboard.handle_mouse(mouse)
                }
                _ => DashboardAction::None,
            };

            if app.perform(action) {
                return Ok(());
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, dashboard: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, dashboard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (App, mpsc::Receiver<()>, broadcast::Receiver<()>) {
        let (_event_sender, event_receiver) = mpsc::channel(4);
        let (refresh_sender, refresh_receiver) = mpsc::channel(1);
        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
        let app = App::new(
            Environment::Production,
            event_receiver,
            refresh_sender,
            shutdown_sender,
            UIConfig::new(false),
        );
        (app, refresh_receiver, shutdown_receiver)
    }

    #[test]
    fn test_refresh_is_forwarded_once_queued() {
        let (mut app, mut refresh_receiver, _shutdown) = app();
        assert!(!app.perform(DashboardAction::Refresh));
        assert!(!app.perform(DashboardAction::Refresh));

        assert!(refresh_receiver.try_recv().is_ok());
        assert!(refresh_receiver.try_recv().is_err());
        assert_eq!(
            app.dashboard.activity_logs.back().map(|e| e.msg.as_str()),
            Some("A refresh is already queued")
        );
    }

    #[test]
    fn test_quit_broadcasts_shutdown() {
        let (mut app, _refresh, mut shutdown_receiver) = app();
        assert!(app.perform(DashboardAction::Quit));
        assert!(shutdown_receiver.try_recv().is_ok());
    }
}
