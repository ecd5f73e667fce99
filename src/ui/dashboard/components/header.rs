//! Dashboard header component
//!
//! Renders the title and fetch status

use super::super::state::DashboardState;
use super::super::utils::format_compact_timestamp;
use crate::environment::Environment;
use crate::state::ListStatus;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the current tick.
pub fn spinner(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// Render header with title, data source and fetch status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let title = Line::from(Span::styled(
        format!("CRYPTO TRACKER v{}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    let env_color = match state.environment {
        Environment::Production => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };

    let (status_text, status_color) = match state.market.list_status() {
        ListStatus::Loading => (
            format!("{} Fetching market data", spinner(state.tick)),
            Color::LightBlue,
        ),
        ListStatus::Failed => ("Last refresh failed".to_string(), Color::LightRed),
        ListStatus::Loaded => match &state.last_updated {
            Some(timestamp) => (
                format!("Updated {}", format_compact_timestamp(timestamp)),
                Color::Gray,
            ),
            None => ("Waiting for market data".to_string(), Color::Gray),
        },
    };

    let status = Line::from(vec![
        Span::styled(
            format!("Source: {}", state.environment),
            Style::default().fg(env_color),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{} assets", state.market.all_assets().len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        Span::styled(status_text, Style::default().fg(status_color)),
    ]);

    let header = Paragraph::new(vec![title, status])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(header, area);
}
