//! Dashboard search bar component
//!
//! Renders the search box and the search and refresh buttons

use super::super::layout::DashboardLayout;
use super::super::state::{DashboardState, Focus};

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const PLACEHOLDER: &str = "Search by name or symbol ( / )";

/// Render the search row.
pub fn render_search_bar(f: &mut Frame, layout: &DashboardLayout, state: &DashboardState) {
    let focused = state.focus == Focus::Search;
    let enabled = state.market.input_enabled();

    let border_color = if focused { Color::LightYellow } else { Color::Cyan };
    let input = if state.search_input.is_empty() && !focused {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(state.search_input.as_str()).style(Style::default().fg(Color::White))
    };
    let input = input.block(
        Block::default()
            .title("SEARCH")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, layout.search_input);

    if focused {
        let cursor_x = layout.search_input.x + 1 + state.search_input.chars().count() as u16;
        let max_x = layout.search_input.right().saturating_sub(2);
        f.set_cursor_position(Position::new(cursor_x.min(max_x), layout.search_input.y + 1));
    }

    render_button(f, layout.search_button, "Search", enabled);
    render_button(f, layout.refresh_button, "Refresh", enabled);
}

fn render_button(f: &mut Frame, area: Rect, label: &str, enabled: bool) {
    let color = if enabled { Color::LightCyan } else { Color::DarkGray };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(button, area);
}
