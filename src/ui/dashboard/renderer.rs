//! Dashboard main renderer

use super::components::{cards, footer, header, logs, pagination, search};
use super::layout::DashboardLayout;
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let layout = DashboardLayout::new(f.area());

    header::render_header(f, layout.header, state);
    search::render_search_bar(f, &layout, state);
    cards::render_cards_panel(f, layout.list, state);
    pagination::render_pagination(f, layout.pagination, state);
    logs::render_logs_panel(f, layout.logs, state);
    footer::render_footer(f, layout.footer);
}
