//! Dashboard pagination strip component

use super::super::layout::pagination_hitboxes;
use super::super::state::{DashboardState, Focus};
use crate::pagination::PageControl;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn control_style(control: &PageControl, focused: bool) -> Style {
    let style = match control {
        PageControl::Page { active: true, .. } => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        PageControl::Prev { disabled: true } | PageControl::Next { disabled: true } => {
            Style::default().fg(Color::DarkGray)
        }
        PageControl::Ellipsis => Style::default().fg(Color::Gray),
        _ => Style::default().fg(Color::White),
    };
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Render the pagination strip; empty when everything fits on one page.
pub fn render_pagination(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(block, area);

    let Some(view) = &state.listing.pagination else {
        return;
    };

    for (index, (slot, control)) in pagination_hitboxes(area, view).into_iter().enumerate() {
        let focused = state.focus == Focus::Pagination(index);
        let label = Paragraph::new(control.label())
            .alignment(Alignment::Center)
            .style(control_style(&control, focused));
        f.render_widget(label, slot);
    }
}
