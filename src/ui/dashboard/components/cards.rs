//! Dashboard card grid component
//!
//! Renders the list area: a grid of asset cards, a loading indicator or a message

use super::super::layout::{card_slots, list_inner};
use super::super::state::{DashboardState, ListArea};
use super::super::utils::direction_color;
use super::header::spinner;
use crate::format::PriceChange;
use crate::render::AssetCard;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the list area.
pub fn render_cards_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let shown = state.market.filtered_assets().len();
    let total = state.market.all_assets().len();
    let title = if shown < total {
        format!(
            "MARKET ({} of {} matching \"{}\")",
            shown,
            total,
            state.market.search_term()
        )
    } else {
        format!("MARKET ({} of {})", shown, total)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    match &state.listing.list {
        ListArea::Loading => {
            let text = format!("{} Loading market data...", spinner(state.tick));
            render_centered(f, area, block, text, Color::LightBlue);
        }
        ListArea::Message(message) => {
            render_centered(f, area, block, message.clone(), Color::LightYellow);
        }
        ListArea::Cards(cards) => {
            f.render_widget(block, area);
            for (index, slot) in card_slots(area, cards.len(), state.scroll) {
                render_card(f, slot, &cards[index]);
            }
        }
    }
}

fn render_centered(f: &mut Frame, area: Rect, block: Block, text: String, color: Color) {
    let inner = list_inner(area);
    let top = inner.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::from(""); top as usize];
    lines.push(Line::from(Span::styled(text, Style::default().fg(color))));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(paragraph, area);
}

fn change_span(change: &PriceChange) -> Span<'static> {
    Span::styled(
        format!("{} {}", change.direction.arrow(), change.text),
        Style::default()
            .fg(direction_color(change.direction))
            .add_modifier(Modifier::BOLD),
    )
}

fn render_card(f: &mut Frame, area: Rect, card: &AssetCard) {
    let label = Style::default().fg(Color::Gray);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                card.price.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            change_span(&card.change_24h),
            Span::styled(" 24h", label),
        ]),
        Line::from(vec![
            Span::styled("7d ", label),
            change_span(&card.change_7d),
            Span::styled("  MCap ", label),
            Span::raw(card.market_cap.clone()),
        ]),
        Line::from(vec![
            Span::styled("Vol ", label),
            Span::raw(card.volume_24h.clone()),
            Span::styled("  Supply ", label),
            Span::raw(card.circulating_supply.clone()),
        ]),
    ];

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", card.glyph),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ({})", card.name, card.symbol),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .title_top(Line::from(card.rank.clone()).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
