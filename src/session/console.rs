//! Plain-text rendering of the market listing

use crate::format::{Direction, PriceChange};
use crate::pagination::{PageControl, PaginationView};
use crate::render::{AssetCard, AssetView};
use std::io::Write;

const COLOR_UP: &str = "\x1b[32m";
const COLOR_DOWN: &str = "\x1b[31m";
const COLOR_DIM: &str = "\x1b[2m";
const COLOR_RESET: &str = "\x1b[0m";

/// Writes each render to an output stream as it happens.
pub struct ConsoleView<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, COLOR_RESET)
        } else {
            text.to_string()
        }
    }

    fn change(&self, change: &PriceChange, window: &str) -> String {
        let color = match change.direction {
            Direction::Up => COLOR_UP,
            Direction::Down => COLOR_DOWN,
        };
        self.paint(
            color,
            &format!("{} {} ({})", change.direction.arrow(), change.text, window),
        )
    }

    fn write_card(&mut self, card: &AssetCard) -> std::io::Result<()> {
        let headline = format!(
            "{:<5} {} ({})  {}  {}  {}",
            card.rank,
            card.name,
            card.symbol,
            card.price,
            self.change(&card.change_24h, "24h"),
            self.change(&card.change_7d, "7d"),
        );
        let details = self.paint(
            COLOR_DIM,
            &format!(
                "Market Cap {} | Volume {} | Supply {}",
                card.market_cap, card.volume_24h, card.circulating_supply
            ),
        );
        writeln!(self.out, "{}", headline)?;
        writeln!(self.out, "      {}", details)
    }
}

/// One-line rendering of the pagination strip. Disabled arrows are left out.
pub fn pagination_line(view: &PaginationView) -> String {
    let controls: Vec<String> = view
        .controls
        .iter()
        .filter_map(|control| match control {
            PageControl::Prev { disabled: true } | PageControl::Next { disabled: true } => None,
            PageControl::Page { active: true, .. } => Some(format!("[{}]", control.label())),
            _ => Some(control.label()),
        })
        .collect();
    format!(
        "Page {} of {}: {}",
        view.current_page,
        view.total_pages,
        controls.join(" ")
    )
}

impl<W: Write> AssetView for ConsoleView<W> {
    fn show_loading(&mut self) {
        let _ = writeln!(self.out, "Loading market data...");
    }

    fn show_message(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    fn show_cards(&mut self, cards: Vec<AssetCard>) {
        for card in &cards {
            if self.write_card(card).is_err() {
                return;
            }
        }
    }

    fn show_pagination(&mut self, pagination: Option<PaginationView>) {
        if let Some(view) = pagination {
            let _ = writeln!(self.out, "{}", pagination_line(&view));
        }
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetRecord;
    use crate::pagination::pagination_view;

    fn bitcoin() -> AssetRecord {
        AssetRecord {
            current_price: Some(43250.5),
            price_change_percentage_24h: Some(-1.5),
            price_change_percentage_7d: Some(4.25),
            market_cap: Some(846_200_000_000.0),
            total_volume: Some(21_300_000_000.0),
            circulating_supply: Some(19_570_000.0),
            market_cap_rank: Some(1),
            ..AssetRecord::new("bitcoin", "Bitcoin", "btc")
        }
    }

    fn output(view: ConsoleView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_card_lines() {
        let mut view = ConsoleView::new(Vec::new(), false);
        view.show_cards(vec![AssetCard::from(&bitcoin())]);
        let text = output(view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("#1    Bitcoin (BTC)  $43,250.50"));
        assert!(lines[0].contains("▼ 1.50% (24h)"));
        assert!(lines[0].contains("▲ 4.25% (7d)"));
        assert_eq!(
            lines[1].trim(),
            "Market Cap $846.20B | Volume $21.30B | Supply $19.57M BTC"
        );
    }

    #[test]
    fn test_pagination_line_marks_active_page() {
        let view = pagination_view(23, 1, 10).unwrap();
        assert_eq!(pagination_line(&view), "Page 1 of 3: [1] 2 3 Next");

        let view = pagination_view(200, 10, 10).unwrap();
        assert_eq!(
            pagination_line(&view),
            "Page 10 of 20: Prev 1 ... 8 9 [10] 11 12 ... 20 Next"
        );
    }

    #[test]
    fn test_messages_and_colors() {
        let mut view = ConsoleView::new(Vec::new(), true);
        view.show_loading();
        view.show_message("No cryptocurrencies found matching your search.");
        view.show_pagination(None);
        let text = output(view);
        assert_eq!(
            text,
            "Loading market data...\nNo cryptocurrencies found matching your search.\n"
        );
    }
}
