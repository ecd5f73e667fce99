//! Dashboard geometry
//!
//! Shared by the renderer and mouse hit-testing so both agree on where
//! everything is.

use crate::pagination::{PageControl, PaginationView};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Height of one card including its border.
pub const CARD_HEIGHT: u16 = 5;
/// Narrowest a card column may get.
pub const CARD_MIN_WIDTH: u16 = 36;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub search_input: Rect,
    pub search_button: Rect,
    pub refresh_button: Rect,
    pub list: Rect,
    pub pagination: Rect,
    pub logs: Rect,
    pub footer: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Length(8),
                Constraint::Length(2),
            ])
            .margin(1)
            .split(area);

        let search_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(10),
                Constraint::Length(11),
            ])
            .split(main_chunks[1]);

        Self {
            header: main_chunks[0],
            search_input: search_chunks[0],
            search_button: search_chunks[1],
            refresh_button: search_chunks[2],
            list: main_chunks[2],
            pagination: main_chunks[3],
            logs: main_chunks[4],
            footer: main_chunks[5],
        }
    }
}

/// Area inside the list border.
pub fn list_inner(list: Rect) -> Rect {
    list.inner(Margin::new(1, 1))
}

/// Number of card columns that fit in `width`.
pub fn card_columns(width: u16) -> usize {
    (width / CARD_MIN_WIDTH).max(1) as usize
}

/// Number of card rows that fit in `height`.
pub fn visible_card_rows(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

/// Largest useful scroll offset, in rows.
pub fn max_scroll(list: Rect, card_count: usize) -> usize {
    let inner = list_inner(list);
    let rows = card_count.div_ceil(card_columns(inner.width));
    rows.saturating_sub(visible_card_rows(inner.height))
}

/// Positions of the visible cards, as (card index, area) pairs.
pub fn card_slots(list: Rect, card_count: usize, scroll: usize) -> Vec<(usize, Rect)> {
    let inner = list_inner(list);
    let columns = card_columns(inner.width);
    let rows = visible_card_rows(inner.height);
    let width = inner.width / columns as u16;

    let mut slots = Vec::new();
    for row in 0..rows {
        let y = inner.y + row as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > inner.bottom() {
            break;
        }
        for column in 0..columns {
            let index = (scroll + row) * columns + column;
            if index >= card_count {
                return slots;
            }
            let x = inner.x + column as u16 * width;
            slots.push((index, Rect::new(x, y, width, CARD_HEIGHT)));
        }
    }
    slots
}

/// Screen cells of each pagination control, centered on the strip's inner row.
///
/// Controls that would overflow the strip are left out.
pub fn pagination_hitboxes(strip: Rect, view: &PaginationView) -> Vec<(Rect, PageControl)> {
    let inner = strip.inner(Margin::new(1, 1));
    if inner.height == 0 {
        return Vec::new();
    }

    let widths: Vec<u16> = view
        .controls
        .iter()
        .map(|control| control.label().chars().count() as u16 + 2)
        .collect();
    let total: u16 = widths.iter().sum::<u16>() + widths.len().saturating_sub(1) as u16;

    let mut x = inner.x + inner.width.saturating_sub(total) / 2;
    let mut boxes = Vec::with_capacity(view.controls.len());
    for (control, width) in view.controls.iter().zip(widths) {
        if x + width > inner.right() {
            break;
        }
        boxes.push((Rect::new(x, inner.y, width, 1), *control));
        x += width + 1;
    }
    boxes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::pagination_view;

    #[test]
    fn test_layout_fills_terminal() {
        let layout = DashboardLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header, Rect::new(1, 1, 118, 3));
        assert_eq!(layout.search_button.width, 10);
        assert_eq!(layout.refresh_button.width, 11);
        assert_eq!(layout.list.y, 7);
        assert_eq!(layout.list.height, 40 - 2 - 3 - 3 - 3 - 8 - 2);
        assert_eq!(layout.footer.bottom(), 39);
    }

    #[test]
    fn test_card_grid() {
        let list = Rect::new(0, 0, 120, 17);
        // inner 118x15: three columns, three rows
        assert_eq!(card_columns(118), 3);
        let slots = card_slots(list, 10, 0);
        assert_eq!(slots.len(), 9);
        assert_eq!(slots[4], (4, Rect::new(40, 6, 39, 5)));
        assert_eq!(max_scroll(list, 10), 1);

        let slots = card_slots(list, 10, 1);
        assert_eq!(slots.first().map(|s| s.0), Some(3));
        assert_eq!(slots.len(), 7);
    }

    #[test]
    fn test_pagination_hitboxes_are_centered() {
        let view = pagination_view(23, 1, 10).unwrap();
        let boxes = pagination_hitboxes(Rect::new(0, 10, 42, 3), &view);
        // Prev(6) 1(3) 2(3) 3(3) Next(6) plus four gaps = 25 cells in a 40-cell row
        assert_eq!(boxes.len(), 5);
        assert_eq!(boxes[0].0, Rect::new(8, 11, 6, 1));
        assert_eq!(boxes[1].0.x, 15);
        assert_eq!(boxes[4].1, PageControl::Next { disabled: false });
    }
}
