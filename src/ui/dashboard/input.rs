//! Keyboard and mouse handling for the dashboard
//!
//! Nothing but quitting responds until the first fetch has resolved.

use super::layout::{DashboardLayout, max_scroll, pagination_hitboxes};
use super::state::{DashboardState, Focus, ListArea};
use crate::error_classifier::LogLevel;
use crate::events::{Event as WorkerEvent, EventType};
use crate::pagination::PageControl;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// What the app loop should do after an input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Refresh,
    Quit,
}

impl DashboardState {
    pub fn handle_key(&mut self, key: KeyEvent) -> DashboardAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return DashboardAction::Quit;
        }

        if self.focus == Focus::Search {
            return self.handle_search_key(key);
        }

        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            return DashboardAction::Quit;
        }
        if !self.market.input_enabled() {
            return DashboardAction::None;
        }

        match key.code {
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('r') => return self.request_refresh(),
            KeyCode::Left | KeyCode::Char('h') => {
                if self.market.prev_page() {
                    self.redraw_listing();
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.market.next_page() {
                    self.redraw_listing();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Tab => self.focus_next(),
            KeyCode::Enter => {
                if let Focus::Pagination(index) = self.focus {
                    let control = self
                        .listing
                        .pagination
                        .as_ref()
                        .and_then(|view| view.controls.get(index).copied());
                    if let Some(control) = control {
                        self.activate_control(control);
                    }
                }
            }
            _ => {}
        }
        DashboardAction::None
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> DashboardAction {
        match key.code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc => self.focus = Focus::Cards,
            KeyCode::Tab => self.focus_next(),
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) => self.search_input.push(c),
            _ => {}
        }
        DashboardAction::None
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> DashboardAction {
        if !self.market.input_enabled() {
            return DashboardAction::None;
        }

        let layout = DashboardLayout::new(self.frame_area());
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.search_button.contains(position) {
                    self.submit_search();
                } else if layout.refresh_button.contains(position) {
                    return self.request_refresh();
                } else if layout.search_input.contains(position) {
                    self.focus = Focus::Search;
                } else if let Some(control) = self.control_at(&layout, position) {
                    self.activate_control(control);
                }
            }
            MouseEventKind::ScrollDown if layout.list.contains(position) => self.scroll_by(1),
            MouseEventKind::ScrollUp if layout.list.contains(position) => self.scroll_by(-1),
            _ => {}
        }
        DashboardAction::None
    }

    /// The pagination control under `position` in the strip currently on screen.
    fn control_at(&self, layout: &DashboardLayout, position: Position) -> Option<PageControl> {
        let view = self.listing.pagination.as_ref()?;
        pagination_hitboxes(layout.pagination, view)
            .into_iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, control)| control)
    }

    fn activate_control(&mut self, control: PageControl) {
        if !control.is_clickable() {
            return;
        }
        if self.market.activate(control) {
            self.redraw_listing();
            self.log_input(
                format!("Page {}", self.market.current_page()),
                LogLevel::Debug,
            );
        }
    }

    fn submit_search(&mut self) {
        let term = self.search_input.clone();
        self.market.apply_search(&term);
        self.focus = Focus::Cards;
        self.redraw_listing();
        let matched = self.market.filtered_assets().len();
        let msg = if term.is_empty() {
            format!("Showing all {} assets", matched)
        } else {
            format!("Search \"{}\": {} matches", term, matched)
        };
        self.log_input(msg, LogLevel::Info);
    }

    fn request_refresh(&mut self) -> DashboardAction {
        self.log_input("Manual refresh requested".to_string(), LogLevel::Info);
        DashboardAction::Refresh
    }

    fn log_input(&mut self, msg: String, level: LogLevel) {
        self.add_to_activity_log(WorkerEvent::dashboard_with_level(
            msg,
            EventType::Input,
            level,
        ));
    }

    /// Cycles focus: search box, then each clickable pagination control, then back.
    fn focus_next(&mut self) {
        let clickable: Vec<usize> = self
            .listing
            .pagination
            .as_ref()
            .map(|view| {
                view.controls
                    .iter()
                    .enumerate()
                    .filter(|(_, control)| control.is_clickable())
                    .map(|(index, _)| index)
                    .collect()
            })
            .unwrap_or_default();

        self.focus = match self.focus {
            Focus::Cards => Focus::Search,
            Focus::Search => clickable
                .first()
                .map_or(Focus::Cards, |&index| Focus::Pagination(index)),
            Focus::Pagination(current) => clickable
                .iter()
                .find(|&&index| index > current)
                .map_or(Focus::Cards, |&index| Focus::Pagination(index)),
        };
    }

    fn scroll_by(&mut self, delta: isize) {
        let ListArea::Cards(cards) = &self.listing.list else {
            return;
        };
        let limit = max_scroll(DashboardLayout::new(self.frame_area()).list, cards.len());
        self.scroll = self.scroll.saturating_add_signed(delta).min(limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetRecord;
    use crate::environment::Environment;
    use crate::events::{Event, FetchTrigger};
    use crate::ui::UIConfig;
    use ratatui::layout::Rect;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn loaded_dashboard(n: usize) -> DashboardState {
        let mut state =
            DashboardState::new(Environment::Production, Instant::now(), UIConfig::new(false));
        state.set_frame_area(Rect::new(0, 0, 120, 40));
        let mut assets: Vec<AssetRecord> = (1..=n)
            .map(|i| AssetRecord::new(format!("coin-{}", i), format!("Coin {}", i), "cn"))
            .collect();
        assets.push(AssetRecord::new("bitcoin", "Bitcoin", "btc"));
        state.add_event(Event::fetch_started(1, FetchTrigger::Startup));
        state.add_event(Event::fetch_loaded(1, assets));
        state.update();
        state
    }

    fn type_text(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_input_ignored_until_first_fetch() {
        let mut state =
            DashboardState::new(Environment::Production, Instant::now(), UIConfig::new(false));
        assert_eq!(state.handle_key(key(KeyCode::Char('r'))), DashboardAction::None);
        assert_eq!(state.handle_key(key(KeyCode::Char('/'))), DashboardAction::None);
        assert_eq!(state.focus, Focus::Cards);
        assert_eq!(state.handle_key(key(KeyCode::Char('q'))), DashboardAction::Quit);
    }

    #[test]
    fn test_search_typing_and_submit() {
        let mut state = loaded_dashboard(29);
        state.handle_key(key(KeyCode::Right));
        assert_eq!(state.market.current_page(), 2);

        state.handle_key(key(KeyCode::Char('/')));
        assert_eq!(state.focus, Focus::Search);
        // Keys that would quit or refresh are typed while searching.
        type_text(&mut state, "bitq");
        state.handle_key(key(KeyCode::Backspace));
        assert_eq!(state.search_input, "bit");

        state.handle_key(key(KeyCode::Enter));
        assert_eq!(state.focus, Focus::Cards);
        assert_eq!(state.market.current_page(), 1);
        match &state.listing.list {
            ListArea::Cards(cards) => assert_eq!(cards[0].name, "Bitcoin"),
            other => panic!("unexpected list {:?}", other),
        }
        assert_eq!(state.listing.pagination, None);
        assert_eq!(
            state.activity_logs.back().map(|e| e.msg.as_str()),
            Some("Search \"bit\": 1 matches")
        );
    }

    #[test]
    fn test_refresh_key_and_button() {
        let mut state = loaded_dashboard(5);
        assert_eq!(state.handle_key(key(KeyCode::Char('r'))), DashboardAction::Refresh);

        let layout = DashboardLayout::new(state.frame_area());
        let button = layout.refresh_button;
        assert_eq!(
            state.handle_mouse(click(button.x + 2, button.y + 1)),
            DashboardAction::Refresh
        );
    }

    #[test]
    fn test_click_on_page_number() {
        let mut state = loaded_dashboard(29);
        let layout = DashboardLayout::new(state.frame_area());
        let view = state.listing.pagination.clone().unwrap();
        let (area, control) = pagination_hitboxes(layout.pagination, &view)[3];
        assert_eq!(control, PageControl::Page { number: 3, active: false });

        state.handle_mouse(click(area.x, area.y));
        assert_eq!(state.market.current_page(), 3);
        match &state.listing.list {
            ListArea::Cards(cards) => assert_eq!(cards.len(), 10),
            other => panic!("unexpected list {:?}", other),
        }

        // Disabled Next does nothing.
        let view = state.listing.pagination.clone().unwrap();
        let (next_area, next) = *pagination_hitboxes(layout.pagination, &view).last().unwrap();
        assert_eq!(next, PageControl::Next { disabled: true });
        state.handle_mouse(click(next_area.x, next_area.y));
        assert_eq!(state.market.current_page(), 3);
    }

    #[test]
    fn test_tab_cycles_focus_and_enter_activates() {
        let mut state = loaded_dashboard(29);
        state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.focus, Focus::Search);
        state.handle_key(key(KeyCode::Tab));
        // Prev is disabled on page 1, so the first stop is page 1.
        assert_eq!(state.focus, Focus::Pagination(1));
        state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.focus, Focus::Pagination(2));

        state.handle_key(key(KeyCode::Enter));
        assert_eq!(state.market.current_page(), 2);
        assert_eq!(state.focus, Focus::Pagination(2));
    }
}
