//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::pagination::PaginationView;
use crate::render::{AssetCard, AssetView, render_market};
use crate::state::MarketState;
use crate::ui::app::UIConfig;

use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::time::Instant;

/// Content of the list area.
#[derive(Debug, Clone, PartialEq)]
pub enum ListArea {
    Loading,
    Message(String),
    Cards(Vec<AssetCard>),
}

/// What the last render of the market state put on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    pub list: ListArea,
    pub pagination: Option<PaginationView>,
}

impl Default for ListingView {
    fn default() -> Self {
        Self {
            list: ListArea::Loading,
            pagination: None,
        }
    }
}

impl AssetView for ListingView {
    fn show_loading(&mut self) {
        self.list = ListArea::Loading;
    }

    fn show_message(&mut self, message: &str) {
        self.list = ListArea::Message(message.to_string());
    }

    fn show_cards(&mut self, cards: Vec<AssetCard>) {
        self.list = ListArea::Cards(cards);
    }

    fn show_pagination(&mut self, pagination: Option<PaginationView>) {
        self.pagination = pagination;
    }
}

/// Which part of the dashboard receives key presses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Cards,
    Search,
    /// Index into the current pagination controls.
    Pagination(usize),
}

/// Dashboard state: the market listing plus everything around it.
#[derive(Debug)]
pub struct DashboardState {
    /// The market data API in use.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Listing, filter and page.
    pub market: MarketState,
    /// Last render of `market`.
    pub listing: ListingView,
    /// Text typed into the search box, applied on submit.
    pub search_input: String,
    pub focus: Focus,
    /// First visible row of cards.
    pub scroll: usize,
    /// Timestamp of the last applied listing.
    pub last_updated: Option<String>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,
    /// Terminal area of the last draw, for mouse hit-testing.
    frame_area: Rect,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            with_background_color: ui_config.with_background_color,
            market: MarketState::default(),
            listing: ListingView::default(),
            search_input: String::new(),
            focus: Focus::Cards,
            scroll: 0,
            last_updated: None,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            frame_area: Rect::default(),
        }
    }

    pub fn frame_area(&self) -> Rect {
        self.frame_area
    }

    pub fn set_frame_area(&mut self, area: Rect) {
        self.frame_area = area;
    }

    /// Re-renders the market state into `listing`.
    ///
    /// Focus on a pagination control survives only if the same slot is still clickable.
    pub fn redraw_listing(&mut self) {
        render_market(&self.market, &mut self.listing);
        self.scroll = 0;
        if let Focus::Pagination(index) = self.focus {
            let still_clickable = self
                .listing
                .pagination
                .as_ref()
                .and_then(|view| view.controls.get(index))
                .is_some_and(|control| control.is_clickable());
            if !still_clickable {
                self.focus = Focus::Cards;
            }
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
