//! Market listing state
//!
//! Owned by a single controller (the dashboard or the headless session) and
//! mutated only between events. Filtering and paging delegate to the pure
//! functions in [`crate::filter`] and [`crate::pagination`].

use crate::asset::AssetRecord;
use crate::consts::cli_consts::PAGE_SIZE;
use crate::events::FetchOutcome;
use crate::filter::filter_assets;
use crate::pagination::{self, PageControl, PaginationView};

/// What the list area currently shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ListStatus {
    /// A fetch is in flight.
    Loading,
    /// Cards (or the no-results message) for the current page.
    Loaded,
    /// The latest fetch failed.
    Failed,
}

/// Whether a fetch outcome was applied or dropped as stale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Applied {
    Applied,
    Stale,
}

#[derive(Debug, Clone)]
pub struct MarketState {
    /// Full listing from the last successful fetch.
    all_assets: Vec<AssetRecord>,
    /// Order-preserving subset of `all_assets` currently paged through.
    filtered_assets: Vec<AssetRecord>,
    /// 1-indexed page into `filtered_assets`.
    current_page: usize,
    page_size: usize,
    /// Last term applied through a search.
    search_term: String,
    list_status: ListStatus,
    /// False until the first fetch resolves.
    input_enabled: bool,
    /// Request id of the most recently started fetch.
    latest_request: Option<u64>,
}

impl Default for MarketState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl MarketState {
    pub fn new(page_size: usize) -> Self {
        Self {
            all_assets: Vec::new(),
            filtered_assets: Vec::new(),
            current_page: 1,
            page_size,
            search_term: String::new(),
            list_status: ListStatus::Loaded,
            input_enabled: false,
            latest_request: None,
        }
    }

    pub fn all_assets(&self) -> &[AssetRecord] {
        &self.all_assets
    }

    pub fn filtered_assets(&self) -> &[AssetRecord] {
        &self.filtered_assets
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn list_status(&self) -> ListStatus {
        self.list_status
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered_assets.len(), self.page_size)
    }

    /// The slice of `filtered_assets` on the current page.
    pub fn visible_page(&self) -> &[AssetRecord] {
        pagination::page(&self.filtered_assets, self.current_page, self.page_size)
    }

    pub fn pagination(&self) -> Option<PaginationView> {
        pagination::pagination_view(
            self.filtered_assets.len(),
            self.current_page,
            self.page_size,
        )
    }

    /// Marks fetch `request_id` as in flight. Outcomes of older requests are dropped from now on.
    pub fn begin_fetch(&mut self, request_id: u64) {
        if self.latest_request.is_none_or(|latest| request_id > latest) {
            self.latest_request = Some(request_id);
        }
        self.list_status = ListStatus::Loading;
    }

    fn is_stale(&self, request_id: u64) -> bool {
        self.latest_request
            .is_some_and(|latest| request_id < latest)
    }

    /// Replaces the listing with a fresh snapshot.
    ///
    /// The visible set resets to the unfiltered listing; the last search term
    /// is kept for display but not reapplied, and the page is left as is.
    pub fn apply_assets(&mut self, request_id: u64, assets: Vec<AssetRecord>) -> Applied {
        if self.is_stale(request_id) {
            return Applied::Stale;
        }
        self.latest_request = Some(request_id);
        self.filtered_assets = assets.clone();
        self.all_assets = assets;
        self.list_status = ListStatus::Loaded;
        self.input_enabled = true;
        Applied::Applied
    }

    /// Records a failed fetch. The previous listing is kept.
    pub fn apply_failure(&mut self, request_id: u64) -> Applied {
        if self.is_stale(request_id) {
            return Applied::Stale;
        }
        self.latest_request = Some(request_id);
        self.list_status = ListStatus::Failed;
        self.input_enabled = true;
        Applied::Applied
    }

    /// Applies one step of fetch progress reported by the fetch worker.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> Applied {
        match outcome {
            FetchOutcome::Started { request_id } => {
                self.begin_fetch(request_id);
                Applied::Applied
            }
            FetchOutcome::Loaded { request_id, assets } => self.apply_assets(request_id, assets),
            FetchOutcome::Failed { request_id } => self.apply_failure(request_id),
        }
    }

    /// Filters the listing by `term` and goes back to page 1.
    pub fn apply_search(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.filtered_assets = filter_assets(&self.all_assets, term);
        self.current_page = 1;
        self.list_status = ListStatus::Loaded;
    }

    /// Jumps to a literal page number.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
        self.list_status = ListStatus::Loaded;
    }

    /// Returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.go_to_page(self.current_page - 1);
            return true;
        }
        false
    }

    /// Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.go_to_page(self.current_page + 1);
            return true;
        }
        false
    }

    /// Applies a click on a pagination control. Returns whether a re-render is due.
    pub fn activate(&mut self, control: PageControl) -> bool {
        match control {
            PageControl::Prev { .. } => self.prev_page(),
            PageControl::Next { .. } => self.next_page(),
            PageControl::Page { number, .. } => {
                self.go_to_page(number);
                true
            }
            PageControl::Ellipsis => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::{FETCH_FAILED_MESSAGE, NO_RESULTS_MESSAGE};
    use crate::render::render_market;
    use crate::render::tests::RecordingView;

    fn numbered(n: usize) -> Vec<AssetRecord> {
        (1..=n)
            .map(|i| AssetRecord::new(format!("coin-{}", i), format!("Coin {}", i), "cn"))
            .collect()
    }

    fn loaded(assets: Vec<AssetRecord>) -> MarketState {
        let mut state = MarketState::default();
        state.begin_fetch(1);
        state.apply_assets(1, assets);
        state
    }

    #[test]
    fn test_initial_state_is_empty_and_locked() {
        let state = MarketState::default();
        assert!(state.all_assets().is_empty());
        assert_eq!(state.current_page(), 1);
        assert!(!state.input_enabled());
    }

    #[test]
    // 23 records: 10 on page 1, then 3 on page 3 with Next disabled.
    fn test_paging_through_twenty_three_records() {
        let mut state = loaded(numbered(23));
        let mut view = RecordingView::default();

        render_market(&state, &mut view);
        assert_eq!(view.cards.len(), 10);
        let strip = view.pagination.clone().unwrap();
        assert_eq!(
            strip.controls,
            vec![
                PageControl::Prev { disabled: true },
                PageControl::Page { number: 1, active: true },
                PageControl::Page { number: 2, active: false },
                PageControl::Page { number: 3, active: false },
                PageControl::Next { disabled: false },
            ]
        );

        assert!(state.activate(strip.controls[3]));
        render_market(&state, &mut view);
        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.cards[0].name, "Coin 21");
        let strip = view.pagination.unwrap();
        assert_eq!(
            strip.controls.last(),
            Some(&PageControl::Next { disabled: true })
        );

        // Next at the last page is a no-op.
        assert!(!state.next_page());
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    // Searching "bit" keeps only Bitcoin and resets to page 1.
    fn test_search_filters_and_resets_page() {
        let mut assets = numbered(15);
        assets.push(AssetRecord::new("bitcoin", "Bitcoin", "btc"));
        assets.push(AssetRecord::new("ethereum", "Ethereum", "eth"));
        let mut state = loaded(assets);
        assert!(state.next_page());
        assert_eq!(state.current_page(), 2);

        state.apply_search("bit");
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.search_term(), "bit");
        let ids: Vec<&str> = state.visible_page().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["bitcoin"]);
        assert_eq!(state.pagination(), None);
    }

    #[test]
    // A failed refresh shows the failure message and keeps the old listing.
    fn test_failed_refresh_keeps_previous_listing() {
        let mut state = loaded(numbered(5));
        state.begin_fetch(2);
        assert_eq!(state.apply_failure(2), Applied::Applied);

        assert_eq!(state.list_status(), ListStatus::Failed);
        assert_eq!(state.all_assets(), numbered(5).as_slice());

        let mut view = RecordingView::default();
        render_market(&state, &mut view);
        assert_eq!(view.message.as_deref(), Some(FETCH_FAILED_MESSAGE));
    }

    #[test]
    // A refresh drops the active filter but leaves the page number alone.
    fn test_refresh_resets_to_unfiltered_listing() {
        let mut state = loaded(numbered(30));
        state.apply_search("Coin 2");
        assert_eq!(state.filtered_assets().len(), 11);
        state.go_to_page(2);

        state.begin_fetch(2);
        state.apply_assets(2, numbered(30));
        assert_eq!(state.filtered_assets().len(), 30);
        assert_eq!(state.search_term(), "Coin 2");
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    // A page past the end after a shrinking refresh renders the no-results message.
    fn test_page_past_end_shows_no_results() {
        let mut state = loaded(numbered(30));
        state.go_to_page(3);
        state.begin_fetch(2);
        state.apply_assets(2, numbered(5));

        let mut view = RecordingView::default();
        render_market(&state, &mut view);
        assert_eq!(view.message.as_deref(), Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    // An older response arriving after a newer request started is dropped.
    fn test_stale_outcome_is_dropped() {
        let mut state = loaded(numbered(3));
        state.begin_fetch(2);
        state.begin_fetch(3);

        assert_eq!(state.apply_assets(2, numbered(50)), Applied::Stale);
        assert_eq!(state.apply_failure(2), Applied::Stale);
        assert_eq!(state.all_assets().len(), 3);
        assert_eq!(state.list_status(), ListStatus::Loading);

        assert_eq!(state.apply_assets(3, numbered(7)), Applied::Applied);
        assert_eq!(state.all_assets().len(), 7);
    }

    #[test]
    fn test_apply_outcome_routes_fetch_progress() {
        let mut state = MarketState::default();
        state.apply_outcome(FetchOutcome::Started { request_id: 1 });
        assert_eq!(state.list_status(), ListStatus::Loading);

        let applied = state.apply_outcome(FetchOutcome::Loaded {
            request_id: 1,
            assets: numbered(4),
        });
        assert_eq!(applied, Applied::Applied);
        assert_eq!(state.all_assets().len(), 4);

        state.apply_outcome(FetchOutcome::Started { request_id: 2 });
        state.apply_outcome(FetchOutcome::Failed { request_id: 2 });
        assert_eq!(state.list_status(), ListStatus::Failed);
    }

    #[test]
    // The first outcome unlocks input, success or failure.
    fn test_first_outcome_enables_input() {
        let mut state = MarketState::default();
        state.begin_fetch(1);
        assert!(!state.input_enabled());
        state.apply_failure(1);
        assert!(state.input_enabled());
    }

    #[test]
    // Paging after a failure re-renders the old listing, like any other click.
    fn test_paging_after_failure_shows_cards_again() {
        let mut state = loaded(numbered(25));
        state.begin_fetch(2);
        state.apply_failure(2);

        assert!(state.activate(PageControl::Page {
            number: 2,
            active: false
        }));
        assert_eq!(state.list_status(), ListStatus::Loaded);
        assert_eq!(state.visible_page().len(), 10);
        assert!(!state.activate(PageControl::Ellipsis));
    }
}
