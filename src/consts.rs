pub mod cli_consts {
    //! Tracker Configuration Constants
    //!
    //! This module contains all configuration constants for the tracker,
    //! organized by functional area for clarity.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of event buffer size for worker tasks
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of pending manual refresh requests
    pub const REFRESH_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // LISTING CONFIGURATION
    // =============================================================================

    /// Number of asset cards shown on one page.
    pub const PAGE_SIZE: usize = 10;

    /// Market listing request parameters
    pub mod listing {
        /// Quote currency for every price in the listing
        pub const VS_CURRENCY: &str = "usd";

        /// Ordering of the listing (largest market cap first)
        pub const ORDER: &str = "market_cap_desc";

        /// Number of assets requested per fetch
        pub const PER_PAGE: u32 = 100;

        /// Listing page requested (always the first one)
        pub const PAGE: u32 = 1;

        /// Percentage-change windows requested alongside each asset
        pub const PRICE_CHANGE_WINDOWS: &str = "24h,7d";
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Periodic refresh and HTTP client configuration
    pub mod refresh {
        use std::time::Duration;

        /// Interval between full refreshes (milliseconds)
        pub const REFRESH_INTERVAL_MS: u64 = 300_000; // 5 minutes

        /// Connect timeout for the market data client (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout for the market data client (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        /// Helper function to get the refresh interval
        pub const fn refresh_interval() -> Duration {
            Duration::from_millis(REFRESH_INTERVAL_MS)
        }
    }

    // =============================================================================
    // USER-FACING MESSAGES
    // =============================================================================

    /// Shown in the list area when a fetch fails.
    pub const FETCH_FAILED_MESSAGE: &str =
        "Failed to load cryptocurrency data. Please try again later.";

    /// Shown in the list area when the current page has nothing to show.
    pub const NO_RESULTS_MESSAGE: &str = "No cryptocurrencies found matching your search.";
}
