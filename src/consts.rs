pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! Timing, wire and presentation constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size for completed submissions waiting on the UI loop.
    pub const COMPLETION_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // RENDER TIMING
    // =============================================================================

    /// Render timing configuration
    pub mod timing {
        use std::time::Duration;

        /// Delay before a price or signal stat commits its new value (milliseconds)
        pub const STAT_TRANSITION_MS: u64 = 150;

        /// How long an error toast stays visible (milliseconds)
        pub const TOAST_VISIBLE_MS: u64 = 5000;

        /// UI loop poll interval (milliseconds)
        pub const UI_TICK_MS: u64 = 100;

        pub const fn stat_transition() -> Duration {
            Duration::from_millis(STAT_TRANSITION_MS)
        }

        pub const fn toast_visible() -> Duration {
            Duration::from_millis(TOAST_VISIBLE_MS)
        }

        pub const fn ui_tick() -> Duration {
            Duration::from_millis(UI_TICK_MS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Analysis endpoint, relative to the API base URL.
    pub const ANALYZE_ENDPOINT: &str = "api/analyze";

    /// Connect and request timeout for the analysis call (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;

    /// Toast text when a failure carries no usable message.
    pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch data. Please try again.";

    // =============================================================================
    // RESPONSE DEFAULTS
    // =============================================================================

    /// Values applied when the analysis payload omits a field
    pub mod defaults {
        pub const RSI: f64 = 50.0;
        pub const CONFIDENCE: f64 = 75.0;
        pub const VOLATILITY: f64 = 15.0;
        pub const RISK_LEVEL: &str = "Medium";
        pub const TREND: &str = "Neutral";
        /// Support defaults to 5% under the current price
        pub const SUPPORT_FACTOR: f64 = 0.95;
        /// Resistance defaults to 5% over the current price
        pub const RESISTANCE_FACTOR: f64 = 1.05;
    }

    // =============================================================================
    // CHART
    // =============================================================================

    /// Candlestick chart presentation
    pub mod chart {
        /// Identifier of the chart container the plot is drawn into
        pub const CONTAINER_ID: &str = "chart";
        pub const INCREASING_COLOR: &str = "#10B981";
        pub const DECREASING_COLOR: &str = "#EF4444";
        pub const HOVER_MODE: &str = "x unified";
    }
}
