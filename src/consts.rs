pub mod cli_consts {
    //! Client Configuration Constants
    //!
    //! Configuration constants for the academy client, organized by
    //! functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum buffer size for the message channel between background
    /// loaders and the UI loop.
    pub const MESSAGE_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // LESSON CONTENT
    // =============================================================================

    /// Soft upper bound on slide length, in characters. A single
    /// heading-delimited section longer than this still becomes one slide.
    pub const SLIDE_SOFT_LIMIT: usize = 800;

    // =============================================================================
    // REWARDS
    // =============================================================================

    /// Points required for one unit of credit (20 points = 1 currency unit).
    pub const POINTS_PER_CREDIT: u64 = 20;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP timeouts for API requests.
    pub mod http {
        use std::time::Duration;

        /// Connection timeout for API requests (seconds).
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Overall request timeout for API requests (seconds).
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the connect timeout duration
        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        /// Helper function to get the request timeout duration
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
