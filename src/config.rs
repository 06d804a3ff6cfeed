//! Built-in tunables.
//!
//! There is no configuration file and no command-line option: every value
//! here is a compile-time default, gathered in one place so the runtime and
//! the state constructor read the same numbers.

use std::time::Duration;

/// Animation frame interval (20 ticks per second).
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Maximum number of characters accepted by the search input.
pub const SEARCH_CHAR_LIMIT: usize = 50;

/// Visible width of the search input, in columns.
pub const SEARCH_DISPLAY_WIDTH: usize = 30;

/// Text shown in the search input while it is empty.
pub const SEARCH_PLACEHOLDER: &str = "Type to filter features...";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime tunables for one TUI session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Delay between a tick request and the tick it produces.
    pub tick_interval: Duration,
    /// Character limit for the search input.
    pub search_char_limit: usize,
    /// Display width of the search input.
    pub search_display_width: usize,
    /// Placeholder for the empty search input.
    pub search_placeholder: String,
    /// Fallback `tracing` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick_interval: TICK_INTERVAL,
            search_char_limit: SEARCH_CHAR_LIMIT,
            search_display_width: SEARCH_DISPLAY_WIDTH,
            search_placeholder: SEARCH_PLACEHOLDER.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
