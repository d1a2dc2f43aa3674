//! Dashboard timing configuration.

use std::time::Duration;

/// Timing knobs for the interaction shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Quiet period after the last search keystroke before the term is
    /// applied to the visible list.
    pub search_debounce: Duration,

    /// Fixed artificial delay before the first load (including any one-time
    /// seeding) completes and the loading placeholder clears.
    pub first_load_delay: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(300),
            first_load_delay: Duration::from_millis(500),
        }
    }
}
