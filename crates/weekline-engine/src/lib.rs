//! weekline-engine: week windowing and bar layout for project timelines
//!
//! This crate provides the UI-independent core of weekline, including:
//! - Task model and JSON task file loading
//! - Monday-aligned calendar helpers and a clock abstraction
//! - Week window navigation clamped to the task range
//! - Percentage bar layout and the today marker
//! - Configuration

pub mod calendar;
pub mod config;
pub mod layout;
pub mod task;
pub mod window;

// Re-export commonly used types
pub use calendar::{week_start, Clock, FixedClock, SystemClock, WEEK_DAYS};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH, MIN_TICK_RATE_MS};
pub use layout::{min_width_pct, BarLayout};
pub use task::{load_tasks, parse_tasks, Task, TaskFileError, TaskId};
pub use window::{
    TaskBar, TaskRange, TimelineView, TodayMarker, WeekView, WeekWindow, FALLBACK_MARKER_INDEX,
    VISIBLE_DAYS,
};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
