//! Reusable widgets for the weekline TUI.

pub mod status_bar;
pub mod tabs;

pub use status_bar::{KeyHint, StatusBar};
pub use tabs::{TabChange, Tabs, TabsState};
