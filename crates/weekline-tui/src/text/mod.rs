//! Text helpers for the weekline TUI.

mod width;

pub use width::{fit_to_width, truncate_to_width, visual_width};
