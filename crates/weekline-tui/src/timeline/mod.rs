//! Timeline module for displaying one week of tasks.
//!
//! This module provides:
//! - [`TimelineWidget`] - Widget drawing the day header, task bars, today
//!   marker and empty-state messages for a [`weekline_engine::TimelineView`]
//! - Grid helpers mapping percentage offsets onto terminal columns

mod grid;
mod widget;

pub use grid::{day_column, grid_width, project, GridSpan};
pub use widget::{TimelineWidget, EMPTY_WEEK_MESSAGE, NO_TASKS_MESSAGE};
