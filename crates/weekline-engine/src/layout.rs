//! Horizontal bar layout for tasks inside a visible window.
//!
//! Offsets are expressed as percentages of the window width. Bars are clamped
//! to the window and always keep at least one day of width, so a task that
//! lies entirely outside the window collapses onto the nearest edge instead of
//! disappearing.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::days_between;
use crate::task::Task;

/// Horizontal placement of one task bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarLayout {
    /// Whole days from the first visible day to the task start.
    pub start_offset: i64,
    /// Whole days from the first visible day to the task end.
    pub end_offset: i64,
    pub left_pct: f64,
    pub right_pct: f64,
    pub width_pct: f64,
}

/// Width of a single day, as a percentage of a window of `day_count` days.
#[allow(clippy::cast_precision_loss)]
pub fn min_width_pct(day_count: usize) -> f64 {
    100.0 / day_count.max(1) as f64
}

impl BarLayout {
    /// Lay out `task` in a window of `day_count` days starting at `day0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(task: &Task, day0: NaiveDate, day_count: usize) -> Self {
        let n = day_count.max(1) as f64;
        let start_offset = days_between(day0, task.start_date);
        let end_offset = days_between(day0, task.end_date);

        let left_pct = (start_offset as f64 / n * 100.0).clamp(0.0, 100.0);
        let right_pct = (end_offset as f64 / n * 100.0).clamp(0.0, 100.0);
        let min_width = min_width_pct(day_count);
        let width_pct = (right_pct - left_pct + min_width).clamp(min_width, 100.0);

        Self {
            start_offset,
            end_offset,
            left_pct,
            right_pct,
            width_pct,
        }
    }

    /// True when the bar starts left of the window.
    pub fn starts_before(&self) -> bool {
        self.start_offset < 0
    }

    /// True when the bar ends right of the window of `day_count` days.
    pub fn ends_after(&self, day_count: usize) -> bool {
        usize::try_from(self.end_offset).is_ok_and(|end| end >= day_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(start: NaiveDate, end: NaiveDate) -> Task {
        Task::new("t", "Task", start, end)
    }

    #[test]
    fn test_task_inside_window() {
        let day0 = date(2024, 1, 1);
        let bar = BarLayout::compute(&task(date(2024, 1, 2), date(2024, 1, 4)), day0, 7);

        assert_eq!(bar.start_offset, 1);
        assert_eq!(bar.end_offset, 3);
        assert!((bar.left_pct - 100.0 / 7.0).abs() < EPS);
        assert!((bar.right_pct - 300.0 / 7.0).abs() < EPS);
        // three days wide
        assert!((bar.width_pct - 300.0 / 7.0).abs() < EPS);
        assert!(bar.left_pct <= bar.right_pct);
        assert!(bar.width_pct >= min_width_pct(7));
    }

    #[test]
    fn test_single_day_task_has_one_day_width() {
        let day0 = date(2024, 1, 1);
        let bar = BarLayout::compute(&task(day0, day0), day0, 7);

        assert!(bar.left_pct.abs() < EPS);
        assert!((bar.width_pct - min_width_pct(7)).abs() < EPS);
    }

    #[test]
    fn test_task_entirely_before_window_collapses_to_left_edge() {
        let day0 = date(2024, 1, 8);
        let bar = BarLayout::compute(&task(date(2024, 1, 1), date(2024, 1, 3)), day0, 7);

        assert!(bar.starts_before());
        assert!(bar.left_pct.abs() < EPS);
        assert!(bar.right_pct.abs() < EPS);
        assert!((bar.width_pct - min_width_pct(7)).abs() < EPS);
    }

    #[test]
    fn test_task_entirely_after_window_collapses_to_right_edge() {
        let day0 = date(2024, 1, 1);
        let bar = BarLayout::compute(&task(date(2024, 1, 20), date(2024, 1, 22)), day0, 7);

        assert!(bar.ends_after(7));
        assert!((bar.left_pct - 100.0).abs() < EPS);
        assert!((bar.width_pct - min_width_pct(7)).abs() < EPS);
    }

    #[test]
    fn test_task_spanning_whole_window_is_capped() {
        let day0 = date(2024, 1, 8);
        let bar = BarLayout::compute(&task(date(2024, 1, 1), date(2024, 1, 31)), day0, 7);

        assert!(bar.left_pct.abs() < EPS);
        assert!((bar.right_pct - 100.0).abs() < EPS);
        assert!((bar.width_pct - 100.0).abs() < EPS);
    }

    #[test]
    fn test_inverted_task_keeps_minimum_width() {
        let day0 = date(2024, 1, 1);
        let bar = BarLayout::compute(&task(date(2024, 1, 5), date(2024, 1, 2)), day0, 7);

        assert!(bar.right_pct < bar.left_pct);
        assert!((bar.width_pct - min_width_pct(7)).abs() < EPS);
    }

    #[test]
    fn test_min_width_for_degenerate_day_count() {
        assert!((min_width_pct(0) - 100.0).abs() < EPS);
        assert!((min_width_pct(4) - 25.0).abs() < EPS);
    }
}
