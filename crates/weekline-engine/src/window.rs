//! Week window state and navigation.
//!
//! The only stored state is an optional anchor date. Everything else (task
//! range bounds, visible days, bar layouts, the today marker) is derived on
//! demand by [`WeekWindow::view`].
//!
//! Previous/Next are clamped to the week-aligned task range. Today is not:
//! jumping to the current week may leave the window outside the task range.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::calendar::{add_days, week_start, Clock, WEEK_DAYS};
use crate::layout::{min_width_pct, BarLayout};
use crate::task::{Task, TaskId};

/// Number of visible days.
pub const VISIBLE_DAYS: usize = 7;

/// Day index used for the today marker when today is not visible.
pub const FALLBACK_MARKER_INDEX: usize = 3;

/// Extremal task dates and the week-aligned navigation bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskRange {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub min_week_start: NaiveDate,
    pub max_week_start: NaiveDate,
}

impl TaskRange {
    /// Compute the range from a task list. Returns `None` for an empty list.
    pub fn from_tasks(tasks: &[Task]) -> Option<Self> {
        let min_date = tasks.iter().map(|t| t.start_date).min()?;
        let max_date = tasks.iter().map(|t| t.end_date).max()?;
        let min_week_start = week_start(min_date);
        // An inverted task can push max below min; the upper bound never sits
        // below the lower one.
        let max_week_start = week_start(max_date).max(min_week_start);
        Some(Self {
            min_date,
            max_date,
            min_week_start,
            max_week_start,
        })
    }

    /// Clamp a week start into the navigable bounds.
    pub fn clamp(&self, week: NaiveDate) -> NaiveDate {
        week.clamp(self.min_week_start, self.max_week_start)
    }
}

/// Position of the vertical today marker inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TodayMarker {
    pub day_index: usize,
    /// False when today is outside the window and the marker sits at the
    /// fallback index.
    pub in_window: bool,
    pub offset_pct: f64,
}

impl TodayMarker {
    #[allow(clippy::cast_precision_loss)]
    fn locate(days: &[NaiveDate], today: NaiveDate) -> Self {
        let found = days.iter().position(|d| *d == today);
        let day_index = found.unwrap_or(FALLBACK_MARKER_INDEX);
        Self {
            day_index,
            in_window: found.is_some(),
            offset_pct: day_index as f64 / days.len().max(1) as f64 * 100.0,
        }
    }
}

/// One task placed in the visible window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskBar {
    pub task_id: TaskId,
    pub name: String,
    /// Whether the task overlaps the visible days at all.
    pub visible: bool,
    pub layout: BarLayout,
}

/// Snapshot of everything needed to draw one week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekView {
    pub range: TaskRange,
    /// The seven visible days, Monday first.
    pub days: Vec<NaiveDate>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub today: TodayMarker,
    /// True when no task intersects the visible days.
    pub is_empty_week: bool,
    pub min_width_pct: f64,
    pub bars: Vec<TaskBar>,
}

impl WeekView {
    /// First visible day.
    pub fn first_day(&self) -> NaiveDate {
        self.days[0]
    }

    /// Last visible day.
    pub fn last_day(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }

    /// Human readable range such as `Jan 1 - Jan 7, 2024`.
    pub fn range_label(&self) -> String {
        let first = self.first_day();
        let last = self.last_day();
        if first.year() == last.year() {
            format!("{} - {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
        } else {
            format!("{} - {}", first.format("%b %-d, %Y"), last.format("%b %-d, %Y"))
        }
    }
}

/// Result of computing the timeline for a task list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineView {
    /// No tasks: show the placeholder instead of a grid.
    Empty,
    Week(WeekView),
}

impl TimelineView {
    pub fn week(&self) -> Option<&WeekView> {
        match self {
            Self::Empty => None,
            Self::Week(view) => Some(view),
        }
    }
}

/// User-controlled week window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekWindow {
    anchor: Option<NaiveDate>,
}

impl WeekWindow {
    /// Create a window that follows the earliest task.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a window anchored at `date`.
    pub fn anchored(date: NaiveDate) -> Self {
        Self { anchor: Some(date) }
    }

    /// The stored anchor, if any.
    pub fn anchor(&self) -> Option<NaiveDate> {
        self.anchor
    }

    /// Stored anchor, or the start of the task range.
    pub fn effective_anchor(&self, range: &TaskRange) -> NaiveDate {
        self.anchor.unwrap_or(range.min_week_start)
    }

    /// Monday of the displayed week.
    pub fn current_week_start(&self, range: &TaskRange) -> NaiveDate {
        week_start(self.effective_anchor(range))
    }

    /// The seven visible days.
    pub fn visible_days(&self, range: &TaskRange) -> Vec<NaiveDate> {
        let start = self.current_week_start(range);
        (0..WEEK_DAYS).map(|i| add_days(start, i)).collect()
    }

    pub fn can_go_previous(&self, range: &TaskRange) -> bool {
        self.current_week_start(range) > range.min_week_start
    }

    pub fn can_go_next(&self, range: &TaskRange) -> bool {
        self.current_week_start(range) < range.max_week_start
    }

    /// Step back one week, clamped to the task range.
    ///
    /// Returns `true` if the window moved.
    pub fn previous(&mut self, tasks: &[Task]) -> bool {
        self.shift(tasks, -WEEK_DAYS)
    }

    /// Step forward one week, clamped to the task range.
    ///
    /// Returns `true` if the window moved.
    pub fn next(&mut self, tasks: &[Task]) -> bool {
        self.shift(tasks, WEEK_DAYS)
    }

    /// Jump to the week containing today. Not clamped to the task range.
    pub fn today(&mut self, clock: &dyn Clock) {
        let target = week_start(clock.today());
        debug!(week = %target, "jump to current week");
        self.anchor = Some(target);
    }

    /// Forget the anchor and follow the earliest task again.
    pub fn reset(&mut self) {
        self.anchor = None;
    }

    fn shift(&mut self, tasks: &[Task], days: i64) -> bool {
        let Some(range) = TaskRange::from_tasks(tasks) else {
            return false;
        };
        let allowed = if days < 0 {
            self.can_go_previous(&range)
        } else {
            self.can_go_next(&range)
        };
        if !allowed {
            return false;
        }

        let current = self.current_week_start(&range);
        let target = range.clamp(add_days(self.effective_anchor(&range), days));
        self.anchor = Some(target);
        debug!(from = %current, to = %week_start(target), "shift week window");
        true
    }

    /// Compute the full view for `tasks` as of `today`.
    pub fn view(&self, tasks: &[Task], today: NaiveDate) -> TimelineView {
        let Some(range) = TaskRange::from_tasks(tasks) else {
            return TimelineView::Empty;
        };

        let days = self.visible_days(&range);
        let day0 = days[0];
        let window_end = add_days(day0, WEEK_DAYS);

        let bars: Vec<TaskBar> = tasks
            .iter()
            .map(|task| TaskBar {
                task_id: task.id.clone(),
                name: task.name.clone(),
                visible: intersects(task, day0, window_end),
                layout: BarLayout::compute(task, day0, days.len()),
            })
            .collect();
        let is_empty_week = !bars.iter().any(|b| b.visible);

        TimelineView::Week(WeekView {
            range,
            can_go_previous: self.can_go_previous(&range),
            can_go_next: self.can_go_next(&range),
            today: TodayMarker::locate(&days, today),
            is_empty_week,
            min_width_pct: min_width_pct(days.len()),
            bars,
            days,
        })
    }
}

/// Whether the task's day span `[start, end + 1)` overlaps `[day0, window_end)`.
fn intersects(task: &Task, day0: NaiveDate, window_end: NaiveDate) -> bool {
    task.start_date < window_end && add_days(task.end_date, 1) > day0
}
