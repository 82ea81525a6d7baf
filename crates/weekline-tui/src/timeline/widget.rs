//! Timeline widget for rendering one week of task bars.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use weekline_engine::{TaskBar, TimelineView, WeekView};

use super::grid::{day_column, grid_width, project};
use crate::text::{fit_to_width, truncate_to_width, visual_width};
use crate::ui::theme::{Styles, Symbols};

/// Placeholder shown instead of the grid when there are no tasks.
pub const NO_TASKS_MESSAGE: &str = "No tasks scheduled";

/// Overlay shown on top of the grid when the visible week has no tasks.
pub const EMPTY_WEEK_MESSAGE: &str = "No tasks in this window";

/// Week timeline widget.
pub struct TimelineWidget<'a> {
    view: &'a TimelineView,
    label_width: u16,
    show_today: bool,
    selected: Option<usize>,
    focused: bool,
}

impl<'a> TimelineWidget<'a> {
    /// Create a new timeline widget.
    pub fn new(view: &'a TimelineView) -> Self {
        Self {
            view,
            label_width: 18,
            show_today: true,
            selected: None,
            focused: false,
        }
    }

    /// Set the width of the task name column.
    #[must_use]
    pub fn label_width(mut self, width: u16) -> Self {
        self.label_width = width;
        self
    }

    /// Set whether to draw the today marker.
    #[must_use]
    pub fn show_today(mut self, show: bool) -> Self {
        self.show_today = show;
        self
    }

    /// Highlight the task row at `index`.
    #[must_use]
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_placeholder(area: Rect, buf: &mut Buffer, message: &str) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        #[allow(clippy::cast_possible_truncation)]
        let width = (visual_width(message) as u16).min(area.width);
        let rect = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + area.height / 2,
            width,
            1,
        );
        Paragraph::new(Line::from(Span::styled(message, Styles::dim()))).render(rect, buf);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_week(&self, week: &WeekView, inner: Rect, buf: &mut Buffer) {
        let day_count = week.days.len();
        let label_width = self.label_width.min(inner.width / 3);
        let grid_x = inner.x + label_width + 1;
        let grid_w = grid_width(inner.width.saturating_sub(label_width + 1), day_count);
        if grid_w == 0 || inner.height == 0 {
            Self::render_placeholder(inner, buf, "Window too narrow");
            return;
        }
        let cell_w = grid_w / day_count as u16;

        // Weekend shading
        for (i, day) in week.days.iter().enumerate() {
            if is_weekend(*day) {
                let x = grid_x + day_column(i, day_count, grid_w);
                buf.set_style(Rect::new(x, inner.y, cell_w, inner.height), Styles::weekend());
            }
        }

        // Header row: label caption + day names
        buf.set_string(
            inner.x,
            inner.y,
            fit_to_width("Task", usize::from(label_width)),
            Styles::dim(),
        );
        for (i, day) in week.days.iter().enumerate() {
            let x = grid_x + day_column(i, day_count, grid_w);
            let label = truncate_to_width(&day.format("%a %d").to_string(), usize::from(cell_w));
            let style = if self.show_today && week.today.in_window && week.today.day_index == i {
                Styles::today()
            } else {
                Styles::title()
            };
            buf.set_string(x, inner.y, label, style);
        }

        let rows_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);
        let rows = usize::from(rows_area.height);
        let offset = self
            .selected
            .map_or(0, |s| s.saturating_sub(rows.saturating_sub(1)));

        for (row, (index, bar)) in week.bars.iter().enumerate().skip(offset).take(rows).enumerate() {
            let y = rows_area.y + row as u16;
            let is_selected = self.selected == Some(index);

            let label_style = if is_selected {
                Styles::highlight()
            } else {
                Styles::default()
            };
            buf.set_string(
                inner.x,
                y,
                fit_to_width(&bar.name, usize::from(label_width)),
                label_style,
            );
            render_bar(bar, grid_x, y, grid_w, buf);
        }

        if self.show_today {
            let x = grid_x + day_column(week.today.day_index, day_count, grid_w);
            let style = if week.today.in_window {
                Styles::today()
            } else {
                Styles::dim()
            };
            for y in rows_area.y..rows_area.y + rows_area.height {
                let cell = &mut buf[(x, y)];
                // Bars win over the marker.
                if cell.symbol() == " " {
                    cell.set_symbol(Symbols::TODAY).set_style(style);
                }
            }
        }

        if week.is_empty_week {
            let grid_area = Rect::new(grid_x, rows_area.y, grid_w, rows_area.height);
            let width = (visual_width(EMPTY_WEEK_MESSAGE) as u16 + 2).min(grid_area.width);
            let rect = Rect::new(
                grid_area.x + (grid_area.width - width) / 2,
                grid_area.y + grid_area.height / 2,
                width,
                1,
            );
            if grid_area.height > 0 {
                Clear.render(rect, buf);
                Paragraph::new(format!(" {EMPTY_WEEK_MESSAGE} "))
                    .style(Styles::warning())
                    .render(rect, buf);
            }
        }
    }
}

fn render_bar(bar: &TaskBar, grid_x: u16, y: u16, grid_w: u16, buf: &mut Buffer) {
    let span = project(bar.layout.left_pct, bar.layout.width_pct, grid_w);
    let (symbol, style) = if bar.visible {
        (Symbols::BAR, Styles::bar())
    } else {
        (Symbols::BAR_CLIPPED, Styles::bar_clipped())
    };
    for x in grid_x + span.x..grid_x + span.x + span.width {
        buf[(x, y)].set_symbol(symbol).set_style(style);
    }
}

fn is_weekend(day: chrono::NaiveDate) -> bool {
    use chrono::{Datelike, Weekday};
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Styles::border_active()
        } else {
            Styles::border()
        };
        let block = Block::default()
            .title(" Timeline ")
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Styles::default());

        let inner = block.inner(area);
        block.render(area, buf);

        match self.view {
            TimelineView::Empty => Self::render_placeholder(inner, buf, NO_TASKS_MESSAGE),
            TimelineView::Week(week) => self.render_week(week, inner, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use chrono::NaiveDate;
    use weekline_engine::{Task, WeekWindow};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn render(view: &TimelineView, width: u16, height: u16) -> (Buffer, String) {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        TimelineWidget::new(view).label_width(10).render(area, &mut buf);
        let text = buffer_to_string(&buf);
        (buf, text)
    }

    #[test]
    fn test_empty_view_shows_placeholder_without_grid() {
        let (_, text) = render(&TimelineView::Empty, 60, 8);
        assert!(text.contains(NO_TASKS_MESSAGE));
        assert!(!text.contains("Mon"));
    }

    #[test]
    fn test_week_header_and_bar() {
        let tasks = vec![Task::new(1u64, "A", date(2024, 1, 1), date(2024, 1, 3))];
        let view = WeekWindow::new().view(&tasks, date(2024, 1, 2));
        // inner width 78: label 10 + gap 1 leaves 67 -> 63 grid cells, 9 per day
        let (buf, text) = render(&view, 80, 6);

        assert!(text.contains("Mon 01"));
        assert!(text.contains("Sun 07"));
        assert!(!text.contains(EMPTY_WEEK_MESSAGE));

        // Bar starts at the first grid column (x = 1 border + 10 label + 1 gap).
        assert_eq!(buf[(12, 2)].symbol(), Symbols::BAR);
        // Three days wide: 27 cells.
        assert_eq!(buf[(12 + 26, 2)].symbol(), Symbols::BAR);
        assert_ne!(buf[(12 + 27, 2)].symbol(), Symbols::BAR);
    }

    #[test]
    fn test_empty_week_overlay_keeps_grid() {
        let tasks = vec![
            Task::new(1u64, "A", date(2024, 1, 1), date(2024, 1, 2)),
            Task::new(2u64, "B", date(2024, 1, 22), date(2024, 1, 23)),
        ];
        let view = WeekWindow::anchored(date(2024, 1, 8)).view(&tasks, date(2024, 1, 1));
        let (_, text) = render(&view, 80, 8);

        assert!(text.contains(EMPTY_WEEK_MESSAGE));
        assert!(text.contains("Mon 08"));
    }

    #[test]
    fn test_out_of_window_bar_uses_clipped_symbol() {
        let tasks = vec![
            Task::new(1u64, "A", date(2024, 1, 1), date(2024, 1, 2)),
            Task::new(2u64, "B", date(2024, 1, 8), date(2024, 1, 9)),
        ];
        let view = WeekWindow::anchored(date(2024, 1, 8)).view(&tasks, date(2024, 1, 1));
        let (buf, _) = render(&view, 80, 6);

        // Task A collapsed onto the left edge, task B in place.
        assert_eq!(buf[(12, 2)].symbol(), Symbols::BAR_CLIPPED);
        assert_eq!(buf[(12, 3)].symbol(), Symbols::BAR);
    }

    #[test]
    fn test_today_marker_drawn_in_empty_cells() {
        let tasks = vec![Task::new(1u64, "A", date(2024, 1, 1), date(2024, 1, 1))];
        // Today is Thursday, day index 3 -> column 27 of the grid.
        let view = WeekWindow::new().view(&tasks, date(2024, 1, 4));
        let (buf, _) = render(&view, 80, 6);

        assert_eq!(buf[(12 + 27, 2)].symbol(), Symbols::TODAY);
        assert_eq!(buf[(12 + 27, 2)].style().fg, Styles::today().fg);
    }

    #[test]
    fn test_today_marker_hidden_when_disabled() {
        let tasks = vec![Task::new(1u64, "A", date(2024, 1, 1), date(2024, 1, 1))];
        let view = WeekWindow::new().view(&tasks, date(2024, 1, 4));
        let area = Rect::new(0, 0, 80, 6);
        let mut buf = Buffer::empty(area);
        TimelineWidget::new(&view)
            .label_width(10)
            .show_today(false)
            .render(area, &mut buf);

        assert_ne!(buf[(12 + 27, 2)].symbol(), Symbols::TODAY);
    }

    #[test]
    fn test_long_names_are_truncated_to_label_column() {
        let tasks = vec![Task::new(
            1u64,
            "Integration testing",
            date(2024, 1, 1),
            date(2024, 1, 1),
        )];
        let view = WeekWindow::new().view(&tasks, date(2024, 1, 1));
        let (_, text) = render(&view, 80, 6);
        assert!(text.contains("Integrati…"));
    }

    #[test]
    fn test_narrow_area_does_not_panic() {
        let tasks = vec![Task::new(1u64, "A", date(2024, 1, 1), date(2024, 1, 1))];
        let view = WeekWindow::new().view(&tasks, date(2024, 1, 1));
        let (_, text) = render(&view, 8, 4);
        assert!(!text.contains("Mon"));
    }
}
