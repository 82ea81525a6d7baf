//! Projection of percentage offsets onto terminal columns.

/// A horizontal run of cells, relative to the grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpan {
    pub x: u16,
    pub width: u16,
}

/// Usable grid width for `available` columns: a whole number of cells per day.
pub fn grid_width(available: u16, day_count: usize) -> u16 {
    let days = u16::try_from(day_count.max(1)).unwrap_or(u16::MAX);
    (available / days) * days
}

/// Map a bar's percentage placement onto a grid `width` cells wide.
///
/// Bars are at least one cell wide and never run past the right edge, so a
/// bar pinned at 100% still shows in the last column.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn project(left_pct: f64, width_pct: f64, width: u16) -> GridSpan {
    if width == 0 {
        return GridSpan { x: 0, width: 0 };
    }
    let w = f64::from(width);
    let x = ((left_pct / 100.0 * w).round().max(0.0) as u16).min(width - 1);
    let span = ((width_pct / 100.0 * w).round().max(1.0) as u16).min(width - x);
    GridSpan { x, width: span }
}

/// Left edge of day `index` in a grid of `day_count` days.
#[allow(clippy::cast_possible_truncation)]
pub fn day_column(index: usize, day_count: usize, width: u16) -> u16 {
    let day_count = day_count.max(1);
    ((index.min(day_count) * usize::from(width)) / day_count) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_width_rounds_down_to_whole_days() {
        assert_eq!(grid_width(75, 7), 70);
        assert_eq!(grid_width(6, 7), 0);
        assert_eq!(grid_width(14, 7), 14);
    }

    #[test]
    fn test_project_full_day_columns() {
        // 70 cells, 10 per day: days 1..=3 start at column 10 and span 30 cells
        let span = project(100.0 / 7.0, 300.0 / 7.0, 70);
        assert_eq!(span, GridSpan { x: 10, width: 30 });
    }

    #[test]
    fn test_project_right_edge_stays_visible() {
        let span = project(100.0, 100.0 / 7.0, 70);
        assert_eq!(span, GridSpan { x: 69, width: 1 });
    }

    #[test]
    fn test_project_whole_window() {
        let span = project(0.0, 100.0, 70);
        assert_eq!(span, GridSpan { x: 0, width: 70 });
    }

    #[test]
    fn test_project_never_zero_width() {
        let span = project(50.0, 0.1, 14);
        assert_eq!(span.width, 1);
        assert_eq!(project(0.0, 50.0, 0), GridSpan { x: 0, width: 0 });
    }

    #[test]
    fn test_day_column() {
        assert_eq!(day_column(0, 7, 70), 0);
        assert_eq!(day_column(3, 7, 70), 30);
        assert_eq!(day_column(7, 7, 70), 70);
    }
}
