//! Timeline screen: week navigation plus the task grid.

use super::{common_hints, status_text, Screen};
use crate::app::App;
use crate::timeline::TimelineWidget;
use crate::ui::main_layout;
use crate::ui::theme::Styles;
use crate::ui::widgets::{KeyHint, StatusBar, Tabs};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};
use weekline_engine::TimelineView;

/// Label of the previous-week button.
pub const PREV_BUTTON: &str = "[< Prev]";
/// Label of the jump-to-today button.
pub const TODAY_BUTTON: &str = "[Today]";
/// Label of the next-week button.
pub const NEXT_BUTTON: &str = "[Next >]";

/// The week timeline screen.
pub struct TimelineScreen;

impl TimelineScreen {
    fn render_nav(view: &TimelineView, area: Rect, buf: &mut Buffer) {
        let Some(week) = view.week() else {
            return;
        };
        let button = |label: &'static str, enabled: bool| {
            Span::styled(
                label,
                if enabled {
                    Styles::button()
                } else {
                    Styles::button_disabled()
                },
            )
        };
        let line = Line::from(vec![
            Span::raw(" "),
            button(PREV_BUTTON, week.can_go_previous),
            Span::raw(" "),
            button(TODAY_BUTTON, true),
            Span::raw(" "),
            button(NEXT_BUTTON, week.can_go_next),
            Span::raw("   "),
            Span::styled(week.range_label(), Styles::title()),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

impl Screen for TimelineScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (tabs_area, body, status_area) = main_layout(area);
        Tabs::from_state(&app.tabs).render(tabs_area, buf);

        let view = app.view();
        let grid_area = if view.week().is_some() {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(3)])
                .split(body);
            Self::render_nav(&view, chunks[0], buf);
            chunks[1]
        } else {
            body
        };

        TimelineWidget::new(&view)
            .label_width(app.config.label_width)
            .show_today(app.config.show_today_marker)
            .selected(app.selected_task)
            .focused(!app.show_help)
            .render(grid_area, buf);

        let right = status_text(app);
        let mut hints = vec![
            KeyHint::new("←", "prev"),
            KeyHint::new("→", "next"),
            KeyHint::new("t", "today"),
        ];
        hints.extend(common_hints());
        StatusBar::new("WEEK")
            .hints(hints)
            .right(&right)
            .render(status_area, buf);
    }
}
