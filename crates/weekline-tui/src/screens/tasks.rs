//! Task list screen.

use super::{common_hints, status_text, Screen};
use crate::app::App;
use crate::timeline::NO_TASKS_MESSAGE;
use crate::ui::main_layout;
use crate::ui::theme::Styles;
use crate::ui::widgets::{KeyHint, StatusBar, Tabs};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

/// Table of every task with its dates and duration.
pub struct TasksScreen;

impl Screen for TasksScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (tabs_area, body, status_area) = main_layout(area);
        Tabs::from_state(&app.tabs).render(tabs_area, buf);

        let block = Block::default()
            .title(" Tasks ")
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Styles::default());

        if app.tasks.is_empty() {
            Paragraph::new(NO_TASKS_MESSAGE)
                .style(Styles::dim())
                .block(block)
                .render(body, buf);
        } else {
            let rows = app.tasks.iter().map(|task| {
                let days = if task.is_inverted() {
                    "!".to_string()
                } else {
                    task.duration_days().to_string()
                };
                let style = if task.is_inverted() {
                    Styles::warning()
                } else {
                    Styles::default()
                };
                Row::new(vec![
                    task.id.to_string(),
                    task.name.clone(),
                    task.start_date.to_string(),
                    task.end_date.to_string(),
                    days,
                ])
                .style(style)
            });

            let header = Row::new(vec!["ID", "Name", "Start", "End", "Days"]).style(Styles::title());
            let table = Table::new(
                rows,
                [
                    Constraint::Length(8),
                    Constraint::Min(12),
                    Constraint::Length(10),
                    Constraint::Length(10),
                    Constraint::Length(4),
                ],
            )
            .header(header)
            .row_highlight_style(Styles::highlight())
            .block(block);

            // Scrolls so the selected row stays visible.
            let mut state = TableState::default().with_selected(app.selected_task);
            StatefulWidget::render(table, body, buf, &mut state);
        }

        let right = status_text(app);
        let mut hints = vec![KeyHint::new("j/k", "select")];
        hints.extend(common_hints());
        StatusBar::new("TASKS")
            .hints(hints)
            .right(&right)
            .render(status_area, buf);
    }
}
