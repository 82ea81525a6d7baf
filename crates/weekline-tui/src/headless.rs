//! Headless rendering for the weekline TUI.
//!
//! Renders the app into an in-memory buffer instead of a terminal, so a
//! sequence of actions can be replayed and the resulting screen captured as
//! text. Used by `weekline render` and by tests.

use crate::app::App;
use crate::event::Action;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Convert a buffer to plain text, one line per row, trailing spaces trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the app once into a `width` x `height` buffer.
pub fn render_to_string(app: &App, width: u16, height: u16) -> std::io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| {
        let area = frame.area();
        crate::draw(app, area, frame.buffer_mut());
    })?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

/// Apply `actions` in order, then render.
pub fn replay(
    app: &mut App,
    actions: &[Action],
    width: u16,
    height: u16,
) -> std::io::Result<String> {
    for action in actions {
        app.handle_action(*action);
        tracing::debug!(?action, "replayed action");
    }
    render_to_string(app, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;

    #[test]
    fn test_buffer_to_string_trims_rows() {
        let area = ratatui::layout::Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Mon", ratatui::style::Style::default());
        buffer.set_string(0, 2, "Sun", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Mon\n\nSun");
    }

    #[test]
    fn test_render_to_string_default_screen() {
        let app = create_test_app();
        let text = render_to_string(&app, DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        assert!(text.contains("Jan 1 - Jan 7, 2024"));
        assert_eq!(text.lines().count(), usize::from(DEFAULT_HEIGHT));
    }

    #[test]
    fn test_replay_next_then_tasks_tab() {
        let mut app = create_test_app();
        let text = replay(
            &mut app,
            &[Action::NextWeek, Action::NextWeek],
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
        )
        .unwrap();
        assert!(text.contains("Jan 15 - Jan 21, 2024"));

        let text = replay(&mut app, &[Action::Tab(1)], DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        assert!(text.contains("2024-01-29"));
    }

    #[test]
    fn test_replay_help_overlay() {
        let mut app = create_test_app();
        let text = replay(&mut app, &[Action::Help], DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        assert!(text.contains("Jump to this week"));
    }
}
