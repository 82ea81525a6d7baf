//! Screen definitions for the weekline TUI.

pub mod tasks;
pub mod timeline;

use crate::app::App;
use crate::ui::widgets::KeyHint;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Key hints shared by every screen's status bar.
pub(crate) fn common_hints() -> Vec<KeyHint> {
    vec![
        KeyHint::new("Tab", "switch"),
        KeyHint::new("?", "help"),
        KeyHint::new("q", "quit"),
    ]
}

/// Right-hand status text: task count and source file.
pub(crate) fn status_text(app: &App) -> String {
    let count = app.tasks.len();
    let noun = if count == 1 { "task" } else { "tasks" };
    match app.source.as_ref().and_then(|p| p.file_name()) {
        Some(name) => format!("{count} {noun} · {}", name.to_string_lossy()),
        None => format!("{count} {noun}"),
    }
}

/// Render the help overlay.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    use crate::ui::centered_fixed;
    use crate::ui::theme::Styles;
    use ratatui::widgets::{Block, Borders, Clear, Paragraph};

    let help_text = r"
  Week
    Left / h / p      Previous week
    Right / l / n     Next week
    t                 Jump to this week
    Home / g          Back to first week

  General
    Up/Down or j/k    Select task
    Tab / Shift+Tab   Next/prev tab
    1-2               Jump to tab
    q                 Quit
    ?                 Toggle this help
";

    let width = 50.min(area.width.saturating_sub(4));
    let height = 17.min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .style(Styles::default());

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Styles::default());

    paragraph.render(overlay_area, buf);
}
