//! weekline-tui: Terminal UI for week-windowed project timelines
//!
//! This crate provides the TUI layer for weekline, including:
//! - Timeline screen with week navigation, task bars and today marker
//! - Task list screen
//! - Shared widgets (tabs, status bar)
//! - Headless rendering for testing and automation

mod app;
mod event;
pub mod headless;
mod screens;
mod text;
#[cfg(test)]
pub mod test_utils;
pub mod timeline;
mod ui;

use screens::Screen as ScreenTrait;

pub use app::{App, Screen};
pub use event::{key_to_action, Action, Event, EventHandler};
pub use ui::widgets::{TabChange, Tabs, TabsState};
pub use weekline_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, layout::Rect, Terminal};
use std::io::{self, stdout};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Draw the current screen, plus the help overlay when visible.
pub fn draw(app: &App, area: Rect, buf: &mut Buffer) {
    match app.screen() {
        Screen::Timeline => screens::timeline::TimelineScreen.render(app, area, buf),
        Screen::Tasks => screens::tasks::TasksScreen.render(app, area, buf),
    }

    if app.show_help {
        screens::render_help_overlay(area, buf);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on exit.
pub async fn run_tui(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(app.config.tick_rate_ms);
    tracing::info!(tasks = app.tasks.len(), "starting tui");

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            draw(app, area, frame.buffer_mut());
        })?;

        match events.next().await {
            Some(Event::Key(key)) => app.handle_action(event::key_to_action(key)),
            // Ticks redraw so the today marker follows the date at midnight.
            Some(Event::Tick | Event::Resize(_, _)) => {}
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
