//! Application state and update logic for the weekline TUI.

use crate::event::Action;
use crate::ui::widgets::{TabChange, TabsState};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::debug;
use weekline_engine::{Clock, Config, SystemClock, Task, TimelineView, WeekWindow};

/// The screen shown for the selected tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Timeline,
    Tasks,
}

impl Screen {
    /// Tab titles, in tab order.
    pub const TITLES: [&'static str; 2] = ["Timeline", "Tasks"];

    fn from_tab(index: usize) -> Self {
        match index {
            1 => Self::Tasks,
            _ => Self::Timeline,
        }
    }
}

/// Main application state.
pub struct App {
    /// Tasks being displayed. Never mutated.
    pub tasks: Vec<Task>,
    /// Where the tasks came from, for the status bar.
    pub source: Option<PathBuf>,
    pub config: Config,
    /// The week being shown.
    pub window: WeekWindow,
    pub tabs: TabsState,
    /// Highlighted task row (index into `tasks`).
    pub selected_task: Option<usize>,
    pub show_help: bool,
    pub should_quit: bool,
    clock: Box<dyn Clock>,
}

impl App {
    /// Create an app using the system clock.
    pub fn new(tasks: Vec<Task>, config: Config) -> Self {
        Self::with_clock(tasks, config, Box::new(SystemClock))
    }

    /// Create an app with an explicit clock.
    pub fn with_clock(tasks: Vec<Task>, config: Config, clock: Box<dyn Clock>) -> Self {
        let selected_task = if tasks.is_empty() { None } else { Some(0) };
        Self {
            tasks,
            source: None,
            config,
            window: WeekWindow::new(),
            tabs: TabsState::new(Screen::TITLES),
            selected_task,
            show_help: false,
            should_quit: false,
            clock,
        }
    }

    /// Record where the tasks were loaded from.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Current screen, derived from the selected tab.
    pub fn screen(&self) -> Screen {
        Screen::from_tab(self.tabs.selected())
    }

    /// Today's date according to the app clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Compute the timeline view for the current window.
    pub fn view(&self) -> TimelineView {
        self.window.view(&self.tasks, self.today())
    }

    /// Apply a user action.
    pub fn handle_action(&mut self, action: Action) {
        // Help overlay swallows everything except its own toggle and quit.
        if self.show_help {
            match action {
                Action::Quit | Action::Help | Action::Back => self.show_help = false,
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::PreviousWeek => {
                self.window.previous(&self.tasks);
            }
            Action::NextWeek => {
                self.window.next(&self.tasks);
            }
            Action::Today => self.window.today(self.clock.as_ref()),
            Action::ResetWeek => self.window.reset(),
            Action::Up => self.select_prev(),
            Action::Down => self.select_next(),
            Action::NextTab => self.log_tab_change(TabsState::next),
            Action::PrevTab => self.log_tab_change(TabsState::previous),
            Action::Tab(index) => self.log_tab_change(|tabs| tabs.select(index)),
            Action::Back | Action::None => {}
        }
    }

    fn log_tab_change(
        &mut self,
        change: impl FnOnce(&mut TabsState) -> Option<TabChange>,
    ) {
        if let Some(change) = change(&mut self.tabs) {
            debug!(from = change.from, to = change.to, "tab changed");
        }
    }

    fn select_prev(&mut self) {
        if let Some(i) = self.selected_task {
            self.selected_task = Some(i.saturating_sub(1));
        }
    }

    fn select_next(&mut self) {
        if let Some(i) = self.selected_task {
            self.selected_task = Some((i + 1).min(self.tasks.len() - 1));
        }
    }

    /// Create an app with fixed sample data for tests.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        let tasks = vec![
            Task::new(1u64, "Design", date(1, 3), date(1, 5)),
            Task::new(2u64, "Build", date(1, 10), date(1, 19)),
            Task::new(3u64, "Launch", date(1, 29), date(1, 30)),
        ];
        Self::with_clock(
            tasks,
            Config::default(),
            Box::new(weekline_engine::FixedClock(date(1, 4))),
        )
    }
}
