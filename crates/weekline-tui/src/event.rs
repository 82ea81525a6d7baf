//! Event handling for the weekline TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;
use weekline_engine::MIN_TICK_RATE_MS;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A tick event for UI updates.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that runs in a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    ///
    /// Rates below [`MIN_TICK_RATE_MS`] are raised so the poll thread never
    /// spins.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // crossterm polling is blocking, keep it off the async runtime
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms.max(MIN_TICK_RATE_MS));
            loop {
                // Wait up to one tick for terminal input
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                Some(Event::Key(key))
                            }
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            // Key releases, mouse and focus events are ignored
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx_clone.send(e).is_err() {
                                break;
                            }
                        }
                    }
                } else {
                    // Quiet period, tick so the screen can redraw
                    if tx_clone.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, blocking until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    Back,
    PreviousWeek,
    NextWeek,
    Today,
    ResetWeek,
    Up,
    Down,
    NextTab,
    PrevTab,
    Tab(usize),
    None,
}

impl Action {
    /// Parse an action name as used by headless replay (`next`, `prev`,
    /// `today`, `tab2`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let action = match name.as_str() {
            "quit" => Self::Quit,
            "help" => Self::Help,
            "back" | "esc" => Self::Back,
            "prev" | "previous" => Self::PreviousWeek,
            "next" => Self::NextWeek,
            "today" => Self::Today,
            "reset" | "home" => Self::ResetWeek,
            "up" => Self::Up,
            "down" => Self::Down,
            "nexttab" => Self::NextTab,
            "prevtab" => Self::PrevTab,
            other => {
                let index: usize = other.strip_prefix("tab")?.parse().ok()?;
                Self::Tab(index.checked_sub(1)?)
            }
        };
        Some(action)
    }
}

/// Convert a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::Back,
        KeyCode::Left | KeyCode::Char('h' | 'p') => Action::PreviousWeek,
        KeyCode::Right | KeyCode::Char('l' | 'n') => Action::NextWeek,
        KeyCode::Char('t') => Action::Today,
        KeyCode::Home | KeyCode::Char('g') => Action::ResetWeek,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::BackTab => Action::PrevTab,
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Action::PrevTab
            } else {
                Action::NextTab
            }
        }
        // Number keys jump straight to a tab
        KeyCode::Char(c @ '1'..='9') => Action::Tab(c as usize - '1' as usize),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_to_action(key(KeyCode::Left)), Action::PreviousWeek);
        assert_eq!(key_to_action(key(KeyCode::Char('h'))), Action::PreviousWeek);
        assert_eq!(key_to_action(key(KeyCode::Right)), Action::NextWeek);
        assert_eq!(key_to_action(key(KeyCode::Char('n'))), Action::NextWeek);
        assert_eq!(key_to_action(key(KeyCode::Char('t'))), Action::Today);
        assert_eq!(key_to_action(key(KeyCode::Home)), Action::ResetWeek);
    }

    #[test]
    fn test_tab_keys() {
        assert_eq!(key_to_action(key(KeyCode::Tab)), Action::NextTab);
        assert_eq!(key_to_action(key(KeyCode::BackTab)), Action::PrevTab);
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            Action::PrevTab
        );
        assert_eq!(key_to_action(key(KeyCode::Char('2'))), Action::Tab(1));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c), Action::Quit);
        assert_eq!(key_to_action(key(KeyCode::Char('c'))), Action::None);
    }

    #[test]
    fn test_action_from_name() {
        assert_eq!(Action::from_name("next"), Some(Action::NextWeek));
        assert_eq!(Action::from_name(" Prev "), Some(Action::PreviousWeek));
        assert_eq!(Action::from_name("today"), Some(Action::Today));
        assert_eq!(Action::from_name("tab2"), Some(Action::Tab(1)));
        assert_eq!(Action::from_name("tab0"), None);
        assert_eq!(Action::from_name("sideways"), None);
    }
}
