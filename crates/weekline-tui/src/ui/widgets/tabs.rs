//! Tab bar widget.
//!
//! [`TabsState`] owns the titles and the selected index and reports a
//! [`TabChange`] whenever the selection actually moves. [`Tabs`] renders the
//! state, styling the active tab.

use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// Notification that the selected tab changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange {
    pub from: usize,
    pub to: usize,
}

/// Titles plus the selected index.
#[derive(Debug, Clone)]
pub struct TabsState {
    titles: Vec<String>,
    selected: usize,
}

impl TabsState {
    /// Create a tab state with the first tab selected.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select a tab by index. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> Option<TabChange> {
        if index >= self.titles.len() || index == self.selected {
            return None;
        }
        let change = TabChange {
            from: self.selected,
            to: index,
        };
        self.selected = index;
        Some(change)
    }

    /// Select the next tab, wrapping around.
    pub fn next(&mut self) -> Option<TabChange> {
        if self.titles.is_empty() {
            return None;
        }
        self.select((self.selected + 1) % self.titles.len())
    }

    /// Select the previous tab, wrapping around.
    pub fn previous(&mut self) -> Option<TabChange> {
        if self.titles.is_empty() {
            return None;
        }
        let len = self.titles.len();
        self.select((self.selected + len - 1) % len)
    }
}

/// A horizontal tab bar widget.
#[derive(Debug, Clone)]
pub struct Tabs<'a> {
    titles: Vec<&'a str>,
    selected: usize,
}

impl<'a> Tabs<'a> {
    /// Create a new tabs widget.
    pub fn new(titles: Vec<&'a str>) -> Self {
        Self {
            titles,
            selected: 0,
        }
    }

    /// Create a tabs widget showing `state`.
    pub fn from_state(state: &'a TabsState) -> Self {
        Self::new(state.titles.iter().map(String::as_str).collect()).select(state.selected)
    }

    /// Set the selected tab index.
    #[must_use]
    pub fn select(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }
}

impl Widget for Tabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let mut spans = Vec::new();
        for (i, title) in self.titles.iter().enumerate() {
            let is_selected = i == self.selected;

            if i > 0 {
                spans.push(Span::styled(" | ", Styles::dim()));
            }

            // Tab number hint
            spans.push(Span::styled(
                format!("[{}] ", i + 1),
                if is_selected {
                    Styles::highlight()
                } else {
                    Styles::dim()
                },
            ));

            if is_selected {
                spans.push(Span::styled(*title, Styles::highlight()));
            } else {
                spans.push(Span::styled(*title, Styles::default()));
            }
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
