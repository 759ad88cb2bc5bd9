//! Shared look for the poll view

use ratatui::style::{Color, Modifier, Style};

use crate::models::SelectionValue;

/// Styles used across the view. Constructed once at startup and handed into
/// every render function rather than living in process-wide state.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub affirmative: Style,
    pub negative: Style,
    pub neutral: Style,
    pub focused: Style,
    pub notice: Style,
    pub error: Style,
    pub hint: Style,
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            affirmative: Style::default().fg(Color::Green),
            negative: Style::default().fg(Color::Red),
            neutral: Style::default().fg(Color::Gray),
            focused: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            notice: Style::default().fg(Color::Green),
            error: Style::default().fg(Color::Red),
            hint: Style::default().fg(Color::Cyan),
            border: Style::default().fg(Color::Gray),
        }
    }
}

impl Theme {
    /// Style for one resolved cell state.
    pub fn state_style(&self, value: SelectionValue) -> Style {
        match value {
            SelectionValue::Yes => self.affirmative,
            SelectionValue::No => self.negative,
            SelectionValue::Unknown => self.neutral,
        }
    }
}
