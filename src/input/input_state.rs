use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Single-line search input backed by a textarea widget
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::Cyan)),
        );

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Type to search products");

        Self { textarea }
    }

    /// Current raw input text
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the input text, leaving the cursor at the end
    ///
    /// Used when a suggestion is activated. This is a programmatic edit,
    /// not a keystroke, so the caller decides whether it counts as an
    /// input change.
    pub fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
