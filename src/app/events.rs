use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::App;

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: exit without output
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            // Esc closes the dropdown first, then the app
            KeyCode::Esc => {
                if self.suggest.dropdown.is_shown() {
                    self.suggest.hide();
                } else {
                    self.quit();
                }
            }
            KeyCode::Down if self.suggest.dropdown.is_shown() => self.suggest.select_next(),
            KeyCode::Up if self.suggest.dropdown.is_shown() => self.suggest.select_prev(),
            // Enter picks the selected suggestion, or exits with the
            // typed text when nothing is selected
            KeyCode::Enter => match self.suggest.selected_index() {
                Some(index) => self.activate_row(index),
                None => self.accept_input_and_quit(),
            },
            KeyCode::Tab => {
                if let Some(index) = self.suggest.selected_index() {
                    self.activate_row(index);
                }
            }
            // Everything else edits the input field
            _ => {
                if self.input.textarea.input(key) {
                    self.on_input_changed();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
