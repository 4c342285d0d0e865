use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::App;
use crate::suggest;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Search input is fixed 3 lines
            Constraint::Min(0),    // Space the dropdown overlays
        ])
        .split(frame.area());

        let title_area = layout[0];
        let input_area = layout[1];

        self.render_title_bar(frame, title_area);

        self.regions.input_field = input_area;
        frame.render_widget(&self.input.textarea, input_area);

        // Dropdown overlays whatever sits below the input
        suggest::render_dropdown(frame, &self.suggest.dropdown, input_area, &mut self.regions);
    }

    /// Render the title bar (app name and server)
    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" mandi ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::styled(
                format!(" {}", self.server_label),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
