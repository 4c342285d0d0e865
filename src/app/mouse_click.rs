//! Mouse click handling
//!
//! Routes click events by the region under the pointer.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::state::App;
use crate::layout::{Region, region_at};

impl App {
    /// Handle mouse events
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.handle_click(mouse.column, mouse.row);
        }
    }

    /// Route a left click
    ///
    /// A click on a suggestion row activates it. A click anywhere
    /// outside both the input field and the dropdown hides the
    /// dropdown; clicks on the input field or the dropdown chrome
    /// change nothing.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        match region_at(&self.regions, column, row) {
            Some(Region::DropdownRow(index)) => self.activate_row(index),
            Some(Region::InputField) | Some(Region::Dropdown) => {}
            None => self.suggest.hide(),
        }
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
