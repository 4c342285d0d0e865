//! Tests for mouse click handling

use std::sync::mpsc::{self, Receiver, Sender};

use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::App;
use crate::suggest::{Dropdown, SuggestRequest, SuggestResponse, Suggestion};

fn suggestion(name: &str) -> Suggestion {
    Suggestion {
        name: name.to_string(),
        avg_rating: 4.5,
        review_count: 9,
    }
}

/// App with the dropdown shown and layout regions as after a render:
/// input field at rows 1-3, dropdown at rows 4-7 with two rows
fn clickable_app() -> (App, Receiver<SuggestRequest>, Sender<SuggestResponse>) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let mut app = App::with_channels("http://test".to_string(), request_tx, response_rx);

    app.input.textarea.insert_str("ra");
    app.on_input_changed();
    let request = request_rx.try_recv().unwrap();
    response_tx
        .send(SuggestResponse::Results {
            items: vec![suggestion("Rice"), suggestion("Ragi")],
            request_id: request.request_id,
        })
        .unwrap();
    app.drain_responses();

    app.regions.input_field = Rect::new(0, 1, 40, 3);
    app.regions.record_dropdown(Rect::new(1, 4, 30, 4), 2);

    (app, request_rx, response_tx)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_click_on_row_activates_it() {
    let (mut app, request_rx, _) = clickable_app();

    // Second row sits one line below the top border
    app.handle_mouse_event(left_click(5, 6));

    assert_eq!(app.input.text(), "Ragi");
    assert_eq!(app.suggest.dropdown, Dropdown::Hidden);
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_click_outside_hides_dropdown() {
    let (mut app, _, _) = clickable_app();

    app.handle_mouse_event(left_click(5, 12));

    assert_eq!(app.suggest.dropdown, Dropdown::Hidden);
    assert_eq!(app.input.text(), "ra");
}

#[test]
fn test_click_on_input_field_keeps_dropdown() {
    let (mut app, _, _) = clickable_app();

    app.handle_mouse_event(left_click(5, 2));

    assert!(app.suggest.dropdown.is_shown());
}

#[test]
fn test_click_on_dropdown_border_keeps_dropdown() {
    let (mut app, _, _) = clickable_app();

    // Top border of the dropdown: inside the container, not a row
    app.handle_mouse_event(left_click(5, 4));

    assert!(app.suggest.dropdown.is_shown());
    assert_eq!(app.input.text(), "ra");
}

#[test]
fn test_non_left_click_ignored() {
    let (mut app, _, _) = clickable_app();

    app.handle_mouse_event(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 5,
        row: 12,
        modifiers: KeyModifiers::NONE,
    });

    assert!(app.suggest.dropdown.is_shown());
}
