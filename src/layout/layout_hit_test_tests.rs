//! Tests for position-to-region hit testing

use ratatui::layout::Rect;

use crate::layout::{LayoutRegions, Region, region_at};

/// Input field at rows 1-3, dropdown at rows 4-7 with two rows inside
/// the border
fn regions() -> LayoutRegions {
    let mut regions = LayoutRegions::new();
    regions.input_field = Rect::new(0, 1, 40, 3);
    regions.record_dropdown(Rect::new(1, 4, 30, 4), 2);
    regions
}

#[test]
fn test_input_field_hit() {
    assert_eq!(region_at(&regions(), 5, 2), Some(Region::InputField));
}

#[test]
fn test_dropdown_top_border_hit() {
    assert_eq!(region_at(&regions(), 5, 4), Some(Region::Dropdown));
}

#[test]
fn test_dropdown_rows_hit() {
    assert_eq!(region_at(&regions(), 5, 5), Some(Region::DropdownRow(0)));
    assert_eq!(region_at(&regions(), 5, 6), Some(Region::DropdownRow(1)));
}

#[test]
fn test_dropdown_bottom_border_hit() {
    // Row band exhausted: position is still inside the container
    assert_eq!(region_at(&regions(), 5, 7), Some(Region::Dropdown));
}

#[test]
fn test_outside_everything_misses() {
    assert_eq!(region_at(&regions(), 5, 0), None);
    assert_eq!(region_at(&regions(), 5, 12), None);
    assert_eq!(region_at(&regions(), 39, 5), None);
}

#[test]
fn test_cleared_dropdown_no_longer_hit() {
    let mut regions = regions();
    regions.clear_dropdown();

    assert_eq!(region_at(&regions, 5, 5), None);
    assert_eq!(region_at(&regions, 5, 2), Some(Region::InputField));
}
