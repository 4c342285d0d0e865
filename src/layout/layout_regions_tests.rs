//! Tests for layout region tracking

use ratatui::layout::Rect;

use crate::layout::LayoutRegions;

#[test]
fn test_new_regions_have_no_dropdown() {
    let regions = LayoutRegions::new();

    assert_eq!(regions.input_field, Rect::default());
    assert_eq!(regions.dropdown(), None);
    assert_eq!(regions.dropdown_rows(), 0);
}

#[test]
fn test_record_dropdown() {
    let mut regions = LayoutRegions::new();
    let area = Rect::new(1, 4, 30, 5);

    regions.record_dropdown(area, 3);

    assert_eq!(regions.dropdown(), Some(area));
    assert_eq!(regions.dropdown_rows(), 3);
}

#[test]
fn test_clear_dropdown() {
    let mut regions = LayoutRegions::new();
    regions.record_dropdown(Rect::new(1, 4, 30, 5), 3);

    regions.clear_dropdown();

    assert_eq!(regions.dropdown(), None);
    assert_eq!(regions.dropdown_rows(), 0);
}
