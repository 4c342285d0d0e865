use ratatui::layout::Position;

use super::layout_regions::{LayoutRegions, Region};

/// Determine which UI component is at the given screen position
///
/// The dropdown is checked first since it overlays everything beneath
/// it. Inside the dropdown, positions on the row band resolve to the row
/// index; positions on the border resolve to the dropdown chrome.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);

    if let Some(area) = regions.dropdown() {
        if area.contains(position) {
            // Rows start inside the top border
            let first_row_y = area.y + 1;
            if row >= first_row_y {
                let index = (row - first_row_y) as usize;
                if index < regions.dropdown_rows() {
                    return Some(Region::DropdownRow(index));
                }
            }
            return Some(Region::Dropdown);
        }
    }

    if regions.input_field.contains(position) {
        return Some(Region::InputField);
    }

    None
}
