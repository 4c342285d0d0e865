use ratatui::layout::Rect;

/// UI component at a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The search input field
    InputField,
    /// The dropdown chrome (border, title) without a row under it
    Dropdown,
    /// A specific suggestion row, by display index
    DropdownRow(usize),
}

/// Screen areas recorded during the last render
///
/// Updated every frame; the dropdown entry is only present while the
/// dropdown is drawn.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub input_field: Rect,
    dropdown: Option<Rect>,
    dropdown_rows: usize,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the dropdown area (called when the dropdown is not drawn)
    pub fn clear_dropdown(&mut self) {
        self.dropdown = None;
        self.dropdown_rows = 0;
    }

    /// Record the drawn dropdown area and its visible row count
    pub fn record_dropdown(&mut self, area: Rect, rows: usize) {
        self.dropdown = Some(area);
        self.dropdown_rows = rows;
    }

    pub fn dropdown(&self) -> Option<Rect> {
        self.dropdown
    }

    pub fn dropdown_rows(&self) -> usize {
        self.dropdown_rows
    }
}
