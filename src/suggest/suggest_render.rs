//! Suggestion dropdown rendering
//!
//! Pure view of the dropdown state: reads `Dropdown`, draws the popup
//! anchored below the input field, and records the drawn areas for
//! mouse hit-testing. No state transitions happen here.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::layout::LayoutRegions;
use crate::suggest::Dropdown;
use crate::widgets::popup;

// Dropdown display constants
const MAX_VISIBLE_ROWS: usize = 8;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_BORDER_WIDTH: u16 = 2;
const ROW_PREFIX_WIDTH: usize = 2;
const NAME_SUMMARY_SPACING: usize = 2;
const POPUP_OFFSET_X: u16 = 1;

/// Render the suggestion dropdown below the input field
pub fn render_dropdown(
    frame: &mut Frame,
    dropdown: &Dropdown,
    input_area: Rect,
    regions: &mut LayoutRegions,
) {
    regions.clear_dropdown();

    let Dropdown::Shown { items, selected } = dropdown else {
        return;
    };

    let visible = items.len().min(MAX_VISIBLE_ROWS);
    let popup_height = visible as u16 + POPUP_BORDER_HEIGHT;

    // Size the popup to the widest visible row, in display columns
    let max_row_width = items
        .iter()
        .take(visible)
        .map(|item| {
            UnicodeWidthStr::width(item.name.as_str())
                + NAME_SUMMARY_SPACING
                + UnicodeWidthStr::width(item.summary().as_str())
        })
        .max()
        .unwrap_or(0);
    let popup_width = (max_row_width + ROW_PREFIX_WIDTH) as u16 + POPUP_BORDER_WIDTH;

    let area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if area.height <= POPUP_BORDER_HEIGHT {
        // Not enough room below the input to show any row
        return;
    }

    let inner_width = area.width.saturating_sub(POPUP_BORDER_WIDTH) as usize;

    let rows: Vec<ListItem> = items
        .iter()
        .take(visible)
        .enumerate()
        .map(|(i, item)| {
            let summary = item.summary();
            let name_width = UnicodeWidthStr::width(item.name.as_str());
            let summary_width = UnicodeWidthStr::width(summary.as_str());

            // Right-align the summary by padding between name and summary
            let padding = inner_width
                .saturating_sub(ROW_PREFIX_WIDTH + name_width + summary_width);

            let line = if Some(i) == *selected {
                // Highlight selected row with high contrast colors
                Line::from(vec![
                    Span::styled(
                        format!("► {}{}", item.name, " ".repeat(padding)),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(summary, Style::default().fg(Color::Black).bg(Color::Cyan)),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {}{}", item.name, " ".repeat(padding)),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(summary, Style::default().fg(Color::DarkGray)),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    let list = List::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    // Clear the background area to prevent transparency
    popup::clear_area(frame, area);
    frame.render_widget(list, area);

    regions.record_dropdown(area, visible);
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
