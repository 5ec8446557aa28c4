//! Layout management and calculations

use crate::constants::{DIALOG_HEIGHT, DIALOG_WIDTH_PERCENT, LIST_PADDING, ROW_HEIGHT, ROW_SPACING};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical distance between the tops of two consecutive rows
pub const ROW_SLOT: u16 = ROW_HEIGHT + ROW_SPACING;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header bar, list body and footer hints
    #[must_use]
    pub fn main_layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// The list body minus its padding (one blank line on top, one column each side)
    #[must_use]
    pub fn list_content(area: Rect) -> Rect {
        Rect {
            x: area.x + LIST_PADDING,
            y: area.y + LIST_PADDING,
            width: area.width.saturating_sub(LIST_PADDING * 2),
            height: area.height.saturating_sub(LIST_PADDING),
        }
    }

    /// How many whole rows fit in `height` lines
    #[must_use]
    pub fn visible_rows(height: u16) -> usize {
        if height < ROW_HEIGHT {
            return 0;
        }
        usize::from((height + ROW_SPACING) / ROW_SLOT)
    }

    /// Total lines needed to show `row_count` rows
    #[must_use]
    pub fn content_height(row_count: usize) -> usize {
        (row_count * usize::from(ROW_SLOT)).saturating_sub(usize::from(ROW_SPACING))
    }

    /// Where the modal dialog goes on a screen
    #[must_use]
    pub fn dialog_area(screen: Rect) -> Rect {
        let height = DIALOG_HEIGHT.min(screen.height);
        let rect = Self::centered_rect_lines(DIALOG_WIDTH_PERCENT, height, screen);
        // Narrow terminals still get a readable dialog
        let min_width = 30.min(screen.width);
        if rect.width >= min_width {
            return rect;
        }
        Rect {
            x: screen.x + (screen.width - min_width) / 2,
            width: min_width,
            ..rect
        }
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Whether a terminal cell lies inside a rect
    #[must_use]
    pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
        column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
    }
}
