//! Scrollbar helper for the row list.
//!
//! The list has no border, so the scrollbar takes the last column of the
//! content area whenever the rows are taller than the viewport.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Helper for managing scrollbar state and rendering for scrollable components.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    /// Create a new scrollbar helper with default state.
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Update the scrollbar state with current content information.
    ///
    /// # Arguments
    /// * `total_items` - Total number of items in the scrollable content
    /// * `current_position` - First visible item (0-based index)
    /// * `viewport_items` - How many items are visible at once
    pub fn update_state(&mut self, total_items: usize, current_position: usize, viewport_items: usize) {
        self.state = self
            .state
            .content_length(total_items.saturating_sub(viewport_items) + 1)
            .position(current_position)
            .viewport_content_length(viewport_items);
    }

    /// Check if a scrollbar is needed based on content size and available space.
    pub fn needs_scrollbar(content_height: usize, available_height: usize) -> bool {
        content_height > available_height
    }

    /// Split `rect` into the content area and, when needed, a one-column scrollbar area.
    pub fn calculate_areas(rect: Rect, content_height: usize) -> (Rect, Option<Rect>) {
        if !Self::needs_scrollbar(content_height, usize::from(rect.height)) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            width: 1,
            ..rect
        };
        (content_area, Some(scrollbar_area))
    }

    /// Render the scrollbar widget if a scrollbar area is provided.
    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
