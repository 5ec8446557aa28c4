//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to pick the glyphs drawn on the
//! action layer, supporting emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Glyphs for one theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    pub edit: &'static str,
    pub delete: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                edit: "✏️",
                delete: "🗑️",
            },
            IconTheme::Unicode => IconSet {
                edit: "✎",
                delete: "✗",
            },
            IconTheme::Ascii => IconSet {
                edit: "[E]",
                delete: "[D]",
            },
        }
    }

    #[must_use]
    pub fn edit(&self) -> &'static str {
        self.icons().edit
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().delete
    }
}
