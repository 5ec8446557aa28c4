//! Constants used throughout the application
//!
//! This module centralizes UI text, layout sizes and default values
//! to improve maintainability and consistency.

// UI Text
pub const APP_TITLE: &str = "Swipe Left Or Right";
pub const ROW_LABEL_PREFIX: &str = "Make it Easy";
pub const DIALOG_TITLE: &str = "Alert Dialog!";
pub const DIALOG_SUBMIT: &str = "Submit";
pub const FOOTER_HINTS: &str =
    " drag or h/l swipe • j/k select • e edit • d delete • i icons • q quit ";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "swipelist.toml";
pub const APP_DIR_NAME: &str = "swipelist";
pub const LOG_FILE_NAME: &str = "swipelist.log";

// List defaults
/// Number of placeholder rows in the list
pub const DEFAULT_ROW_COUNT: usize = 20;
/// Largest list the configuration accepts
pub const MAX_ROW_COUNT: usize = 1000;

// Swipe defaults
/// Width of each revealed action area in columns
pub const DEFAULT_ACTION_WIDTH: u16 = 8;
/// Smallest action width that still fits an icon with padding
pub const MIN_ACTION_WIDTH: u16 = 3;
/// Largest action width the configuration accepts
pub const MAX_ACTION_WIDTH: u16 = 40;
/// Fraction of the anchor distance a drag must exceed to change anchor
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 0.3;
/// Columns the card travels per tick while settling onto an anchor
pub const DEFAULT_SETTLE_STEP: f32 = 2.0;

// UI Layout Constants
/// Height of one row card in lines (border + label + border)
pub const ROW_HEIGHT: u16 = 3;
/// Blank lines between two rows
pub const ROW_SPACING: u16 = 1;
/// Horizontal padding around the list
pub const LIST_PADDING: u16 = 1;
/// Dialog size as a percentage of the screen
pub const DIALOG_WIDTH_PERCENT: u16 = 50;
pub const DIALOG_HEIGHT: u16 = 8;
