//! Swipelist - a terminal list with swipe-to-reveal row actions
//!
//! Each of the list's rows carries a card that can be dragged sideways with
//! the mouse (or moved with the keyboard) to uncover an edit icon on the left
//! or a delete icon on the right. Activating an icon opens a confirmation
//! dialog; nothing is actually edited or deleted.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`swipe`] - The swipe gesture state machine
//! * [`ui`] - Terminal user interface components
//! * [`logger`] - File logging setup

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for the row actions
pub mod icons;

/// Logging setup
pub mod logger;

/// Swipe gesture state machine
pub mod swipe;

/// Terminal user interface components and rendering
pub mod ui;

pub use swipe::{Anchor, SwipeDirection, SwipePhase, SwipeState};
