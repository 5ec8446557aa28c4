//! Core UI functionality for Swipelist.
//!
//! This module contains the building blocks every component relies on:
//!
//! - [`actions`] - The [`Action`] values input is translated into
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and tick generation
//! - [`row_store`] - Lazily created per-row state
//!
//! Input flows one way: an event becomes an [`Action`], the action is
//! applied by the owning component's `update`, and the next frame renders
//! the new state.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod row_store;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use row_store::RowStore;
