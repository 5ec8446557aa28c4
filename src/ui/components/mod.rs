//! Reusable UI components

pub mod confirm_dialog;
pub mod row_component;
pub mod scrollbar_helper;
pub mod swipe_list_component;

// Component exports
pub use confirm_dialog::ConfirmDialog;
pub use row_component::{DialogState, RowAction, RowItem, RowModel};
pub use swipe_list_component::SwipeListComponent;
