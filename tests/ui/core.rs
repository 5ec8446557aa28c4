#[path = "core/actions.rs"]
mod actions;

#[path = "core/event_handler.rs"]
mod event_handler;

#[path = "core/row_store.rs"]
mod row_store;
