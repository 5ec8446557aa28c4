

#[path = "components/swipe_list_component.rs"]
mod swipe_list_component;
