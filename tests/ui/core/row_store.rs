use swipelist::config::SwipeConfig;
use swipelist::swipe::{Anchor, SwipeDirection};
use swipelist::ui::components::RowAction;
use swipelist::ui::core::RowStore;

#[test]
fn test_rows_are_created_lazily() {
    let mut store = RowStore::new(20, SwipeConfig::default());
    assert_eq!(store.row_count(), 20);
    assert_eq!(store.materialized(), 0);
    assert!(store.get(5).is_none());

    let row = store.get_or_create(5).unwrap();
    assert_eq!(row.index(), 5);
    assert_eq!(store.materialized(), 1);

    // Second access reuses the same state
    store.get_or_create(5).unwrap().swipe.swipe(SwipeDirection::Left);
    assert_eq!(store.materialized(), 1);
    assert_eq!(store.get(5).unwrap().swipe.anchor(), Anchor::RevealedLeft);
}

#[test]
fn test_no_rows_past_the_end() {
    let mut store = RowStore::new(20, SwipeConfig::default());
    assert!(store.get_or_create(20).is_none());
    assert_eq!(store.materialized(), 0);
}

#[test]
fn test_open_dialog_row() {
    let mut store = RowStore::new(20, SwipeConfig::default());
    store.get_or_create(2);
    assert_eq!(store.open_dialog_row(), None);

    store.get_or_create(9).unwrap().tap(RowAction::Edit);
    assert_eq!(store.open_dialog_row(), Some(9));
}

#[test]
fn test_tick_reports_movement() {
    let mut store = RowStore::new(20, SwipeConfig::default());
    store.get_or_create(0);
    assert!(!store.tick());

    store.get_or_create(1).unwrap().swipe.swipe(SwipeDirection::Right);
    assert!(store.tick());
    while store.tick() {}
    assert_eq!(store.get(1).unwrap().swipe.offset(), 8.0);
}
