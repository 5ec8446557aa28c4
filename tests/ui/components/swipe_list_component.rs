use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use swipelist::config::Config;
use swipelist::icons::IconTheme;
use swipelist::swipe::{Anchor, SwipeDirection, SwipePhase};
use swipelist::ui::components::{RowAction, SwipeListComponent};
use swipelist::ui::core::{Action, Component};

use crate::support::{drag, key, mouse, press, release};

/// List body of a 60x30 screen (below the header, above the footer)
const BODY: Rect = Rect {
    x: 0,
    y: 1,
    width: 60,
    height: 28,
};

fn list_with(config: Config) -> SwipeListComponent {
    let mut list = SwipeListComponent::new(&config);
    list.set_viewport(BODY);
    list
}

fn list() -> SwipeListComponent {
    list_with(Config::default())
}

fn send_mouse(list: &mut SwipeListComponent, event: MouseEvent) {
    let action = list.handle_mouse_events(event);
    assert_eq!(list.update(action), Action::None);
}

fn send_key(list: &mut SwipeListComponent, code: KeyCode) -> Action {
    let action = list.handle_key_events(key(code));
    list.update(action)
}

fn settle(list: &mut SwipeListComponent) {
    while list.tick() {}
}

#[test]
fn test_geometry() {
    let list = list();

    // One column of padding each side, scrollbar in the last column
    assert_eq!(list.row_area(0), Some(Rect::new(1, 2, 57, 3)));
    assert_eq!(list.row_area(3), Some(Rect::new(1, 14, 57, 3)));
    assert_eq!(list.row_area(6), Some(Rect::new(1, 26, 57, 3)));
    assert_eq!(list.row_area(7), None);

    assert_eq!(list.row_at(30, 2), Some(0));
    assert_eq!(list.row_at(30, 4), Some(0));
    assert_eq!(list.row_at(30, 5), None, "gap between rows");
    assert_eq!(list.row_at(30, 15), Some(3));
    assert_eq!(list.row_at(0, 15), None, "padding column");
    assert_eq!(list.row_at(58, 15), None, "scrollbar column");
}

#[test]
fn test_rows_are_created_on_demand() {
    let mut list = list();
    assert_eq!(list.row_count(), 20);
    assert_eq!(list.store().materialized(), 0);
    assert!(list.row(4).is_none());

    assert!(list.row_mut(4).is_some());
    assert!(list.row_mut(20).is_none());
    assert_eq!(list.store().materialized(), 1);
}

#[test]
fn test_swipe_and_delete_scenario() {
    let mut list = list();

    // Row index 3 sits on lines 14..17; drag its card left by half the action width
    send_mouse(&mut list, press(30, 15));
    assert!(list.is_dragging());
    assert_eq!(
        list.row(3).unwrap().swipe.phase(),
        SwipePhase::DraggingFrom(Anchor::Closed)
    );
    send_mouse(&mut list, drag(28, 15));
    send_mouse(&mut list, drag(26, 15));
    assert_eq!(list.row(3).unwrap().swipe.offset(), -4.0);
    send_mouse(&mut list, release(26, 15));

    assert!(!list.is_dragging());
    assert_eq!(list.row(3).unwrap().swipe.anchor(), Anchor::RevealedLeft);
    assert_eq!(list.row(3).unwrap().swipe.anchor().value(), 2);
    settle(&mut list);
    assert_eq!(list.row(3).unwrap().swipe.offset(), -8.0);

    // Tap the uncovered delete icon at the right edge
    send_mouse(&mut list, press(54, 15));
    send_mouse(&mut list, release(54, 15));
    let dialog = list.open_dialog().expect("dialog should be open");
    assert_eq!(dialog.message(), "Do you want to delete item 4");

    // Submit hides it; the row stays revealed
    assert_eq!(list.update(Action::SubmitDialog), Action::None);
    assert!(list.open_dialog().is_none());
    assert_eq!(list.row(3).unwrap().swipe.anchor(), Anchor::RevealedLeft);
}

#[test]
fn test_reset_after_dialog_closes_row() {
    let mut config = Config::default();
    config.swipe.reset_after_dialog = true;
    let mut list = list_with(config);

    list.update(Action::Swipe {
        row: 1,
        direction: SwipeDirection::Right,
    });
    list.update(Action::Tap {
        row: 1,
        action: RowAction::Edit,
    });
    assert_eq!(list.open_dialog().unwrap().message(), "Do you want to edit item 2");

    // Dismissing keeps the row open, submitting closes it
    list.update(Action::DismissDialog);
    assert_eq!(list.row(1).unwrap().swipe.anchor(), Anchor::RevealedRight);

    list.update(Action::Tap {
        row: 1,
        action: RowAction::Edit,
    });
    list.update(Action::SubmitDialog);
    assert!(list.open_dialog().is_none());
    assert_eq!(list.row(1).unwrap().swipe.anchor(), Anchor::Closed);
}

#[test]
fn test_short_drag_snaps_back() {
    let mut list = list();
    send_mouse(&mut list, press(30, 3));
    send_mouse(&mut list, drag(32, 3));
    send_mouse(&mut list, release(32, 3));
    assert_eq!(list.row(0).unwrap().swipe.anchor(), Anchor::Closed);
    settle(&mut list);
    assert_eq!(list.row(0).unwrap().swipe.offset(), 0.0);
}

#[test]
fn test_drag_back_to_start_is_not_a_tap() {
    let mut list = list();
    list.update(Action::Swipe {
        row: 0,
        direction: SwipeDirection::Right,
    });
    settle(&mut list);

    // Wander off and come back over the edit icon: a drag, not a tap
    send_mouse(&mut list, press(3, 3));
    send_mouse(&mut list, drag(6, 3));
    send_mouse(&mut list, release(3, 3));
    assert!(list.open_dialog().is_none());
    assert_eq!(list.row(0).unwrap().swipe.anchor(), Anchor::RevealedRight);
}

#[test]
fn test_tap_on_card_does_nothing() {
    let mut list = list();
    send_mouse(&mut list, press(30, 3));
    send_mouse(&mut list, release(30, 3));
    assert!(list.open_dialog().is_none());
    assert_eq!(list.row(0).unwrap().swipe.phase(), SwipePhase::Closed);
}

#[test]
fn test_press_outside_rows_is_ignored() {
    let mut list = list();
    assert_eq!(list.handle_mouse_events(press(30, 5)), Action::None);
    assert_eq!(list.handle_mouse_events(drag(20, 5)), Action::None);
    assert_eq!(list.handle_mouse_events(release(20, 5)), Action::None);
    assert!(!list.is_dragging());
}

#[test]
fn test_rows_are_independent() {
    let mut list = list();
    list.update(Action::Swipe {
        row: 0,
        direction: SwipeDirection::Left,
    });
    list.update(Action::Tap {
        row: 0,
        action: RowAction::Delete,
    });

    assert_eq!(list.row(0).unwrap().swipe.anchor(), Anchor::RevealedLeft);
    assert_eq!(list.row_mut(1).unwrap().swipe.anchor(), Anchor::Closed);
    assert!(!list.row(1).unwrap().dialog.is_visible());
}

#[test]
fn test_new_drag_on_other_row_cancels_first() {
    let mut list = list();
    list.update(Action::DragStart { row: 0, column: 30 });
    list.update(Action::DragMove { column: 24 });
    list.update(Action::DragStart { row: 1, column: 30 });

    let first = list.row(0).unwrap();
    assert!(!first.swipe.is_dragging());
    assert_eq!(first.swipe.anchor(), Anchor::Closed);
    assert_eq!(
        list.row(1).unwrap().swipe.phase(),
        SwipePhase::DraggingFrom(Anchor::Closed)
    );
    assert_eq!(list.selected(), 1);
}

#[test]
fn test_keyboard_selection_scrolls() {
    let mut list = list();
    assert_eq!(list.selected(), 0);

    send_key(&mut list, KeyCode::Char('k'));
    assert_eq!(list.selected(), 0);

    for _ in 0..7 {
        send_key(&mut list, KeyCode::Char('j'));
    }
    assert_eq!(list.selected(), 7);
    assert_eq!(list.scroll_offset(), 1);

    for _ in 0..30 {
        send_key(&mut list, KeyCode::Down);
    }
    assert_eq!(list.selected(), 19);
    assert_eq!(list.scroll_offset(), 13);

    send_key(&mut list, KeyCode::Up);
    assert_eq!(list.selected(), 18);
    assert_eq!(list.scroll_offset(), 13);
}

#[test]
fn test_wheel_scrolling_is_clamped() {
    let mut list = list();
    for _ in 0..30 {
        send_mouse(&mut list, mouse(MouseEventKind::ScrollDown, 10, 10));
    }
    assert_eq!(list.scroll_offset(), 13);
    assert_eq!(list.row_at(30, 2), Some(13));

    for _ in 0..30 {
        send_mouse(&mut list, mouse(MouseEventKind::ScrollUp, 10, 10));
    }
    assert_eq!(list.scroll_offset(), 0);
}

#[test]
fn test_keyboard_swipe_and_icon_keys() {
    let mut list = list();
    send_key(&mut list, KeyCode::Char('j'));

    // Nothing revealed yet
    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None);
    assert_eq!(list.handle_key_events(key(KeyCode::Enter)), Action::None);

    send_key(&mut list, KeyCode::Char('h'));
    assert_eq!(list.row(1).unwrap().swipe.anchor(), Anchor::RevealedLeft);

    // Only the uncovered icon responds
    assert_eq!(list.handle_key_events(key(KeyCode::Char('e'))), Action::None);
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('d'))),
        Action::Tap {
            row: 1,
            action: RowAction::Delete
        }
    );

    send_key(&mut list, KeyCode::Enter);
    assert_eq!(list.open_dialog().unwrap().message(), "Do you want to delete item 2");
    list.update(Action::DismissDialog);

    send_key(&mut list, KeyCode::Right);
    assert_eq!(list.row(1).unwrap().swipe.anchor(), Anchor::Closed);
    send_key(&mut list, KeyCode::Char('l'));
    assert_eq!(list.row(1).unwrap().swipe.anchor(), Anchor::RevealedRight);
    send_key(&mut list, KeyCode::Char('e'));
    assert_eq!(list.open_dialog().unwrap().message(), "Do you want to edit item 2");
}

#[test]
fn test_unhandled_actions_pass_through() {
    let mut list = list();
    assert_eq!(list.update(Action::Quit), Action::Quit);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('q'))), Action::None);
}

#[test]
fn test_icon_theme_cycles() {
    let mut list = list();
    assert_eq!(list.icons().theme(), IconTheme::Ascii);
    send_key(&mut list, KeyCode::Char('i'));
    assert_eq!(list.icons().theme(), IconTheme::Unicode);
    assert_eq!(list.icons().delete(), "✗");
}
