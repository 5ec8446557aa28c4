use swipelist::swipe::SwipeDirection;
use swipelist::ui::components::RowAction;
use swipelist::ui::core::Action;

#[test]
fn test_actions_compare_by_payload() {
    assert_eq!(
        Action::Tap {
            row: 3,
            action: RowAction::Delete
        },
        Action::Tap {
            row: 3,
            action: RowAction::Delete
        }
    );
    assert_ne!(
        Action::Swipe {
            row: 0,
            direction: SwipeDirection::Left
        },
        Action::Swipe {
            row: 0,
            direction: SwipeDirection::Right
        }
    );
}
