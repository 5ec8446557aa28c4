use crate::swipe::SwipeDirection;
use crate::ui::components::row_component::RowAction;

/// Everything a component can ask the app to do in response to input
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SelectNext,
    SelectPrevious,
    ScrollUp,
    ScrollDown,

    // Gestures
    Swipe {
        row: usize,
        direction: SwipeDirection,
    },
    DragStart {
        row: usize,
        column: u16,
    },
    DragMove {
        column: u16,
    },
    DragEnd {
        column: u16,
    },

    // Row actions
    Tap {
        row: usize,
        action: RowAction,
    },

    // Display
    CycleIconTheme,

    // Dialog operations
    SubmitDialog,
    DismissDialog,

    // App control
    Quit,
    None,
}
