use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use swipelist::ui::core::event_handler::{EventHandler, EventType};

use crate::support::press;

#[tokio::test]
async fn test_render_pacing() {
    let mut event_handler = EventHandler::new();

    // Initially should not need to render (just created)
    assert!(!event_handler.should_render());

    // After waiting, should be ready to render
    tokio::time::sleep(tokio::time::Duration::from_millis(17)).await;
    assert!(event_handler.should_render());

    event_handler.mark_rendered();
    assert!(!event_handler.should_render());
}

#[test]
fn test_classify_events() {
    let key_press = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
    assert!(matches!(EventHandler::classify(Event::Key(key_press)), EventType::Key(_)));

    let key_release = KeyEvent::new_with_kind(KeyCode::Char('j'), KeyModifiers::NONE, KeyEventKind::Release);
    assert!(matches!(EventHandler::classify(Event::Key(key_release)), EventType::Other));

    assert!(matches!(EventHandler::classify(Event::Mouse(press(3, 4))), EventType::Mouse(m) if m.column == 3));
    assert!(matches!(EventHandler::classify(Event::Resize(80, 24)), EventType::Resize(80, 24)));
    assert!(matches!(EventHandler::classify(Event::FocusGained), EventType::Other));
}

#[test]
fn test_custom_tick_rate() {
    let handler = EventHandler::with_tick_rate(std::time::Duration::from_millis(5));
    assert_eq!(handler.tick_rate(), std::time::Duration::from_millis(5));
}
