use crate::config::Config;
use crate::constants::{APP_TITLE, FOOTER_HINTS};
use crate::ui::components::{ConfirmDialog, SwipeListComponent};
use crate::ui::core::{actions::Action, event_handler::EventType, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Top-level component: header, swipe list, footer, and the modal dialog
pub struct AppComponent {
    list: SwipeListComponent,
    screen: Rect,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config) -> Self {
        Self {
            list: SwipeListComponent::new(config),
            screen: Rect::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn list(&self) -> &SwipeListComponent {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SwipeListComponent {
        &mut self.list
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.list.open_dialog().is_some()
    }

    /// Lay the screen out without drawing, so input can be hit-tested
    pub fn resize(&mut self, screen: Rect) {
        self.screen = screen;
        let [_, body, _] = LayoutManager::main_layout(screen);
        self.list.set_viewport(body);
    }

    /// Advance animations; returns whether a redraw is needed
    pub fn on_tick(&mut self) -> bool {
        self.list.tick()
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                log::info!("Global key: {:?} - quitting application", key.code);
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Translate a terminal event into an action; the dialog is modal
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.handle_global_key(key)
                } else if self.is_dialog_visible() {
                    ConfirmDialog::handle_key(key)
                } else {
                    match self.list.handle_key_events(key) {
                        Action::None => self.handle_global_key(key),
                        action => action,
                    }
                }
            }
            EventType::Mouse(mouse) => {
                if self.is_dialog_visible() {
                    ConfirmDialog::handle_mouse(mouse, self.screen)
                } else {
                    self.list.handle_mouse_events(mouse)
                }
            }
            EventType::Resize(width, height) => {
                self.resize(Rect::new(0, 0, width, height));
                Action::None
            }
            EventType::Tick | EventType::Other => Action::None,
        };

        self.update(action)
    }

    fn render_header(f: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(" ≡ ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(APP_TITLE, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ]))
        .style(Style::default().bg(Color::Blue));
        f.render_widget(header, area);
    }

    fn render_footer(f: &mut Frame, area: Rect) {
        let footer = Paragraph::new(FOOTER_HINTS).style(Style::default().fg(Color::DarkGray));
        f.render_widget(footer, area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_event(EventType::Key(key))
    }

    fn update(&mut self, action: Action) -> Action {
        if action != Action::None {
            log::debug!("Action: {:?}", action);
        }
        match self.list.update(action) {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.screen = rect;
        let [header, body, footer] = LayoutManager::main_layout(rect);

        Self::render_header(f, header);
        self.list.render(f, body);
        Self::render_footer(f, footer);

        // Dialog goes on top of everything
        if let Some(dialog) = self.list.open_dialog() {
            ConfirmDialog::render(f, rect, dialog);
        }
    }
}
