//! Modal confirmation dialog shown after tapping a row's action icon.
//!
//! The dialog holds no state of its own: visibility and message belong to
//! the row that opened it, and dismissing only flips that row's flag.

use crate::constants::{DIALOG_SUBMIT, DIALOG_TITLE};
use crate::ui::components::row_component::DialogState;
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct ConfirmDialog;

impl ConfirmDialog {
    fn submit_label() -> String {
        format!("[ {} ]", DIALOG_SUBMIT)
    }

    /// Rect of the submit button for a dialog on `screen`
    pub fn submit_area(screen: Rect) -> Rect {
        let dialog = LayoutManager::dialog_area(screen);
        let inner = Self::inner(dialog);
        let label_width = Self::submit_label().chars().count() as u16;
        let width = label_width.min(inner.width);
        Rect {
            x: inner.x + inner.width.saturating_sub(width + 1),
            y: inner.y + inner.height.saturating_sub(1),
            width,
            height: inner.height.min(1),
        }
    }

    fn inner(dialog: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(dialog)
    }

    /// Draw the dialog when `state` is visible; draws nothing otherwise
    pub fn render(f: &mut Frame, screen: Rect, state: &DialogState) {
        if !state.is_visible() {
            return;
        }

        let dialog = LayoutManager::dialog_area(screen);
        f.render_widget(Clear, dialog);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", DIALOG_TITLE))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::Blue));
        let inner = block.inner(dialog);
        f.render_widget(block, dialog);

        let body = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        f.render_widget(
            Paragraph::new(state.message())
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: true }),
            Rect {
                x: body.x + 1,
                y: body.y + 1.min(body.height),
                width: body.width.saturating_sub(2),
                height: body.height.saturating_sub(1),
            },
        );

        let button = Paragraph::new(Line::from(Span::styled(
            Self::submit_label(),
            Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right);
        f.render_widget(button, Self::submit_area(screen));
    }

    /// Enter submits, Esc is a dismiss request; both close the dialog
    pub fn handle_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::SubmitDialog,
            KeyCode::Esc => Action::DismissDialog,
            _ => Action::None,
        }
    }

    /// Clicking the button submits; clicking outside the dialog dismisses it
    pub fn handle_mouse(mouse: MouseEvent, screen: Rect) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        if LayoutManager::contains(Self::submit_area(screen), mouse.column, mouse.row) {
            Action::SubmitDialog
        } else if !LayoutManager::contains(LayoutManager::dialog_area(screen), mouse.column, mouse.row) {
            Action::DismissDialog
        } else {
            Action::None
        }
    }
}
