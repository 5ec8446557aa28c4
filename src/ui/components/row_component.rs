//! One list row: an action layer with the edit and delete icons, and a card
//! on top that slides horizontally with the row's [`SwipeState`].
//!
//! Each row owns its gesture state and its dialog state; nothing is shared
//! between rows.

use crate::config::SwipeConfig;
use crate::constants::ROW_LABEL_PREFIX;
use crate::icons::IconService;
use crate::swipe::{Anchor, SwipeState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Identity of a row; the list is static so this is all there is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowModel {
    pub index: usize,
}

impl RowModel {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Card text, a pure function of the index
    pub fn label(&self) -> String {
        format!("{} {}", ROW_LABEL_PREFIX, self.index + 1)
    }
}

/// The two icons under the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub fn verb(self) -> &'static str {
        match self {
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }

    /// Confirmation text for this action on row `index`
    pub fn message_for(self, index: usize) -> String {
        format!("Do you want to {} item {}", self.verb(), index + 1)
    }

    /// The anchor that uncovers this action's icon
    pub fn revealed_by(self) -> Anchor {
        match self {
            RowAction::Edit => Anchor::RevealedRight,
            RowAction::Delete => Anchor::RevealedLeft,
        }
    }
}

/// Visibility and text of a row's confirmation dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    visible: bool,
    message: String,
}

impl DialogState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Show the dialog; an empty message leaves it hidden
    pub fn open(&mut self, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            return;
        }
        self.message = message;
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

/// A row's full state
#[derive(Debug, Clone)]
pub struct RowItem {
    pub model: RowModel,
    pub swipe: SwipeState,
    pub dialog: DialogState,
}

impl RowItem {
    pub fn new(index: usize, config: &SwipeConfig) -> Self {
        Self {
            model: RowModel::new(index),
            swipe: SwipeState::from_config(config),
            dialog: DialogState::default(),
        }
    }

    pub fn index(&self) -> usize {
        self.model.index
    }

    /// The action whose icon the settled card uncovers
    pub fn revealed_action(&self) -> Option<RowAction> {
        if self.swipe.is_dragging() {
            return None;
        }
        match self.swipe.anchor() {
            Anchor::Closed => None,
            Anchor::RevealedRight => Some(RowAction::Edit),
            Anchor::RevealedLeft => Some(RowAction::Delete),
        }
    }

    /// Open the confirmation dialog for an action
    pub fn tap(&mut self, action: RowAction) {
        let message = action.message_for(self.model.index);
        log::info!("Row {}: {} tapped", self.model.index + 1, action.verb());
        self.dialog.open(message);
    }

    /// Which icon, if any, is uncovered at `column` of a row drawn in `area`
    pub fn action_at(&self, column: u16, area: Rect) -> Option<RowAction> {
        if column < area.x || column >= area.x + area.width {
            return None;
        }
        let shift = self.card_shift();
        let rel = i32::from(column - area.x);
        let width = i32::from(area.width);
        // Only the columns that hold a drawn icon count
        let reach = shift.abs().min(i32::from(self.action_width(area)));

        if shift > 0 && rel < reach {
            Some(RowAction::Edit)
        } else if shift < 0 && rel >= width - reach {
            Some(RowAction::Delete)
        } else {
            None
        }
    }

    /// Tap whatever is uncovered at `column`; returns the tapped action
    pub fn tap_at(&mut self, column: u16, area: Rect) -> Option<RowAction> {
        let action = self.action_at(column, area)?;
        self.tap(action);
        Some(action)
    }

    /// Columns each icon area takes in a row drawn in `area`
    fn action_width(&self, area: Rect) -> u16 {
        (self.swipe.width().round() as u16).min(area.width / 2)
    }

    /// Card displacement in whole columns
    fn card_shift(&self) -> i32 {
        self.swipe.offset().round() as i32
    }

    /// Draw the action layer and the card on top of it
    pub fn render(&self, f: &mut Frame, area: Rect, selected: bool, icons: &IconService) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        self.render_actions(f, area, icons);

        let shift = self.card_shift().clamp(-i32::from(area.width), i32::from(area.width));
        let visible_width = area.width.saturating_sub(shift.unsigned_abs() as u16);
        if visible_width == 0 {
            return;
        }
        let card_area = Rect {
            x: if shift > 0 { area.x + shift as u16 } else { area.x },
            width: visible_width,
            ..area
        };

        let border_color = if selected { Color::Yellow } else { Color::Blue };
        let label_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue)
        };

        let card = Paragraph::new(Line::from(self.model.label()))
            .style(label_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color)),
            );

        f.render_widget(Clear, card_area);
        f.render_widget(card, card_area);
    }

    fn render_actions(&self, f: &mut Frame, area: Rect, icons: &IconService) {
        let background = Block::default().style(Style::default().bg(Color::Blue));
        f.render_widget(background, area);

        let action_width = self.action_width(area);
        if action_width == 0 {
            return;
        }
        let middle = area.y + area.height / 2;
        let icon_style = Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD);

        let edit_area = Rect::new(area.x, middle, action_width, 1);
        let delete_area = Rect::new(area.x + area.width - action_width, middle, action_width, 1);

        f.render_widget(
            Paragraph::new(icons.edit()).style(icon_style).alignment(Alignment::Center),
            edit_area,
        );
        f.render_widget(
            Paragraph::new(icons.delete()).style(icon_style).alignment(Alignment::Center),
            delete_area,
        );
    }
}
