//! Scrollable list of swipeable rows.
//!
//! The component turns mouse and keyboard input into [`Action`]s and applies
//! them to the [`RowStore`]. Only rows inside the viewport are drawn, and
//! their state is created the first time they become visible.
//!
//! # Input
//! - Mouse: press on a card starts a drag, dragging moves it, release settles
//!   it. A press and release without movement is a tap on whatever icon is
//!   uncovered under the pointer. The wheel scrolls.
//! - Keyboard: `j`/`k` (or arrows) select, `h`/`l` (or arrows) swipe the
//!   selected row one anchor, `e`/`d`/Enter activate the uncovered icon,
//!   `i` cycles the icon theme.

use crate::config::Config;
use crate::constants::ROW_HEIGHT;
use crate::icons::IconService;
use crate::swipe::SwipeDirection;
use crate::ui::components::row_component::{DialogState, RowAction, RowItem};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component, RowStore};
use crate::ui::layout::{LayoutManager, ROW_SLOT};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

/// The drag currently in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveDrag {
    row: usize,
    start_column: u16,
    moved: bool,
}

pub struct SwipeListComponent {
    store: RowStore,
    selected: usize,
    scroll_offset: usize,
    viewport: Rect,
    active_drag: Option<ActiveDrag>,
    icons: IconService,
    scrollbar: ScrollbarHelper,
    reset_after_dialog: bool,
}

impl SwipeListComponent {
    pub fn new(config: &Config) -> Self {
        Self {
            store: RowStore::new(config.ui.row_count, config.swipe.clone()),
            selected: 0,
            scroll_offset: 0,
            viewport: Rect::default(),
            active_drag: None,
            icons: IconService::new(config.ui.icon_theme),
            scrollbar: ScrollbarHelper::new(),
            reset_after_dialog: config.swipe.reset_after_dialog,
        }
    }

    pub fn row_count(&self) -> usize {
        self.store.row_count()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn row(&self, index: usize) -> Option<&RowItem> {
        self.store.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut RowItem> {
        self.store.get_or_create(index)
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn is_dragging(&self) -> bool {
        self.active_drag.is_some()
    }

    /// Set the area the list occupies; `render` does this every frame
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        self.clamp_scroll();
    }

    /// Dialog of the row that currently has one open
    pub fn open_dialog(&self) -> Option<&DialogState> {
        let index = self.store.open_dialog_row()?;
        self.store.get(index).map(|row| &row.dialog)
    }

    /// Advance settle animations; returns whether a redraw is needed
    pub fn tick(&mut self) -> bool {
        self.store.tick()
    }

    fn areas(&self) -> (Rect, Option<Rect>) {
        let content = LayoutManager::list_content(self.viewport);
        ScrollbarHelper::calculate_areas(content, LayoutManager::content_height(self.row_count()))
    }

    fn visible_count(&self) -> usize {
        let (rows_area, _) = self.areas();
        LayoutManager::visible_rows(rows_area.height)
    }

    fn max_scroll(&self) -> usize {
        self.row_count().saturating_sub(self.visible_count().max(1))
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn ensure_selected_visible(&mut self) {
        let visible = self.visible_count().max(1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible {
            self.scroll_offset = self.selected + 1 - visible;
        }
        self.clamp_scroll();
    }

    /// Screen rect of a row, when it is inside the viewport
    pub fn row_area(&self, index: usize) -> Option<Rect> {
        if index < self.scroll_offset || index >= self.row_count() {
            return None;
        }
        let slot = index - self.scroll_offset;
        if slot >= self.visible_count() {
            return None;
        }
        let (rows_area, _) = self.areas();
        Some(Rect {
            x: rows_area.x,
            y: rows_area.y + slot as u16 * ROW_SLOT,
            width: rows_area.width,
            height: ROW_HEIGHT,
        })
    }

    /// Row under a terminal cell; the gaps between rows belong to none
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let (rows_area, _) = self.areas();
        if !LayoutManager::contains(rows_area, column, row) {
            return None;
        }
        let rel = row - rows_area.y;
        if rel % ROW_SLOT >= ROW_HEIGHT {
            return None;
        }
        let slot = usize::from(rel / ROW_SLOT);
        if slot >= self.visible_count() {
            return None;
        }
        let index = self.scroll_offset + slot;
        (index < self.row_count()).then_some(index)
    }

    fn select(&mut self, index: usize) {
        if self.row_count() == 0 {
            return;
        }
        self.selected = index.min(self.row_count() - 1);
        self.ensure_selected_visible();
    }

    fn start_drag(&mut self, row: usize, column: u16) {
        if let Some(previous) = self.active_drag.take() {
            if let Some(item) = self.store.get_or_create(previous.row) {
                item.swipe.cancel_drag();
            }
        }
        let Some(item) = self.store.get_or_create(row) else {
            return;
        };
        item.swipe.drag_start();
        self.active_drag = Some(ActiveDrag {
            row,
            start_column: column,
            moved: false,
        });
        self.select(row);
    }

    fn move_drag(&mut self, column: u16) {
        let Some(drag) = self.active_drag.as_mut() else {
            return;
        };
        drag.moved |= column != drag.start_column;
        let delta = f32::from(column) - f32::from(drag.start_column);
        let row = drag.row;
        if let Some(item) = self.store.get_or_create(row) {
            item.swipe.drag_move(delta);
        }
    }

    fn end_drag(&mut self, column: u16) {
        let Some(drag) = self.active_drag.take() else {
            return;
        };
        let is_tap = !drag.moved && column == drag.start_column;
        let area = self.row_area(drag.row);
        let Some(item) = self.store.get_or_create(drag.row) else {
            return;
        };

        if is_tap {
            item.swipe.cancel_drag();
            if let Some(area) = area {
                item.tap_at(column, area);
            }
        } else {
            item.swipe.drag_move(f32::from(column) - f32::from(drag.start_column));
            let anchor = item.swipe.drag_end();
            log::info!("Row {}: settled on {:?}", drag.row + 1, anchor);
        }
    }

    /// Settle a held drag where the pointer last was
    fn release_drag(&mut self) {
        let Some(drag) = self.active_drag.take() else {
            return;
        };
        if let Some(item) = self.store.get_or_create(drag.row) {
            let anchor = item.swipe.drag_end();
            log::info!("Row {}: drag released early, settled on {:?}", drag.row + 1, anchor);
        }
    }

    fn close_dialog(&mut self, submitted: bool) {
        let Some(index) = self.store.open_dialog_row() else {
            return;
        };
        let reset = submitted && self.reset_after_dialog;
        if let Some(item) = self.store.get_or_create(index) {
            item.dialog.dismiss();
            if reset {
                item.swipe.reset();
            }
            log::info!(
                "Row {}: dialog {}",
                index + 1,
                if submitted { "submitted" } else { "dismissed" }
            );
        }
    }

    /// Keyboard shortcut for an icon; only uncovered icons respond
    fn tap_selected(&self, wanted: Option<RowAction>) -> Action {
        let revealed = self.store.get(self.selected).and_then(RowItem::revealed_action);
        match (revealed, wanted) {
            (Some(action), None) => Action::Tap {
                row: self.selected,
                action,
            },
            (Some(action), Some(wanted)) if action == wanted => Action::Tap {
                row: self.selected,
                action,
            },
            _ => Action::None,
        }
    }
}

impl Component for SwipeListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
            KeyCode::Char('k') | KeyCode::Up => Action::SelectPrevious,
            KeyCode::Char('h') | KeyCode::Left => Action::Swipe {
                row: self.selected,
                direction: SwipeDirection::Left,
            },
            KeyCode::Char('l') | KeyCode::Right => Action::Swipe {
                row: self.selected,
                direction: SwipeDirection::Right,
            },
            KeyCode::Char('e') => self.tap_selected(Some(RowAction::Edit)),
            KeyCode::Char('d') => self.tap_selected(Some(RowAction::Delete)),
            KeyCode::Enter => self.tap_selected(None),
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match self.row_at(mouse.column, mouse.row) {
                Some(row) => Action::DragStart {
                    row,
                    column: mouse.column,
                },
                None => Action::None,
            },
            MouseEventKind::Drag(MouseButton::Left) if self.active_drag.is_some() => Action::DragMove {
                column: mouse.column,
            },
            MouseEventKind::Up(MouseButton::Left) if self.active_drag.is_some() => Action::DragEnd {
                column: mouse.column,
            },
            MouseEventKind::ScrollUp => Action::ScrollUp,
            MouseEventKind::ScrollDown => Action::ScrollDown,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectNext => self.select(self.selected.saturating_add(1)),
            Action::SelectPrevious => self.select(self.selected.saturating_sub(1)),
            Action::ScrollUp => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            Action::ScrollDown => {
                self.scroll_offset += 1;
                self.clamp_scroll();
            }
            Action::Swipe { row, direction } => {
                if let Some(item) = self.store.get_or_create(row) {
                    let anchor = item.swipe.swipe(direction);
                    log::info!("Row {}: swiped {:?}, settled on {:?}", row + 1, direction, anchor);
                    self.select(row);
                }
            }
            Action::DragStart { row, column } => self.start_drag(row, column),
            Action::DragMove { column } => self.move_drag(column),
            Action::DragEnd { column } => self.end_drag(column),
            Action::Tap { row, action } => {
                // The dialog takes the mouse, so a drag still held would never see its release
                self.release_drag();
                if let Some(item) = self.store.get_or_create(row) {
                    item.tap(action);
                }
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                log::info!("Icon theme: {:?}", self.icons.theme());
            }
            Action::SubmitDialog => self.close_dialog(true),
            Action::DismissDialog => self.close_dialog(false),
            other => return other,
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.set_viewport(rect);

        let (_, scrollbar_area) = self.areas();
        let visible = self.visible_count();
        let rows: Vec<(usize, Rect)> = (self.scroll_offset..self.row_count())
            .take(visible)
            .filter_map(|index| self.row_area(index).map(|area| (index, area)))
            .collect();

        for (index, area) in rows {
            let selected = index == self.selected;
            if let Some(item) = self.store.get_or_create(index) {
                item.render(f, area, selected, &self.icons);
            }
        }

        self.scrollbar.update_state(self.row_count(), self.scroll_offset, visible);
        self.scrollbar.render(f, scrollbar_area);
    }
}
