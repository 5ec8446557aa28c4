use crate::config::SwipeConfig;
use crate::ui::components::row_component::RowItem;
use std::collections::HashMap;

/// Row state keyed by row index.
///
/// Rows are built the first time they are asked for (usually when they
/// scroll into view) and kept afterwards, so a row scrolled away and back
/// keeps its swipe position.
#[derive(Debug, Clone)]
pub struct RowStore {
    rows: HashMap<usize, RowItem>,
    row_count: usize,
    swipe_config: SwipeConfig,
}

impl RowStore {
    pub fn new(row_count: usize, swipe_config: SwipeConfig) -> Self {
        Self {
            rows: HashMap::new(),
            row_count,
            swipe_config,
        }
    }

    /// Number of rows in the list, created or not
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of rows whose state exists
    pub fn materialized(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, index: usize) -> Option<&RowItem> {
        self.rows.get(&index)
    }

    /// The row's state, built on first access; `None` past the end of the list
    pub fn get_or_create(&mut self, index: usize) -> Option<&mut RowItem> {
        if index >= self.row_count {
            return None;
        }
        let config = &self.swipe_config;
        Some(self.rows.entry(index).or_insert_with(|| {
            log::debug!("Row {}: state created", index + 1);
            RowItem::new(index, config)
        }))
    }

    /// Lowest-index row whose dialog is showing
    pub fn open_dialog_row(&self) -> Option<usize> {
        self.rows
            .values()
            .filter(|row| row.dialog.is_visible())
            .map(RowItem::index)
            .min()
    }

    /// Advance every row's settle animation; returns whether anything moved
    pub fn tick(&mut self) -> bool {
        let mut moved = false;
        for row in self.rows.values_mut() {
            moved |= row.swipe.tick();
        }
        moved
    }
}
