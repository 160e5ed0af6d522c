//! Row selection state.
//!
//! Only name cells are selectable, so a selection is a set of row indices.
//! Indices are kept sorted, and are shifted when rows are removed.

use std::collections::BTreeSet;

/// The set of selected rows of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    rows: BTreeSet<usize>,
}

impl RowSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row. Returns true if it was not selected before.
    pub fn select(&mut self, row: usize) -> bool {
        self.rows.insert(row)
    }

    /// Removes a row. Returns true if it was selected.
    pub fn deselect(&mut self, row: usize) -> bool {
        self.rows.remove(&row)
    }

    /// Returns true if the row is selected.
    pub fn is_selected(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selected rows in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    /// Updates indices after `row` was removed from the table.
    pub fn row_removed(&mut self, row: usize) {
        self.rows = self
            .rows
            .iter()
            .filter(|&&selected| selected != row)
            .map(|&selected| if selected > row { selected - 1 } else { selected })
            .collect();
    }
}
