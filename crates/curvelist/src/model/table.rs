//! Two-column curve table.
//!
//! [`CurveTable`] stores rows in insertion order. Column 0 holds the curve
//! name, column 1 the live value. Each row carries a hidden flag that the
//! filter engine recomputes; it is never an independent source of truth.
//!
//! # Example
//!
//! ```
//! use curvelist::filter::{FilterState, MatchMode};
//! use curvelist::model::CurveTable;
//!
//! let mut table = CurveTable::new();
//! table.append_row("Alpha");
//! table.append_row("Beta");
//!
//! let outcome = table.apply_filter(&FilterState::new(MatchMode::Contains, true, "Be").matcher());
//! assert_eq!((outcome.visible, outcome.total), (1, 2));
//! assert!(table.is_row_hidden(0));
//! ```

use curvelist_core::logging::targets;

use super::item::{CurveItem, ValueCell};
use super::selection::RowSelection;
use crate::filter::RowMatcher;

/// Index of the name column.
pub const NAME_COLUMN: usize = 0;
/// Index of the value column.
pub const VALUE_COLUMN: usize = 1;
/// Number of columns in a curve table.
pub const COLUMN_COUNT: usize = 2;

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveRow {
    item: CurveItem,
    value: ValueCell,
    hidden: bool,
}

impl CurveRow {
    fn new(item: CurveItem) -> Self {
        Self {
            item,
            value: ValueCell::placeholder(),
            hidden: false,
        }
    }

    /// The name cell.
    pub fn item(&self) -> &CurveItem {
        &self.item
    }

    /// The curve name.
    pub fn name(&self) -> &str {
        self.item.text()
    }

    /// The value cell.
    pub fn value(&self) -> &ValueCell {
        &self.value
    }

    /// Whether the filter currently hides this row.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Result of one filter pass over a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    /// Rows left visible.
    pub visible: usize,
    /// Total rows, hidden ones included.
    pub total: usize,
    /// Rows whose hidden flag flipped during the pass.
    pub flipped: usize,
}

impl FilterOutcome {
    /// Rows hidden after the pass.
    pub fn hidden(&self) -> usize {
        self.total - self.visible
    }

    /// Whether any row's visibility changed.
    pub fn changed(&self) -> bool {
        self.flipped > 0
    }
}

/// Row storage, visibility and selection for the curve list.
#[derive(Debug, Clone, Default)]
pub struct CurveTable {
    rows: Vec<CurveRow>,
    selection: RowSelection,
    hidden_columns: [bool; COLUMN_COUNT],
}

impl CurveTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Returns the number of rows, hidden ones included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a row and returns its index.
    ///
    /// New rows start visible; they are not filtered until the next pass.
    pub fn append_row(&mut self, item: impl Into<CurveItem>) -> usize {
        let row = self.rows.len();
        self.rows.push(CurveRow::new(item.into()));
        tracing::trace!(target: targets::TABLE, row, "row appended");
        row
    }

    /// Removes a row and returns it. Selection indices are shifted.
    pub fn remove_row(&mut self, row: usize) -> Option<CurveRow> {
        if row >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(row);
        self.selection.row_removed(row);
        tracing::trace!(target: targets::TABLE, row, name = removed.name(), "row removed");
        Some(removed)
    }

    /// Removes every row and the selection.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.selection.clear();
    }

    /// Gets a row.
    pub fn row(&self, row: usize) -> Option<&CurveRow> {
        self.rows.get(row)
    }

    /// Iterates over all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &CurveRow> {
        self.rows.iter()
    }

    /// Gets the name cell of a row.
    pub fn item(&self, row: usize) -> Option<&CurveItem> {
        self.rows.get(row).map(CurveRow::item)
    }

    /// Gets the value cell of a row.
    pub fn value(&self, row: usize) -> Option<&ValueCell> {
        self.rows.get(row).map(CurveRow::value)
    }

    /// Sets the value text of a row. Returns false if the row does not exist.
    pub fn set_value_text(&mut self, row: usize, text: impl Into<String>) -> bool {
        match self.rows.get_mut(row) {
            Some(entry) => {
                entry.value.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Returns every row whose name equals `text` exactly, in ascending order.
    ///
    /// Only the name column is searched.
    pub fn find_rows(&self, text: &str) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.name() == text)
            .map(|(row, _)| row)
            .collect()
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Returns true if the row is hidden (or does not exist).
    pub fn is_row_hidden(&self, row: usize) -> bool {
        self.rows.get(row).map(CurveRow::is_hidden).unwrap_or(true)
    }

    /// Hides or shows a row. Returns true if the flag changed.
    pub fn set_row_hidden(&mut self, row: usize, hidden: bool) -> bool {
        match self.rows.get_mut(row) {
            Some(entry) if entry.hidden != hidden => {
                entry.hidden = hidden;
                true
            }
            _ => false,
        }
    }

    /// Counts rows that are not hidden.
    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|entry| !entry.hidden).count()
    }

    /// Recomputes every row's hidden flag from `matcher`.
    pub fn apply_filter(&mut self, matcher: &RowMatcher) -> FilterOutcome {
        let mut outcome = FilterOutcome {
            total: self.rows.len(),
            ..FilterOutcome::default()
        };

        for entry in &mut self.rows {
            let hide = matcher.hides(entry.item.text());
            if !hide {
                outcome.visible += 1;
            }
            if hide != entry.hidden {
                outcome.flipped += 1;
            }
            entry.hidden = hide;
        }

        outcome
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Hides a column. Out-of-range columns are ignored.
    pub fn hide_column(&mut self, column: usize) {
        if let Some(hidden) = self.hidden_columns.get_mut(column) {
            *hidden = true;
        }
    }

    /// Shows a column. Out-of-range columns are ignored.
    pub fn show_column(&mut self, column: usize) {
        if let Some(hidden) = self.hidden_columns.get_mut(column) {
            *hidden = false;
        }
    }

    /// Returns true if the column is hidden.
    pub fn is_column_hidden(&self, column: usize) -> bool {
        self.hidden_columns.get(column).copied().unwrap_or(true)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Gets the selection.
    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    /// Selects a row. Returns false for out-of-range rows.
    pub fn select_row(&mut self, row: usize) -> bool {
        if row >= self.rows.len() {
            return false;
        }
        self.selection.select(row);
        true
    }

    /// Deselects a row. Returns true if it was selected.
    pub fn deselect_row(&mut self, row: usize) -> bool {
        self.selection.deselect(row)
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Name cells of the selected rows, in row order.
    pub fn selected_items(&self) -> Vec<&CurveItem> {
        self.selection
            .rows()
            .filter_map(|row| self.item(row))
            .collect()
    }

    /// Names of the selected rows, in row order.
    pub fn selected_names(&self) -> Vec<String> {
        self.selected_items()
            .into_iter()
            .map(|item| item.text().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterState, MatchMode};

    fn table(names: &[&str]) -> CurveTable {
        let mut table = CurveTable::new();
        for name in names {
            table.append_row(*name);
        }
        table
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let table = table(&["b", "a", "c"]);
        let names: Vec<&str> = table.rows().map(CurveRow::name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!(table.value(1).is_some_and(ValueCell::is_placeholder));
    }

    #[test]
    fn test_find_rows_supports_duplicates() {
        let table = table(&["speed", "rpm", "speed", "speed/avg"]);
        assert_eq!(table.find_rows("speed"), vec![0, 2]);
        assert!(table.find_rows("spe").is_empty());
        assert!(table.find_rows("-").is_empty());
    }

    #[test]
    fn test_apply_filter_counts_flips() {
        let mut table = table(&["Alpha", "Beta", "Gamma"]);
        let matcher = FilterState::new(MatchMode::Contains, true, "Be").matcher();

        let outcome = table.apply_filter(&matcher);
        assert_eq!(outcome.visible, 1);
        assert_eq!(outcome.hidden(), 2);
        assert_eq!(outcome.flipped, 2);

        let again = table.apply_filter(&matcher);
        assert!(!again.changed());
        assert_eq!(again.visible + again.hidden(), table.row_count());
    }

    #[test]
    fn test_remove_row_shifts_selection() {
        let mut table = table(&["a", "b", "c"]);
        table.select_row(0);
        table.select_row(2);
        let removed = table.remove_row(0);
        assert_eq!(removed.map(|r| r.name().to_string()), Some("a".to_string()));
        assert_eq!(table.selected_names(), vec!["c".to_string()]);
        assert!(table.remove_row(10).is_none());
    }

    #[test]
    fn test_columns() {
        let mut table = CurveTable::new();
        assert!(!table.is_column_hidden(VALUE_COLUMN));
        table.hide_column(VALUE_COLUMN);
        assert!(table.is_column_hidden(VALUE_COLUMN));
        assert!(!table.is_column_hidden(NAME_COLUMN));
        table.show_column(VALUE_COLUMN);
        assert!(!table.is_column_hidden(VALUE_COLUMN));
        table.hide_column(7);
    }

    #[test]
    fn test_clear() {
        let mut table = table(&["a", "b"]);
        table.select_row(1);
        table.clear();
        assert_eq!(table.row_count(), 0);
        assert!(table.selection().is_empty());
        assert!(!table.select_row(0));
    }
}
