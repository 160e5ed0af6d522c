//! Data model for the curve list: cells, rows, selection.

pub mod item;
pub mod selection;
pub mod table;

pub use item::{CellFont, CurveItem, HorizontalAlignment, ItemFlags, VALUE_PLACEHOLDER, ValueCell};
pub use selection::RowSelection;
pub use table::{COLUMN_COUNT, CurveRow, CurveTable, FilterOutcome, NAME_COLUMN, VALUE_COLUMN};
