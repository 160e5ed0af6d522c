//! curvelist - a filterable, searchable list of curve names.
//!
//! The list shows one row per curve (name and live value), narrows the rows
//! with a substring or wildcard filter, exports selected names by drag and
//! drop, and asks its owner to delete curves through a context menu.
//!
//! # Example
//!
//! ```
//! use curvelist::prelude::*;
//!
//! let mut list = FilterableListWidget::new();
//! for name in ["Alpha", "Beta", "Gamma"] {
//!     list.add_item(name);
//! }
//!
//! list.set_case_sensitive(true);
//! list.set_filter_text("Be");
//! assert_eq!(list.label(), "1 of 3");
//!
//! list.on_wildcard_toggled(true);
//! list.set_case_sensitive(false);
//! list.set_filter_text("A*");
//! assert_eq!(list.label(), "1 of 3");
//! ```

pub mod error;
pub mod filter;
pub mod model;
pub mod prelude;
pub mod settings;
pub mod widget;

pub use error::{CurveListError, Result};
pub use widget::FilterableListWidget;
