//! Prelude module for curvelist.
//!
//! ```ignore
//! use curvelist::prelude::*;
//! ```

// ============================================================================
// Signals
// ============================================================================

pub use curvelist_core::{ConnectionGuard, ConnectionId, Property, Signal};

// ============================================================================
// Widget
// ============================================================================

pub use crate::widget::{
    ConfirmationPrompt, ContextMenuEvent, DragData, DragExecutor, DropAction,
    FilterableListWidget, InputEventFilter, KeyboardModifiers, ListAction, MenuPresenter,
    MessageBox, MouseButton, MouseButtons, MouseMoveEvent, MousePressEvent, Point,
    StandardButton,
};

// ============================================================================
// Filtering, model and settings
// ============================================================================

pub use crate::error::CurveListError;
pub use crate::filter::{FilterState, MatchMode};
pub use crate::model::{CurveTable, FilterOutcome};
pub use crate::settings::FilterSettings;
