//! The curve list widget and the toolkit seams it talks through.
//!
//! The widget is headless. A host toolkit feeds it viewport input through
//! [`InputEventFilter`] and supplies the modal pieces (confirmation prompt,
//! context menu, drag loop) as trait objects.

pub mod dialog;
pub mod drag_drop;
pub mod events;
pub mod filterable_list;
pub mod menu;
pub mod settings_panel;

pub use dialog::{ConfirmationPrompt, DefaultButtonPrompt, MessageBox, MessageIcon, StandardButton};
pub use drag_drop::{CancelDrag, DragData, DragExecutor, DragGesture, DropAction, mime};
pub use events::{
    ContextMenuEvent, ContextMenuReason, KeyboardModifiers, MouseButton, MouseButtons,
    MouseMoveEvent, MousePressEvent, Point,
};
pub use filterable_list::FilterableListWidget;
pub use menu::{ContextMenu, DismissMenu, ListAction, MenuAction, MenuPresenter};
pub use settings_panel::{ControlGeometry, SettingsControl, SettingsPanel};

/// Observes mouse events before the viewport that owns them.
///
/// Each method returns `true` to consume the event, or `false` to let the
/// viewport process it as usual. Both default to letting events through.
pub trait InputEventFilter {
    /// Called for a mouse button press on the viewport.
    fn mouse_press(&mut self, _event: &MousePressEvent) -> bool {
        false
    }

    /// Called for pointer movement over the viewport.
    fn mouse_move(&mut self, _event: &MouseMoveEvent) -> bool {
        false
    }
}
