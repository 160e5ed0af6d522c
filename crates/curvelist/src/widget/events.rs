//! Input event types delivered to the curve list.
//!
//! The host toolkit translates its native events into these types and feeds
//! them to an [`InputEventFilter`](super::InputEventFilter), typically the
//! list widget itself installed on the table's viewport.

use std::ops::Sub;

/// A point in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute coordinates (taxicab length).
    pub fn manhattan_length(self) -> f32 {
        self.x.abs() + self.y.abs()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Modifier keys held while a mouse event happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    /// Shift.
    pub shift: bool,
    /// Control (Command on macOS).
    pub control: bool,
    /// Alt (Option on macOS).
    pub alt: bool,
    /// Meta / Super.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Whether at least one modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Whether no modifier is held.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button; presses with it may start a drag.
    Left,
    /// Right button.
    Right,
    /// Middle button.
    Middle,
}

/// Set of mouse buttons held during a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MouseButtons(u8);

impl MouseButtons {
    /// No buttons held.
    pub const NONE: Self = Self(0);
    /// Left button only.
    pub const LEFT: Self = Self(1 << 0);
    /// Right button only.
    pub const RIGHT: Self = Self(1 << 1);
    /// Middle button only.
    pub const MIDDLE: Self = Self(1 << 2);

    /// Returns true if `button` is held.
    pub fn contains(self, button: MouseButton) -> bool {
        (self.0 & Self::from(button).0) != 0
    }

    /// Returns true if `button` is the only button held.
    pub fn is_only(self, button: MouseButton) -> bool {
        self == Self::from(button)
    }
}

impl From<MouseButton> for MouseButtons {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LEFT,
            MouseButton::Right => Self::RIGHT,
            MouseButton::Middle => Self::MIDDLE,
        }
    }
}

impl std::ops::BitOr for MouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MousePressEvent {
    /// Button that went down.
    pub button: MouseButton,
    /// Position in viewport-local coordinates.
    pub pos: Point,
    /// Modifiers held.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Creates a press event.
    pub fn new(button: MouseButton, pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            button,
            pos,
            modifiers,
        }
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoveEvent {
    /// Position in viewport-local coordinates.
    pub pos: Point,
    /// Buttons held during the move.
    pub buttons: MouseButtons,
    /// Modifiers held.
    pub modifiers: KeyboardModifiers,
}

impl MouseMoveEvent {
    /// Creates a move event.
    pub fn new(pos: Point, buttons: MouseButtons, modifiers: KeyboardModifiers) -> Self {
        Self {
            pos,
            buttons,
            modifiers,
        }
    }
}

/// What opened a context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextMenuReason {
    /// A right click.
    #[default]
    Mouse,
    /// The Menu key.
    Keyboard,
    /// Anything else.
    Other,
}

/// Context menu request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMenuEvent {
    /// Position inside the table.
    pub pos: Point,
    /// Position in global screen coordinates, where the menu opens.
    pub global_pos: Point,
    /// What triggered the request.
    pub reason: ContextMenuReason,
}

impl ContextMenuEvent {
    /// A request made by right-clicking at `pos`.
    pub fn from_mouse(pos: Point, global_pos: Point) -> Self {
        Self {
            pos,
            global_pos,
            reason: ContextMenuReason::Mouse,
        }
    }
}
