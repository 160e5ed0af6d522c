//! Drag source support for the curve list.
//!
//! Dragging selected rows out of the list exports their names so another
//! widget (a plot area, typically) can pick them up:
//!
//! ```
//! use curvelist::widget::drag_drop::{DragData, mime};
//!
//! let names = vec!["vehicle/speed".to_string(), "vehicle/rpm".to_string()];
//! let data = DragData::from_curve_names(&names);
//! assert!(data.has_format(mime::CURVES_LIST_COPY));
//!
//! // On the drop side:
//! let dropped = data.curve_names().unwrap().unwrap();
//! assert_eq!(dropped, names);
//! ```
//!
//! # Payload format
//!
//! The `curveslist/copy` payload is a sequence of strings, each written as a
//! big-endian `u32` byte length followed by the string's UTF-16BE code units.
//! A length of `0xFFFF_FFFF` denotes a null string and decodes as empty.

use std::collections::HashMap;

use super::events::{KeyboardModifiers, MouseButton, MouseMoveEvent, MousePressEvent, Point};
use crate::error::PayloadError;

/// MIME types used in drag operations.
pub mod mime {
    /// Curve names exported from the curve list.
    pub const CURVES_LIST_COPY: &str = "curveslist/copy";
}

/// Length prefix marking a null string.
const NULL_STRING: u32 = u32::MAX;

/// Drop actions, combinable as flags.
///
/// The source offers a set of actions; the target reports the single one it
/// performed, or [`DropAction::NONE`] when the drag was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DropAction(u8);

impl DropAction {
    /// Nothing was dropped.
    pub const NONE: Self = Self(0);
    /// The target copies the curves.
    pub const COPY: Self = Self(1 << 0);
    /// The target takes the curves over.
    pub const MOVE: Self = Self(1 << 1);

    /// Whether every flag of `other` is set.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether copying is offered or was performed.
    pub fn can_copy(self) -> bool {
        self.contains(Self::COPY)
    }

    /// Whether moving is offered or was performed.
    pub fn can_move(self) -> bool {
        self.contains(Self::MOVE)
    }
}

impl std::ops::BitOr for DropAction {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Payloads of a drag, keyed by MIME type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragData {
    payloads: HashMap<String, Vec<u8>>,
}

impl DragData {
    /// An empty drag.
    pub fn new() -> Self {
        Self::default()
    }

    /// A drag carrying `names` under `curveslist/copy`.
    pub fn from_curve_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut data = Self::new();
        data.set_data(mime::CURVES_LIST_COPY, encode_curve_names(names));
        data
    }

    /// Whether no payload is attached.
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// MIME types of the attached payloads, in no particular order.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.payloads.keys().map(String::as_str)
    }

    /// Whether a payload of this type is attached.
    pub fn has_format(&self, mime_type: &str) -> bool {
        self.payloads.contains_key(mime_type)
    }

    /// The raw payload of a type.
    pub fn get_data(&self, mime_type: &str) -> Option<&[u8]> {
        self.payloads.get(mime_type).map(Vec::as_slice)
    }

    /// Attaches or replaces a raw payload.
    pub fn set_data(&mut self, mime_type: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.payloads.insert(mime_type.into(), bytes.into());
    }

    /// Decodes the curve names, if the `curveslist/copy` format is present.
    pub fn curve_names(&self) -> Option<Result<Vec<String>, PayloadError>> {
        self.get_data(mime::CURVES_LIST_COPY)
            .map(decode_curve_names)
    }
}

/// Serializes curve names into the `curveslist/copy` wire format.
pub fn encode_curve_names<S: AsRef<str>>(names: &[S]) -> Vec<u8> {
    let mut out = Vec::new();
    for name in names {
        let units: Vec<u16> = name.as_ref().encode_utf16().collect();
        let byte_len = (units.len() * 2) as u32;
        out.extend_from_slice(&byte_len.to_be_bytes());
        for unit in units {
            out.extend_from_slice(&unit.to_be_bytes());
        }
    }
    out
}

/// Parses a `curveslist/copy` payload back into curve names.
pub fn decode_curve_names(bytes: &[u8]) -> Result<Vec<String>, PayloadError> {
    let mut names = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let header = bytes
            .get(offset..offset + 4)
            .ok_or_else(|| PayloadError::Truncated {
                offset,
                needed: offset + 4 - bytes.len(),
            })?;
        let length = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);

        if length == NULL_STRING {
            names.push(String::new());
            offset += 4;
            continue;
        }
        if length % 2 != 0 {
            return Err(PayloadError::OddLength { offset, length });
        }

        let start = offset + 4;
        let end = start + length as usize;
        let body = bytes
            .get(start..end)
            .ok_or_else(|| PayloadError::Truncated {
                offset,
                needed: end - bytes.len(),
            })?;

        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        let name = String::from_utf16(&units).map_err(|_| PayloadError::InvalidUtf16 { offset })?;
        names.push(name);
        offset = end;
    }

    Ok(names)
}

/// Hands a prepared drag to the windowing system.
///
/// `exec` runs the drag to completion (blocking, like a modal loop) and
/// returns the action the drop target performed, or [`DropAction::NONE`] if
/// the drag was cancelled.
pub trait DragExecutor: Send {
    /// Runs a drag with the given data and supported actions.
    fn exec(&mut self, data: DragData, supported_actions: DropAction) -> DropAction;
}

/// A [`DragExecutor`] for headless use: every drag is cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct CancelDrag;

impl DragExecutor for CancelDrag {
    fn exec(&mut self, _data: DragData, _supported_actions: DropAction) -> DropAction {
        DropAction::NONE
    }
}

/// Tracks press position and decides when a mouse gesture becomes a drag.
#[derive(Debug, Clone, Copy)]
pub struct DragGesture {
    /// Position of the last plain left press.
    start_position: Point,
    /// Minimum Manhattan distance before a drag starts.
    drag_distance: f32,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DRAG_DISTANCE)
    }
}

impl DragGesture {
    /// Default start-drag distance in pixels.
    pub const DEFAULT_DRAG_DISTANCE: f32 = 10.0;

    /// Creates a tracker with the given threshold.
    pub fn new(drag_distance: f32) -> Self {
        Self {
            start_position: Point::ZERO,
            drag_distance,
        }
    }

    /// The current threshold.
    pub fn drag_distance(&self) -> f32 {
        self.drag_distance
    }

    /// Sets the threshold.
    pub fn set_drag_distance(&mut self, drag_distance: f32) {
        self.drag_distance = drag_distance;
    }

    /// Position recorded by the last plain left press.
    pub fn start_position(&self) -> Point {
        self.start_position
    }

    /// Handles a press. Returns true if the press position was recorded.
    ///
    /// Only a left press records a position. A left press with exactly the
    /// Control modifier is reserved for a future multi-curve gesture and
    /// currently does nothing.
    pub fn press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        if event.modifiers == KeyboardModifiers::CTRL {
            return false;
        }
        self.start_position = event.pos;
        true
    }

    /// Returns true if this move should start a drag.
    ///
    /// The left button must be the only button held and the pointer must
    /// have travelled at least the threshold from the recorded press.
    pub fn should_start(&self, event: &MouseMoveEvent) -> bool {
        let distance = (event.pos - self.start_position).manhattan_length();
        event.buttons.is_only(MouseButton::Left) && distance >= self.drag_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::events::MouseButtons;

    #[test]
    fn test_offered_actions() {
        let offered = DropAction::COPY | DropAction::MOVE;
        assert!(offered.can_copy() && offered.can_move());
        assert!(!DropAction::NONE.can_copy());
        assert!(offered.contains(DropAction::NONE));
    }

    #[test]
    fn test_payload_layout() {
        let bytes = encode_curve_names(&["Ab"]);
        assert_eq!(bytes, vec![0, 0, 0, 4, 0, b'A', 0, b'b']);
    }

    #[test]
    fn test_payload_non_ascii_names() {
        let names = vec!["temp/°C".to_string(), "ε/𝔼".to_string(), String::new()];
        let decoded = decode_curve_names(&encode_curve_names(&names)).unwrap();
        assert_eq!(decoded, names);
    }

    #[test]
    fn test_payload_null_string() {
        let decoded = decode_curve_names(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(decoded, vec![String::new()]);
    }

    #[test]
    fn test_payload_errors() {
        assert_eq!(
            decode_curve_names(&[0, 0]),
            Err(PayloadError::Truncated { offset: 0, needed: 2 })
        );
        assert_eq!(
            decode_curve_names(&[0, 0, 0, 3, 0, 0, 0]),
            Err(PayloadError::OddLength { offset: 0, length: 3 })
        );
        assert_eq!(
            decode_curve_names(&[0, 0, 0, 4, 0, b'A']),
            Err(PayloadError::Truncated { offset: 0, needed: 2 })
        );
        // Lone high surrogate.
        assert_eq!(
            decode_curve_names(&[0, 0, 0, 2, 0xD8, 0x00]),
            Err(PayloadError::InvalidUtf16 { offset: 0 })
        );
    }

    #[test]
    fn test_drag_data_formats() {
        let data = DragData::from_curve_names(&["x"]);
        assert!(!data.is_empty());
        assert_eq!(data.formats().collect::<Vec<_>>(), vec![mime::CURVES_LIST_COPY]);
        assert!(DragData::new().curve_names().is_none());

        let mut raw = DragData::new();
        raw.set_data(mime::CURVES_LIST_COPY, vec![0, 0, 0, 1]);
        assert!(matches!(raw.curve_names(), Some(Err(PayloadError::OddLength { .. }))));
    }

    #[test]
    fn test_gesture_threshold_is_manhattan() {
        let mut gesture = DragGesture::default();
        let press = MousePressEvent::new(MouseButton::Left, Point::new(10.0, 10.0), KeyboardModifiers::NONE);
        assert!(gesture.press(&press));

        let near = MouseMoveEvent::new(Point::new(14.0, 15.0), MouseButtons::LEFT, KeyboardModifiers::NONE);
        assert!(!gesture.should_start(&near));

        let far = MouseMoveEvent::new(Point::new(15.0, 15.0), MouseButtons::LEFT, KeyboardModifiers::NONE);
        assert!(gesture.should_start(&far));

        let two_buttons = MouseMoveEvent::new(
            Point::new(40.0, 40.0),
            MouseButtons::LEFT | MouseButtons::RIGHT,
            KeyboardModifiers::NONE,
        );
        assert!(!gesture.should_start(&two_buttons));
    }

    #[test]
    fn test_ctrl_press_keeps_previous_position() {
        let mut gesture = DragGesture::new(4.0);
        gesture.press(&MousePressEvent::new(MouseButton::Left, Point::new(5.0, 5.0), KeyboardModifiers::NONE));
        let ctrl = MousePressEvent::new(MouseButton::Left, Point::new(50.0, 50.0), KeyboardModifiers::CTRL);
        assert!(!gesture.press(&ctrl));
        assert_eq!(gesture.start_position(), Point::new(5.0, 5.0));

        let right = MousePressEvent::new(MouseButton::Right, Point::new(1.0, 1.0), KeyboardModifiers::NONE);
        assert!(!gesture.press(&right));
    }
}
