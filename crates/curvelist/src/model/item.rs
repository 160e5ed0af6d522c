//! Cell types held by a [`CurveTable`](super::CurveTable) row.

/// Placeholder shown in a value cell until a live value arrives.
pub const VALUE_PLACEHOLDER: &str = "-";

/// Interaction flags for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ItemFlags {
    /// Cell can be selected.
    pub selectable: bool,
    /// Cell can be edited.
    pub editable: bool,
    /// Cell can be dragged.
    pub drag_enabled: bool,
    /// Cell is enabled (can interact).
    pub enabled: bool,
}

impl ItemFlags {
    /// Creates flags with all defaults (selectable and enabled only).
    pub fn new() -> Self {
        Self {
            selectable: true,
            enabled: true,
            ..Default::default()
        }
    }

    /// Creates flags for a cell that is enabled but otherwise inert.
    pub fn enabled_only() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Sets the drag-enabled flag.
    pub fn with_drag_enabled(mut self, drag_enabled: bool) -> Self {
        self.drag_enabled = drag_enabled;
        self
    }
}

/// Horizontal text alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center horizontally.
    Center,
    /// Align to the right edge.
    Right,
}

/// Font family class used to render a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellFont {
    /// The regular UI font.
    #[default]
    System,
    /// The system fixed-pitch font, so digits line up.
    FixedPitch,
}

/// The name cell of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveItem {
    text: String,
    flags: ItemFlags,
}

impl CurveItem {
    /// Creates a selectable, draggable name cell.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flags: ItemFlags::new().with_drag_enabled(true),
        }
    }

    /// Gets the curve name.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Gets the cell flags.
    pub fn flags(&self) -> ItemFlags {
        self.flags
    }
}

impl From<&str> for CurveItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CurveItem {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// The secondary cell of a row, showing the curve's live value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCell {
    text: String,
    flags: ItemFlags,
    alignment: HorizontalAlignment,
    font: CellFont,
}

impl Default for ValueCell {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl ValueCell {
    /// Creates the placeholder cell: `-`, read-only, right-aligned, monospace.
    pub fn placeholder() -> Self {
        Self {
            text: VALUE_PLACEHOLDER.to_string(),
            flags: ItemFlags::enabled_only(),
            alignment: HorizontalAlignment::Right,
            font: CellFont::FixedPitch,
        }
    }

    /// Gets the displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns true while the cell still shows the placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.text == VALUE_PLACEHOLDER
    }

    /// Gets the cell flags.
    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    /// Gets the text alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Gets the font class.
    pub fn font(&self) -> CellFont {
        self.font
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_cell_placeholder() {
        let cell = ValueCell::placeholder();
        assert_eq!(cell.text(), "-");
        assert!(cell.is_placeholder());
        assert!(!cell.flags().editable);
        assert!(!cell.flags().selectable);
        assert!(cell.flags().enabled);
        assert_eq!(cell.alignment(), HorizontalAlignment::Right);
        assert_eq!(cell.font(), CellFont::FixedPitch);
    }

    #[test]
    fn test_curve_item_flags() {
        let item = CurveItem::from("vehicle/speed");
        assert_eq!(item.text(), "vehicle/speed");
        assert!(item.flags().selectable);
        assert!(item.flags().drag_enabled);
    }
}
