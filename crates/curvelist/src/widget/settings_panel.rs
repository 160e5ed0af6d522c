//! Collapsible panel holding the filter option controls.
//!
//! Collapsing a control sets its maximum height to zero and hides it;
//! expanding restores [`SettingsPanel::EXPANDED_HEIGHT`] and shows it. The two
//! properties always move together.

/// The controls housed in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsControl {
    /// "Contains" match-mode radio button.
    ContainsRadio,
    /// "Wildcard" match-mode radio button.
    WildcardRadio,
    /// Case-sensitivity check box.
    CaseSensitiveCheck,
    /// Hide-value-column check box.
    HideValueColumnCheck,
}

impl SettingsControl {
    /// Every control, in layout order.
    pub const ALL: [SettingsControl; 4] = [
        SettingsControl::ContainsRadio,
        SettingsControl::WildcardRadio,
        SettingsControl::CaseSensitiveCheck,
        SettingsControl::HideValueColumnCheck,
    ];

    /// The control's label.
    pub fn label(self) -> &'static str {
        match self {
            SettingsControl::ContainsRadio => "Contains",
            SettingsControl::WildcardRadio => "Wildcard",
            SettingsControl::CaseSensitiveCheck => "Case sensitive",
            SettingsControl::HideValueColumnCheck => "Hide value column",
        }
    }
}

/// Layout state of one control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlGeometry {
    /// Maximum height in layout units.
    pub max_height: f32,
    /// Whether the control is shown.
    pub visible: bool,
}

impl ControlGeometry {
    fn for_expanded(expanded: bool) -> Self {
        Self {
            max_height: if expanded {
                SettingsPanel::EXPANDED_HEIGHT
            } else {
                0.0
            },
            visible: expanded,
        }
    }
}

/// The settings panel. Starts collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsPanel {
    expanded: bool,
    controls: Vec<(SettingsControl, ControlGeometry)>,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsPanel {
    /// Height of a control while the panel is expanded.
    pub const EXPANDED_HEIGHT: f32 = 25.0;

    /// Creates a collapsed panel with every control.
    pub fn new() -> Self {
        Self {
            expanded: false,
            controls: SettingsControl::ALL
                .iter()
                .map(|&control| (control, ControlGeometry::for_expanded(false)))
                .collect(),
        }
    }

    /// Whether the panel is expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Expands or collapses every control.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
        let geometry = ControlGeometry::for_expanded(expanded);
        for (_, slot) in &mut self.controls {
            *slot = geometry;
        }
    }

    /// Geometry of one control.
    pub fn geometry(&self, control: SettingsControl) -> Option<ControlGeometry> {
        self.controls
            .iter()
            .find(|(candidate, _)| *candidate == control)
            .map(|(_, geometry)| *geometry)
    }

    /// All controls with their geometry, in layout order.
    pub fn controls(&self) -> impl Iterator<Item = (SettingsControl, ControlGeometry)> + '_ {
        self.controls.iter().copied()
    }
}
