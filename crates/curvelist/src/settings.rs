//! Persisted curve list preferences.
//!
//! [`FilterSettings`] captures the user-facing options of the list (match
//! mode, case sensitivity, value column, settings panel) plus a few tuning
//! knobs. It can be persisted as TOML or JSON; the format follows the file
//! extension. Missing fields take their defaults, so older files keep loading.
//!
//! ```no_run
//! use curvelist::FilterableListWidget;
//! use curvelist::settings::FilterSettings;
//!
//! # fn main() -> Result<(), curvelist::error::SettingsError> {
//! let settings = FilterSettings::load_or_default("curvelist.toml")?;
//! let widget = FilterableListWidget::with_settings(&settings);
//! // ...
//! widget.settings().save("curvelist.toml")?;
//! # Ok(())
//! # }
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use curvelist_core::logging::targets;

use crate::error::SettingsError;
use crate::filter::MatchMode;
use crate::widget::drag_drop::DragGesture;

/// Supported file formats for settings persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// TOML format.
    Toml,
    /// JSON format.
    Json,
}

impl SettingsFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// User preferences of a curve list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Active match mode.
    pub match_mode: MatchMode,
    /// Whether filtering distinguishes letter case.
    pub case_sensitive: bool,
    /// Whether the value column is hidden.
    pub value_column_hidden: bool,
    /// Whether the settings panel is expanded.
    pub settings_expanded: bool,
    /// Pointer travel (Manhattan distance) before a press turns into a drag.
    pub drag_distance: f32,
    /// Decimal places used when showing numeric values.
    pub value_precision: usize,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Contains,
            case_sensitive: false,
            value_column_hidden: false,
            settings_expanded: false,
            drag_distance: DragGesture::DEFAULT_DRAG_DISTANCE,
            value_precision: 3,
        }
    }
}

impl FilterSettings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Parses settings from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serializes the settings as TOML.
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serializes the settings as JSON.
    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads settings from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let format = SettingsFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = match format {
            SettingsFormat::Toml => Self::from_toml_str(&content)?,
            SettingsFormat::Json => Self::from_json_str(&content)?,
        };
        tracing::debug!(target: targets::SETTINGS, path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Loads settings, falling back to defaults if the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        match Self::load(path) {
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Saves settings to a `.toml` or `.json` file.
    ///
    /// The file is written atomically using a temporary file and rename.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let content = match SettingsFormat::from_path(path)? {
            SettingsFormat::Toml => self.to_toml_string()?,
            SettingsFormat::Json => self.to_json_string()?,
        };
        atomic_write(path, content.as_bytes())?;
        tracing::debug!(target: targets::SETTINGS, path = %path.display(), "settings saved");
        Ok(())
    }
}

fn atomic_write(path: &Path, bytes: &[u8]) -> Result<(), SettingsError> {
    let io_error = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(&dir).map_err(io_error)?;
    file.write_all(bytes).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|err| io_error(err.error))?;
    Ok(())
}
