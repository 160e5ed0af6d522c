//! Error types for the curvelist widget crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced when decoding a `curveslist/copy` drag payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The payload ended in the middle of a length prefix or string body.
    #[error("payload truncated at byte {offset}: needed {needed} more bytes")]
    Truncated {
        /// Offset where the incomplete field starts.
        offset: usize,
        /// Bytes missing to complete the field.
        needed: usize,
    },
    /// A string body length is not a whole number of UTF-16 code units.
    #[error("string at byte {offset} has odd byte length {length}")]
    OddLength {
        /// Offset of the length prefix.
        offset: usize,
        /// The declared byte length.
        length: u32,
    },
    /// A string body is not valid UTF-16.
    #[error("string at byte {offset} is not valid UTF-16")]
    InvalidUtf16 {
        /// Offset of the length prefix.
        offset: usize,
    },
}

/// Errors produced when compiling a wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A `[` character set was never closed.
    #[error("unterminated character set starting at position {position}")]
    UnterminatedSet {
        /// Character index of the opening bracket.
        position: usize,
    },
    /// The translated pattern was rejected by the regex engine.
    #[error("invalid wildcard pattern '{pattern}': {message}")]
    Regex {
        /// The wildcard pattern as given.
        pattern: String,
        /// The regex engine's message.
        message: String,
    },
}

/// Errors produced when loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    #[error("settings I/O failed for {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file extension names no supported format.
    #[error("unsupported settings format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
    /// TOML parsing failed.
    #[error("invalid TOML settings: {0}")]
    TomlDe(#[from] toml::de::Error),
    /// TOML serialization failed.
    #[error("failed to serialize settings as TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),
    /// JSON parsing or serialization failed.
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// The main error type for curvelist operations.
#[derive(Debug, Error)]
pub enum CurveListError {
    /// Drag payload decoding failed.
    #[error("drag payload error: {0}")]
    Payload(#[from] PayloadError),
    /// Wildcard pattern compilation failed.
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),
    /// Settings persistence failed.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    /// A signal connection could not be removed.
    #[error("signal error: {0}")]
    Signal(#[from] curvelist_core::SignalError),
}

/// A specialized Result type for curvelist operations.
pub type Result<T> = std::result::Result<T, CurveListError>;
