//! Error types for kserver-core

use std::path::PathBuf;

/// Result type for kserver-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kserver-core operations
///
/// Resolution itself never fails; these errors come from parsing helpers
/// (whose callers fall back to defaults) and from loading option files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Library name does not match any supported library
    #[error("Unknown library: {name}")]
    UnknownLibrary { name: String },

    /// Boolean option value is neither "true" nor "false"
    #[error("Invalid boolean for {key}: {value:?}")]
    InvalidBoolean { key: String, value: String },

    /// Command-line override is not of the form `key=value`
    #[error("Invalid option override {input:?}: expected key=value")]
    InvalidOverride { input: String },

    /// Option file value has a type that cannot be used as an option
    #[error("Unsupported value for option {key} in {path}: expected a string, boolean, integer or float")]
    UnsupportedValue { path: PathBuf, key: String },

    /// Explicitly requested option file is missing
    #[error("Options file not found at {path}")]
    OptionsFileNotFound { path: PathBuf },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
