//! Preset lookup and loading errors.

use std::path::PathBuf;

/// Error returned when a preset cannot be found, loaded, or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    /// No preset is registered under this name
    Unknown { name: String },
    /// A preset was registered with an empty name
    EmptyName,
    /// A preset resolves to no class names
    EmptyClasses { name: String },
    /// The preset document is not a valid name-to-classes mapping
    Parse { message: String },
    /// The preset file could not be read
    Io { path: PathBuf, message: String },
}

impl std::fmt::Display for PresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetError::Unknown { name } => write!(f, "unknown preset '{}'", name),
            PresetError::EmptyName => write!(f, "preset name must not be empty"),
            PresetError::EmptyClasses { name } => {
                write!(f, "preset '{}' has no class names", name)
            }
            PresetError::Parse { message } => write!(f, "invalid preset document: {}", message),
            PresetError::Io { path, message } => {
                write!(f, "failed to read presets from {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for PresetError {}
