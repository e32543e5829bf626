//! Preset registries.
//!
//! A [`Presets`] value is an immutable map from preset names to class
//! strings. It is either the built-in table ([`Presets::builtin`]) or loaded
//! from a YAML document, which lets an application ship its own presets
//! without recompiling:
//!
//! ```yaml
//! Card: fe-d-flex fe-flex-column fe-gap-3
//! Toolbar:
//!   - fe-d-flex
//!   - fe-gap-1
//! ```
//!
//! List values are joined with single spaces. Once built, a registry is
//! never mutated; [`Presets::add`] consumes the registry and returns a new
//! one.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::builtin::FE_PRESETS;
use super::error::PresetError;

/// An immutable collection of named class presets.
///
/// # Example
///
/// ```rust
/// use fe_presets::{cx, Presets};
///
/// let presets = Presets::builtin().add("Toolbar", "fe-d-flex fe-gap-1");
/// let toolbar = presets.get("Toolbar").unwrap();
/// assert_eq!(cx!(toolbar, "sticky"), "fe-d-flex fe-gap-1 sticky");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presets {
    entries: HashMap<String, String>,
}

/// A preset value in a YAML document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PresetDef {
    Classes(String),
    List(Vec<String>),
}

impl PresetDef {
    fn into_classes(self) -> String {
        match self {
            PresetDef::Classes(classes) => classes,
            PresetDef::List(parts) => parts
                .iter()
                .flat_map(|part| part.split_whitespace())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

static DEFAULT_PRESETS: Lazy<Presets> = Lazy::new(Presets::builtin);

/// Returns the process-wide registry holding the built-in presets.
pub fn default_presets() -> &'static Presets {
    &DEFAULT_PRESETS
}

impl Presets {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in presets.
    pub fn builtin() -> Self {
        FE_PRESETS
            .iter()
            .fold(Self::new(), |presets, (name, classes)| {
                presets.add(name, *classes)
            })
    }

    /// Parses a registry from a YAML mapping of names to class strings or
    /// lists of class strings.
    ///
    /// The result is validated before it is returned.
    pub fn from_yaml(source: &str) -> Result<Self, PresetError> {
        let defs: HashMap<String, PresetDef> =
            serde_yaml::from_str(source).map_err(|e| PresetError::Parse {
                message: e.to_string(),
            })?;

        let presets = defs
            .into_iter()
            .fold(Self::new(), |presets, (name, def)| {
                presets.add(&name, def.into_classes())
            });
        presets.validate()?;

        log::debug!("loaded {} presets", presets.len());
        Ok(presets)
    }

    /// Reads and parses a YAML preset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| PresetError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        log::debug!("reading presets from {}", path.display());
        Self::from_yaml(&source)
    }

    /// Adds a preset, returning the updated registry for chaining.
    ///
    /// An existing preset with the same name is replaced.
    pub fn add(mut self, name: &str, classes: impl Into<String>) -> Self {
        self.entries.insert(name.to_string(), classes.into());
        self
    }

    /// Returns the class string registered under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Like [`Presets::get`], but reports unknown names as an error.
    pub fn resolve(&self, name: &str) -> Result<&str, PresetError> {
        self.get(name).ok_or_else(|| PresetError::Unknown {
            name: name.to_string(),
        })
    }

    /// Returns true if a preset named `name` exists.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over `(name, classes)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, classes)| (name.as_str(), classes.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that every preset has a name and at least one class.
    ///
    /// Errors are reported for the first offending preset in name order.
    pub fn validate(&self) -> Result<(), PresetError> {
        for name in self.names() {
            if name.is_empty() {
                return Err(PresetError::EmptyName);
            }
            if self.entries[name].split_whitespace().next().is_none() {
                return Err(PresetError::EmptyClasses {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}
