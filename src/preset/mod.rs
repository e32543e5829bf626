//! Class presets.
//!
//! This module provides:
//!
//! - [`Preset`] and [`FE_PRESETS`]: the built-in, compile-time preset table
//! - [`Presets`]: an immutable registry, built-in or loaded from YAML
//! - [`PresetError`]: errors from lookup, loading, and validation
//!
//! Preset values are opaque whitespace-separated class strings. Callers
//! combine them with their own classes through [`cx!`](crate::cx).

mod builtin;
mod error;
mod registry;

pub use builtin::{Preset, FE_PRESETS};
pub use error::PresetError;
pub use registry::{default_presets, Presets};
