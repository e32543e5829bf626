//! Class-name composition and frozen class presets for UI components.
//!
//! The crate has two halves:
//!
//! - [`compose`] and the [`cx!`] macro join class names from heterogeneous
//!   inputs (strings, lists, closures, `Option`s) into one space-separated
//!   string, dropping falsy values and keeping input order.
//! - [`Preset`] and [`FE_PRESETS`] hold fixed layout, button, and text class
//!   strings. [`Presets`] is a registry of the same shape that can also be
//!   loaded from YAML.
//!
//! # Example
//!
//! ```rust
//! use fe_presets::{cx, Preset};
//!
//! let selected = true;
//! let classes = cx!(
//!     Preset::Btn,
//!     "btn-primary",
//!     selected.then_some("is-selected"),
//!     || if selected { "" } else { "is-idle" },
//! );
//! assert_eq!(
//!     classes,
//!     "fe-d-inline-flex fe-items-center fe-justify-center fe-gap-2 fe-p-em-2 \
//!      fe-rounded-2 btn-primary is-selected"
//! );
//! ```
//!
//! Composition never fails. It does not deduplicate, reorder, or validate
//! class names.
//!
//! Templates rendered with MiniJinja can use the same functionality through
//! [`register_functions`].

mod compose;
pub mod preset;
mod template;
mod token;

pub use compose::compose;
pub use preset::{default_presets, Preset, PresetError, Presets, FE_PRESETS};
pub use template::register_functions;
pub use token::{thunk, Token};
