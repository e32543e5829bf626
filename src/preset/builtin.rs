//! The built-in preset table.

use std::fmt;
use std::str::FromStr;

use super::error::PresetError;

/// Built-in presets as `(name, classes)` pairs, in declaration order.
///
/// Containers and layout come first, then buttons (shape and spacing only;
/// colours and animations belong to the application), then text helpers.
pub const FE_PRESETS: &[(&str, &str)] = &[
    ("Card", "fe-d-flex fe-flex-column fe-gap-3 fe-p-3 fe-rounded-2"),
    ("Stack", "fe-d-flex fe-flex-column fe-gap-2"),
    ("Row", "fe-d-flex fe-flex-row fe-items-center fe-gap-2"),
    (
        "Btn",
        "fe-d-inline-flex fe-items-center fe-justify-center fe-gap-2 fe-p-em-2 fe-rounded-2",
    ),
    (
        "BtnPill",
        "fe-d-inline-flex fe-items-center fe-justify-center fe-gap-2 fe-p-em-2 fe-rounded-pill",
    ),
    ("Muted", "fe-text-muted"),
    ("Truncate", "fe-truncate fe-min-w-0"),
];

/// A built-in class preset.
///
/// Each variant indexes into [`FE_PRESETS`], so the enum and the table can
/// never disagree.
///
/// # Example
///
/// ```rust
/// use fe_presets::{cx, Preset};
///
/// let preset: Preset = "Muted".parse().unwrap();
/// assert_eq!(preset, Preset::Muted);
/// assert_eq!(cx!(preset, "small"), "fe-text-muted small");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Card,
    Stack,
    Row,
    Btn,
    BtnPill,
    Muted,
    Truncate,
}

impl Preset {
    /// Every built-in preset, in table order.
    pub const ALL: [Preset; 7] = [
        Preset::Card,
        Preset::Stack,
        Preset::Row,
        Preset::Btn,
        Preset::BtnPill,
        Preset::Muted,
        Preset::Truncate,
    ];

    /// The preset's name as it appears in [`FE_PRESETS`].
    pub const fn name(self) -> &'static str {
        FE_PRESETS[self as usize].0
    }

    /// The preset's whitespace-separated class names.
    pub const fn classes(self) -> &'static str {
        FE_PRESETS[self as usize].1
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.classes())
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| PresetError::Unknown {
                name: name.to_string(),
            })
    }
}
