//! Color identifiers for category badges.
//!
//! # Invariants
//! - `ColorId::as_str` values are stable and match the serde wire names.
//! - Theme colors (`primary|accent|success|warning`) are reserved for the
//!   predefined categories; the hash palette only uses plain hues.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque color identifier resolved to concrete styling by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorId {
    Primary,
    Accent,
    Success,
    Warning,
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Indigo,
    Teal,
    Orange,
}

impl ColorId {
    /// Stable string id used by hosts and serialized payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
            Self::Teal => "teal",
            Self::Orange => "orange",
        }
    }
}

impl Display for ColorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fallback palette for categories outside the predefined table.
pub const CATEGORY_PALETTE: &[ColorId] = &[
    ColorId::Red,
    ColorId::Blue,
    ColorId::Green,
    ColorId::Yellow,
    ColorId::Purple,
    ColorId::Pink,
    ColorId::Indigo,
    ColorId::Teal,
];

/// Predefined categories offered by the template dialog, with their colors.
pub const PREDEFINED_CATEGORIES: &[(&str, ColorId)] = &[
    ("Development", ColorId::Primary),
    ("Writing", ColorId::Accent),
    ("Education", ColorId::Success),
    ("Strategy", ColorId::Warning),
    ("Analysis", ColorId::Blue),
    ("Creative", ColorId::Purple),
    ("Business", ColorId::Green),
    ("Research", ColorId::Orange),
];

/// Returns the predefined category names in dialog order.
pub fn predefined_category_names() -> impl Iterator<Item = &'static str> {
    PREDEFINED_CATEGORIES.iter().map(|(name, _)| *name)
}
