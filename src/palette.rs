//! The fixed catalog of preset color palettes.

use crate::schema::SchemaError;
use crate::types::ColorPalette;

/// A named preset. Colors are static so the catalog needs no allocation.
#[derive(Debug, PartialEq, Eq)]
pub struct PresetPalette {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

impl PresetPalette {
    pub fn colors(&self) -> ColorPalette {
        ColorPalette {
            primary: self.primary.to_string(),
            secondary: self.secondary.to_string(),
            accent: self.accent.to_string(),
            background: self.background.to_string(),
            text: self.text.to_string(),
        }
    }
}

pub static CATALOG: [PresetPalette; 5] = [
    PresetPalette {
        name: "Ocean Blue",
        primary: "#0ea5e9",
        secondary: "#0284c7",
        accent: "#06b6d4",
        background: "#f0f9ff",
        text: "#0c4a6e",
    },
    PresetPalette {
        name: "Forest Green",
        primary: "#10b981",
        secondary: "#059669",
        accent: "#34d399",
        background: "#f0fdf4",
        text: "#064e3b",
    },
    PresetPalette {
        name: "Sunset Orange",
        primary: "#f97316",
        secondary: "#ea580c",
        accent: "#fb923c",
        background: "#fff7ed",
        text: "#7c2d12",
    },
    PresetPalette {
        name: "Royal Purple",
        primary: "#a855f7",
        secondary: "#9333ea",
        accent: "#c084fc",
        background: "#faf5ff",
        text: "#581c87",
    },
    PresetPalette {
        name: "Crimson Red",
        primary: "#ef4444",
        secondary: "#dc2626",
        accent: "#f87171",
        background: "#fef2f2",
        text: "#7f1d1d",
    },
];

/// The preset selected in a fresh session.
pub fn default_preset() -> &'static PresetPalette {
    &CATALOG[0]
}

/// Look up a preset by name. Case-insensitive, so `ocean blue` works on the command line.
pub fn find(name: &str) -> Result<&'static PresetPalette, SchemaError> {
    CATALOG
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| SchemaError::UnknownPalette(name.to_string()))
}
