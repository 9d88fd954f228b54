//! Generator configuration module.
//!
//! Handles loading, validating, and merging `site-prompt.toml`. The file is
//! optional; when present its values are layered over the stock defaults.
//!
//! ## Config File Location
//!
//! `site-prompt.toml` is read from the config directory (`--config`, default
//! the current directory):
//!
//! ```text
//! my-project/
//! ├── site-prompt.toml     # Optional generator config
//! └── project.toml         # Project input (see the input module)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [defaults]
//! languages = "Español, Inglés"      # Languages of a fresh project
//! palette = "Ocean Blue"             # Preset selected in a fresh project
//! whatsapp_message = "Hola, me gustaría obtener más información"
//!
//! [defaults.custom_colors]           # Starting values of the custom palette
//! primary = "#2563eb"
//! secondary = "#7c3aed"
//! accent = "#f59e0b"
//! background = "#ffffff"
//! text = "#1f2937"
//!
//! [export]
//! output_dir = "."                   # Where `build` writes the prompt file
//! ```
//!
//! The `[defaults]` table is what a fresh project starts from and what a
//! reset restores. Unknown keys are rejected to catch typos early.

use crate::palette;
use crate::state::StateDefaults;
use crate::types::ColorPalette;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the config directory.
pub const CONFIG_FILE: &str = "site-prompt.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `site-prompt.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Initial values of a fresh or reset project.
    pub defaults: DefaultsConfig,
    /// Where exports land.
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub languages: String,
    /// Preset palette name, matched case-insensitively.
    pub palette: String,
    pub whatsapp_message: String,
    pub custom_colors: ColorPalette,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let stock = StateDefaults::default();
        Self {
            languages: stock.languages,
            palette: stock.palette.name.to_string(),
            whatsapp_message: stock.whatsapp_message,
            custom_colors: stock.custom_colors,
        }
    }
}

impl DefaultsConfig {
    /// Resolve into store defaults. Fails only on an unknown palette name.
    pub fn state_defaults(&self) -> Result<StateDefaults, ConfigError> {
        let preset = palette::find(&self.palette)
            .map_err(|e| ConfigError::Validation(format!("defaults.palette: {e}")))?;
        Ok(StateDefaults {
            languages: self.languages.clone(),
            palette: preset,
            custom_colors: self.custom_colors.clone(),
            whatsapp_message: self.whatsapp_message.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Output directory for `build`, relative to the working directory.
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Validate values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.defaults.state_defaults()?;
        if self.export.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "export.output_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Layering: stock defaults <- site-prompt.toml
// =============================================================================

/// [`GeneratorConfig::default`] as a TOML table, the bottom layer of every load.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GeneratorConfig::default()).expect("default config must serialize")
}

/// Lay `overlay` over `base`.
///
/// Where both sides hold a table the two are combined key by key, so a file
/// that only sets `[defaults.custom_colors] primary` keeps the other four
/// channels. Anything else in `overlay` wins outright.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut merged), toml::Value::Table(layer)) => {
            for (key, value) in layer {
                match merged.get_mut(&key) {
                    // Merge in place so the key keeps its position.
                    Some(slot) => {
                        let existing = std::mem::replace(slot, toml::Value::Boolean(false));
                        *slot = merge_toml(existing, value);
                    }
                    None => {
                        merged.insert(key, value);
                    }
                }
            }
            toml::Value::Table(merged)
        }
        (_, layer) => layer,
    }
}

/// Parse `site-prompt.toml` in `dir`, or `None` when there is no such file.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let text = match fs::read_to_string(dir.join(CONFIG_FILE)) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(toml::from_str(&text)?))
}

/// Stack the optional file layer on `base` and turn the result into a
/// checked [`GeneratorConfig`].
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GeneratorConfig, ConfigError> {
    let layered = if let Some(file) = overlay {
        merge_toml(base, file)
    } else {
        base
    };
    let config: GeneratorConfig = layered.try_into()?;
    config.validate()?;
    Ok(config)
}

/// The configuration a run uses: stock defaults plus whatever `dir` overrides.
pub fn load_config(dir: &Path) -> Result<GeneratorConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Every option with its default and a comment, as printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# site-prompt Configuration
# =========================
# Every key is optional; the values below are what you get without this file.
# Delete what you don't change. Misspelled keys are rejected.

# ---------------------------------------------------------------------------
# Project defaults (used for a fresh project and restored by a reset)
# ---------------------------------------------------------------------------
[defaults]
# Comma-separated content languages.
languages = "Español, Inglés"

# Preset palette: Ocean Blue, Forest Green, Sunset Orange, Royal Purple, Crimson Red.
palette = "Ocean Blue"

# Pre-filled WhatsApp greeting of the floating button.
whatsapp_message = "Hola, me gustaría obtener más información"

# Starting values of the custom palette (used when use_custom_colors = true).
[defaults.custom_colors]
primary = "#2563eb"
secondary = "#7c3aed"
accent = "#f59e0b"
background = "#ffffff"
text = "#1f2937"

# ---------------------------------------------------------------------------
# Export
# ---------------------------------------------------------------------------
[export]
# Directory the build command writes <project>-prompt.<ext> into.
output_dir = "."
"##
}
