//! Value types shared by the store, the compiler and the loaders.
//!
//! These serialize directly into the JSON export, so field names and
//! ordering here are part of the export format.

use crate::schema::SchemaError;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Colors
// =============================================================================

/// Five color channels, copied verbatim into the output. No format checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for ColorPalette {
    /// Starting values of the custom-color editor.
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            secondary: "#7c3aed".to_string(),
            accent: "#f59e0b".to_string(),
            background: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
        }
    }
}

impl ColorPalette {
    pub fn get(&self, channel: ColorChannel) -> &str {
        match channel {
            ColorChannel::Primary => &self.primary,
            ColorChannel::Secondary => &self.secondary,
            ColorChannel::Accent => &self.accent,
            ColorChannel::Background => &self.background,
            ColorChannel::Text => &self.text,
        }
    }

    pub fn set(&mut self, channel: ColorChannel, value: impl Into<String>) {
        let slot = match channel {
            ColorChannel::Primary => &mut self.primary,
            ColorChannel::Secondary => &mut self.secondary,
            ColorChannel::Accent => &mut self.accent,
            ColorChannel::Background => &mut self.background,
            ColorChannel::Text => &mut self.text,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 5] = [
        ColorChannel::Primary,
        ColorChannel::Secondary,
        ColorChannel::Accent,
        ColorChannel::Background,
        ColorChannel::Text,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorChannel::Primary => "primary",
            ColorChannel::Secondary => "secondary",
            ColorChannel::Accent => "accent",
            ColorChannel::Background => "background",
            ColorChannel::Text => "text",
        }
    }

    /// Label used in the document's palette list.
    pub fn label(self) -> &'static str {
        match self {
            ColorChannel::Primary => "Primary",
            ColorChannel::Secondary => "Secondary",
            ColorChannel::Accent => "Accent",
            ColorChannel::Background => "Background",
            ColorChannel::Text => "Text",
        }
    }
}

impl FromStr for ColorChannel {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorChannel::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownChannel(s.to_string()))
    }
}

// =============================================================================
// Floating buttons
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Whatsapp,
    Facebook,
    Instagram,
    Tiktok,
    Twitter,
    Youtube,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Whatsapp,
        Platform::Facebook,
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Twitter,
        Platform::Youtube,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Whatsapp => "whatsapp",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Twitter => "twitter",
            Platform::Youtube => "youtube",
        }
    }

    /// Font Awesome brand icon class.
    pub fn icon(self) -> &'static str {
        match self {
            Platform::Whatsapp => "fa-whatsapp",
            Platform::Facebook => "fa-facebook-f",
            Platform::Instagram => "fa-instagram",
            Platform::Tiktok => "fa-tiktok",
            Platform::Twitter => "fa-twitter",
            Platform::Youtube => "fa-youtube",
        }
    }

    /// Brand background color of the floating button.
    pub fn brand_color(self) -> &'static str {
        match self {
            Platform::Whatsapp => "#25D366",
            Platform::Facebook => "#1877F2",
            Platform::Instagram => "#E4405F",
            Platform::Tiktok => "#000000",
            Platform::Twitter => "#1DA1F2",
            Platform::Youtube => "#FF0000",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownPlatform(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhatsappButton {
    pub enabled: bool,
    pub number: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkButton {
    pub enabled: bool,
    pub url: String,
}

/// Per-platform floating button settings. Disabled entries are kept and exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloatingButtons {
    pub whatsapp: WhatsappButton,
    pub facebook: LinkButton,
    pub instagram: LinkButton,
    pub tiktok: LinkButton,
    pub twitter: LinkButton,
    pub youtube: LinkButton,
}

/// A partial update for one platform. `None` leaves the current value alone.
///
/// `number` and `message` only apply to WhatsApp, `url` only to the others;
/// keys that don't apply to the target platform are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonPatch {
    pub enabled: Option<bool>,
    pub url: Option<String>,
    pub number: Option<String>,
    pub message: Option<String>,
}

impl ButtonPatch {
    pub fn enable() -> Self {
        Self {
            enabled: Some(true),
            ..Self::default()
        }
    }

    pub fn link(url: impl Into<String>) -> Self {
        Self {
            enabled: Some(true),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn whatsapp(number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            enabled: Some(true),
            number: Some(number.into()),
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

impl FloatingButtons {
    /// All platforms disabled; WhatsApp pre-filled with a greeting.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            whatsapp: WhatsappButton {
                enabled: false,
                number: String::new(),
                message: message.into(),
            },
            facebook: LinkButton::default(),
            instagram: LinkButton::default(),
            tiktok: LinkButton::default(),
            twitter: LinkButton::default(),
            youtube: LinkButton::default(),
        }
    }

    fn link(&self, platform: Platform) -> Option<&LinkButton> {
        match platform {
            Platform::Whatsapp => None,
            Platform::Facebook => Some(&self.facebook),
            Platform::Instagram => Some(&self.instagram),
            Platform::Tiktok => Some(&self.tiktok),
            Platform::Twitter => Some(&self.twitter),
            Platform::Youtube => Some(&self.youtube),
        }
    }

    fn link_mut(&mut self, platform: Platform) -> Option<&mut LinkButton> {
        match platform {
            Platform::Whatsapp => None,
            Platform::Facebook => Some(&mut self.facebook),
            Platform::Instagram => Some(&mut self.instagram),
            Platform::Tiktok => Some(&mut self.tiktok),
            Platform::Twitter => Some(&mut self.twitter),
            Platform::Youtube => Some(&mut self.youtube),
        }
    }

    pub fn is_enabled(&self, platform: Platform) -> bool {
        match self.link(platform) {
            Some(link) => link.enabled,
            None => self.whatsapp.enabled,
        }
    }

    /// Enabled platforms in canonical order.
    pub fn enabled(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.is_enabled(*p))
            .collect()
    }

    pub fn apply(&mut self, platform: Platform, patch: ButtonPatch) {
        match self.link_mut(platform) {
            Some(link) => {
                if let Some(enabled) = patch.enabled {
                    link.enabled = enabled;
                }
                if let Some(url) = patch.url {
                    link.url = url;
                }
            }
            None => {
                let wa = &mut self.whatsapp;
                if let Some(enabled) = patch.enabled {
                    wa.enabled = enabled;
                }
                if let Some(number) = patch.number {
                    wa.number = number;
                }
                if let Some(message) = patch.message {
                    wa.message = message;
                }
            }
        }
    }

    /// Link target of a platform's button.
    ///
    /// WhatsApp builds a `wa.me` click-to-chat link with the message
    /// percent-encoded; every other platform uses its stored URL as-is.
    pub fn href(&self, platform: Platform) -> String {
        match self.link(platform) {
            Some(link) => link.url.clone(),
            None => format!(
                "https://wa.me/{}?text={}",
                self.whatsapp.number,
                utf8_percent_encode(&self.whatsapp.message, URI_COMPONENT)
            ),
        }
    }
}

// =============================================================================
// Page content
// =============================================================================

/// Field values of one section, in the order the fields were first written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionValues {
    entries: Vec<(String, String)>,
}

impl SectionValues {
    /// Upsert: overwriting keeps the field's original position.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((field.to_string(), value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fields holding a non-empty value.
    pub fn filled(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, v)| !v.is_empty())
    }

    pub fn has_content(&self) -> bool {
        self.filled().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SectionValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// All stored sections of one page, in the order they were first written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    sections: Vec<(String, SectionValues)>,
}

impl PageContent {
    pub const EMPTY: Self = Self {
        sections: Vec::new(),
    };

    pub fn section(&self, id: &str) -> Option<&SectionValues> {
        self.sections
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, values)| values)
    }

    /// Get a section for writing, appending an empty one on first use.
    pub fn section_mut(&mut self, id: &str) -> &mut SectionValues {
        let pos = match self.sections.iter().position(|(name, _)| name == id) {
            Some(pos) => pos,
            None => {
                self.sections.push((id.to_string(), SectionValues::default()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[pos].1
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &SectionValues)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for PageContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (k, v) in &self.sections {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
