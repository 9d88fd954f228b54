//! Project input files: the command-line stand-in for the form.
//!
//! A TOML file lists what a user would type into the form. It is checked
//! against the schema and turned into a list of store edits; only when the
//! whole file checks out are the edits applied, so a typo never leaves a
//! half-updated state behind.
//!
//! ```toml
//! project_name = "Acme"
//! website_type = "Corporativo"
//! languages = "Español, Inglés"
//! pages = ["home", "contact"]
//! palette = "Forest Green"
//! use_custom_colors = false
//!
//! [custom_colors]
//! primary = "#0f172a"
//!
//! [buttons.whatsapp]
//! enabled = true
//! number = "34912345678"
//!
//! [content.home.hero]
//! titulo = "Hola"
//! textoCTA = "Empezar"
//! ```
//!
//! Tables are read in file order, so sections and fields are stored in the
//! order they appear and come out of the Markdown in that order too.

use crate::palette::{self, PresetPalette};
use crate::schema::{PageId, Schema, SchemaError};
use crate::state::ProjectState;
use crate::types::{ButtonPatch, ColorChannel, Platform};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("invalid project input: {0}")]
    Invalid(String),
}

/// Raw contents of a project input file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectInput {
    pub project_name: Option<String>,
    pub website_type: Option<String>,
    pub languages: Option<String>,
    pub pages: Option<Vec<String>>,
    pub palette: Option<String>,
    pub use_custom_colors: Option<bool>,
    pub custom_colors: toml::Table,
    pub buttons: toml::Table,
    pub content: toml::Table,
}

/// One store operation derived from the input file.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    ProjectName(String),
    WebsiteType(String),
    Languages(String),
    Pages(Vec<PageId>),
    Palette(&'static PresetPalette),
    UseCustomColors(bool),
    CustomColor(ColorChannel, String),
    Button(Platform, ButtonPatch),
    Field {
        page: PageId,
        section: String,
        field: String,
        value: String,
    },
}

pub fn parse_input(text: &str) -> Result<ProjectInput, InputError> {
    Ok(toml::from_str(text)?)
}

pub fn load_input(path: &Path) -> Result<ProjectInput, InputError> {
    let text = fs::read_to_string(path)?;
    parse_input(&text)
}

fn as_table<'a>(value: &'a toml::Value, what: &str) -> Result<&'a toml::Table, InputError> {
    value
        .as_table()
        .ok_or_else(|| InputError::Invalid(format!("{what} must be a table")))
}

fn as_string(value: &toml::Value, what: &str) -> Result<String, InputError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| InputError::Invalid(format!("{what} must be a string")))
}

impl ProjectInput {
    /// Check the whole input and translate it into store edits, in file order.
    pub fn plan(&self, schema: &Schema) -> Result<Vec<Edit>, InputError> {
        let mut edits = Vec::new();

        if let Some(name) = &self.project_name {
            edits.push(Edit::ProjectName(name.clone()));
        }
        if let Some(website_type) = &self.website_type {
            edits.push(Edit::WebsiteType(website_type.clone()));
        }
        if let Some(languages) = &self.languages {
            edits.push(Edit::Languages(languages.clone()));
        }
        if let Some(pages) = &self.pages {
            edits.push(Edit::Pages(parse_pages(pages)?));
        }
        if let Some(name) = &self.palette {
            edits.push(Edit::Palette(palette::find(name)?));
        }
        if let Some(enabled) = self.use_custom_colors {
            edits.push(Edit::UseCustomColors(enabled));
        }
        for (channel, value) in &self.custom_colors {
            let what = format!("custom_colors.{channel}");
            edits.push(Edit::CustomColor(channel.parse()?, as_string(value, &what)?));
        }
        for (platform, value) in &self.buttons {
            let platform: Platform = platform.parse()?;
            let patch: ButtonPatch = value.clone().try_into()?;
            edits.push(Edit::Button(platform, patch));
        }
        for (page, sections) in &self.content {
            let page: PageId = page.parse()?;
            let page_schema = schema.page(page);
            for (section, fields) in as_table(sections, &format!("content.{page}"))? {
                let what = format!("content.{page}.{section}");
                for (field, value) in as_table(fields, &what)? {
                    page_schema.check_field(section, field)?;
                    edits.push(Edit::Field {
                        page,
                        section: section.clone(),
                        field: field.clone(),
                        value: as_string(value, &format!("{what}.{field}"))?,
                    });
                }
            }
        }

        Ok(edits)
    }

    /// Validate, then apply every edit through the store.
    ///
    /// On error the state is left untouched. Returns the number of edits applied.
    pub fn apply(&self, state: &mut ProjectState, schema: &Schema) -> Result<usize, InputError> {
        let edits = self.plan(schema)?;
        let count = edits.len();
        for edit in edits {
            apply_edit(state, edit);
        }
        debug!(edits = count, "project input applied");
        Ok(count)
    }
}

/// Page ids in the given order. Must be non-empty and free of duplicates.
fn parse_pages(pages: &[String]) -> Result<Vec<PageId>, InputError> {
    if pages.is_empty() {
        return Err(InputError::Invalid(
            "pages must list at least one page".into(),
        ));
    }
    let mut ids: Vec<PageId> = Vec::with_capacity(pages.len());
    for page in pages {
        let id: PageId = page.parse()?;
        if ids.contains(&id) {
            return Err(InputError::Invalid(format!("page '{id}' listed twice")));
        }
        ids.push(id);
    }
    Ok(ids)
}

fn apply_edit(state: &mut ProjectState, edit: Edit) {
    match edit {
        Edit::ProjectName(name) => state.set_project_name(name),
        Edit::WebsiteType(website_type) => state.set_website_type(website_type),
        Edit::Languages(languages) => state.set_languages(languages),
        Edit::Pages(pages) => state.replace_selection(pages),
        Edit::Palette(preset) => state.select_palette(preset),
        Edit::UseCustomColors(enabled) => state.set_use_custom_colors(enabled),
        Edit::CustomColor(channel, value) => state.set_custom_color(channel, value),
        Edit::Button(platform, patch) => state.set_floating_button(platform, patch),
        Edit::Field {
            page,
            section,
            field,
            value,
        } => state.set_field(page, &section, &field, value),
    }
}
