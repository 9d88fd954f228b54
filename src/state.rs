//! The in-memory project state and its mutation operations.
//!
//! One [`ProjectState`] lives for one session. The form (or any other
//! driver) mutates it only through the methods here and hands a shared
//! reference to [`crate::compile::compile`] whenever output is needed.
//! Nothing is persisted; [`ProjectState::reset`] is the only way back to
//! a clean slate.
//!
//! ## Empty vs. Absent
//!
//! Field values are stored exactly as written, empty strings included.
//! Readers go through [`ProjectState::field`], which returns `""` for
//! unset fields, so empty and absent look the same to everyone.
//!
//! ## Page Selection
//!
//! Selection order is insertion order: re-selecting a page appends it at
//! the end. The selection is never empty: deselecting the last remaining
//! page is refused and reported as [`PageToggle::KeptLast`].

use crate::palette::{self, PresetPalette};
use crate::schema::PageId;
use crate::types::{ButtonPatch, ColorChannel, ColorPalette, FloatingButtons, PageContent, Platform};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Values a fresh or reset state starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDefaults {
    pub languages: String,
    pub palette: &'static PresetPalette,
    pub custom_colors: ColorPalette,
    pub whatsapp_message: String,
}

impl Default for StateDefaults {
    fn default() -> Self {
        Self {
            languages: "Español, Inglés".to_string(),
            palette: palette::default_preset(),
            custom_colors: ColorPalette::default(),
            whatsapp_message: "Hola, me gustaría obtener más información".to_string(),
        }
    }
}

/// Outcome of [`ProjectState::toggle_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToggle {
    Added,
    Removed,
    /// The page was the only one selected and stays selected.
    KeptLast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectState {
    pub project_name: String,
    pub website_type: String,
    /// Comma-separated, as typed. Split only when compiling.
    pub languages: String,
    selected_pages: Vec<PageId>,
    page_data: BTreeMap<PageId, PageContent>,
    selected_palette: &'static PresetPalette,
    custom_colors: ColorPalette,
    use_custom_colors: bool,
    floating_buttons: FloatingButtons,
    defaults: StateDefaults,
}

impl Default for ProjectState {
    fn default() -> Self {
        Self::new(StateDefaults::default())
    }
}

impl ProjectState {
    pub fn new(defaults: StateDefaults) -> Self {
        Self {
            project_name: String::new(),
            website_type: String::new(),
            languages: defaults.languages.clone(),
            selected_pages: vec![PageId::Home],
            page_data: PageId::ALL
                .into_iter()
                .map(|id| (id, PageContent::default()))
                .collect(),
            selected_palette: defaults.palette,
            custom_colors: defaults.custom_colors.clone(),
            use_custom_colors: false,
            floating_buttons: FloatingButtons::with_message(defaults.whatsapp_message.clone()),
            defaults,
        }
    }

    // -------------------------------------------------------------------------
    // Project header
    // -------------------------------------------------------------------------

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = name.into();
    }

    pub fn set_website_type(&mut self, website_type: impl Into<String>) {
        self.website_type = website_type.into();
    }

    pub fn set_languages(&mut self, languages: impl Into<String>) {
        self.languages = languages.into();
    }

    // -------------------------------------------------------------------------
    // Page content
    // -------------------------------------------------------------------------

    /// Upsert one field value. No validation; always succeeds.
    pub fn set_field(&mut self, page: PageId, section: &str, field: &str, value: impl Into<String>) {
        let value = value.into();
        debug!(%page, section, field, len = value.len(), "set field");
        self.page_data
            .entry(page)
            .or_default()
            .section_mut(section)
            .set(field, value);
    }

    /// Current value of a field, `""` when unset.
    pub fn field(&self, page: PageId, section: &str, field: &str) -> &str {
        self.page_data
            .get(&page)
            .and_then(|p| p.section(section))
            .and_then(|s| s.get(field))
            .unwrap_or("")
    }

    /// Stored content of a page, whether or not it is selected.
    pub fn page_content(&self, page: PageId) -> &PageContent {
        static EMPTY: PageContent = PageContent::EMPTY;
        self.page_data.get(&page).unwrap_or(&EMPTY)
    }

    // -------------------------------------------------------------------------
    // Page selection
    // -------------------------------------------------------------------------

    pub fn selected_pages(&self) -> &[PageId] {
        &self.selected_pages
    }

    pub fn is_selected(&self, page: PageId) -> bool {
        self.selected_pages.contains(&page)
    }

    /// Select or deselect a page. Deselecting keeps the page's content.
    pub fn toggle_page(&mut self, page: PageId) -> PageToggle {
        match self.selected_pages.iter().position(|p| *p == page) {
            Some(_) if self.selected_pages.len() == 1 => {
                warn!(%page, "refusing to deselect the only selected page");
                PageToggle::KeptLast
            }
            Some(pos) => {
                self.selected_pages.remove(pos);
                debug!(%page, "page deselected");
                PageToggle::Removed
            }
            None => {
                self.selected_pages.push(page);
                debug!(%page, "page selected");
                PageToggle::Added
            }
        }
    }

    // -------------------------------------------------------------------------
    // Palette
    // -------------------------------------------------------------------------

    pub fn select_palette(&mut self, preset: &'static PresetPalette) {
        debug!(palette = preset.name, "palette selected");
        self.selected_palette = preset;
    }

    pub fn selected_palette(&self) -> &'static PresetPalette {
        self.selected_palette
    }

    /// Set one custom channel. Any string is accepted.
    pub fn set_custom_color(&mut self, channel: ColorChannel, value: impl Into<String>) {
        self.custom_colors.set(channel, value);
    }

    pub fn custom_colors(&self) -> &ColorPalette {
        &self.custom_colors
    }

    pub fn set_use_custom_colors(&mut self, enabled: bool) {
        self.use_custom_colors = enabled;
    }

    pub fn uses_custom_colors(&self) -> bool {
        self.use_custom_colors
    }

    /// The palette the output uses: custom channels or the selected preset.
    pub fn active_palette(&self) -> ColorPalette {
        if self.use_custom_colors {
            self.custom_colors.clone()
        } else {
            self.selected_palette.colors()
        }
    }

    // -------------------------------------------------------------------------
    // Floating buttons
    // -------------------------------------------------------------------------

    pub fn set_floating_button(&mut self, platform: Platform, patch: ButtonPatch) {
        debug!(%platform, ?patch, "floating button updated");
        self.floating_buttons.apply(platform, patch);
    }

    pub fn floating_buttons(&self) -> &FloatingButtons {
        &self.floating_buttons
    }

    // -------------------------------------------------------------------------
    // Bulk operations
    // -------------------------------------------------------------------------

    /// Restore every value to the session defaults.
    pub fn reset(&mut self) {
        debug!("state reset");
        *self = Self::new(self.defaults.clone());
    }

    /// Replace content, selection and buttons with the bundled example project.
    pub fn load_example(&mut self) {
        debug!("loading example project");
        crate::sample::apply(self);
    }

    /// Drop all stored page content. Used by bulk loaders that replace it wholesale.
    pub(crate) fn clear_page_data(&mut self) {
        for content in self.page_data.values_mut() {
            *content = PageContent::default();
        }
    }

    /// Replace all floating buttons at once.
    pub(crate) fn replace_floating_buttons(&mut self, buttons: FloatingButtons) {
        self.floating_buttons = buttons;
    }

    /// Replace the selection. Callers guarantee `pages` is non-empty and duplicate-free.
    pub(crate) fn replace_selection(&mut self, pages: Vec<PageId>) {
        debug_assert!(!pages.is_empty());
        self.selected_pages = pages;
    }

    pub fn defaults(&self) -> &StateDefaults {
        &self.defaults
    }
}
