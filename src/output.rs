//! CLI output formatting for all commands.
//!
//! # Information-First Display
//!
//! Output is **content-centric, not file-centric**. The primary display for
//! every entity (page, section, field) is its display name and positional
//! index; identifiers and paths are secondary context on indented lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Project: Acme
//!     Type: Corporativo
//!     Languages: Español, Inglés
//!     Palette: Ocean Blue
//!
//! Pages
//! 001 Home (2 of 10 sections, 5 fields)
//!     Hero: 3 fields
//!     Faq: 2 fields
//! 002 Contact (no content)
//!
//! Stored, not selected
//!     About Us (1 of 10 sections, 1 field)
//!
//! Floating buttons
//!     whatsapp → https://wa.me/34912345678?text=Hola
//! ```
//!
//! ## Build
//!
//! ```text
//! Acme-prompt.md (text/markdown, 18234 bytes)
//!     Path: out/Acme-prompt.md
//!     SHA-256: 3f1c…
//! ```
//!
//! ## Schema
//!
//! ```text
//! 001 Home (home)
//!     001 Hero Principal (hero)
//!         titulo: short, "Ingresa titulo..."
//!         imagenes: images, "Ej: hero-bg.jpg, feature1.png, icon1.svg"
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::export::{ExportFormat, Notification, NotificationKind, Notifier};
use crate::naming::capitalize;
use crate::schema::{PageId, Schema};
use crate::state::ProjectState;
use crate::types::PageContent;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// `(2 of 10 sections, 5 fields)` or `(no content)`.
fn fill_summary(content: &PageContent, section_total: usize) -> String {
    let filled_sections = content.sections().filter(|(_, s)| s.has_content()).count();
    let filled_fields: usize = content.sections().map(|(_, s)| s.filled().count()).sum();
    if filled_fields == 0 {
        "(no content)".to_string()
    } else {
        format!(
            "({filled_sections} of {section_total} sections, {})",
            plural(filled_fields, "field")
        )
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(state: &ProjectState, schema: &Schema) -> Vec<String> {
    let mut lines = Vec::new();

    let name = if state.project_name.is_empty() {
        "(unnamed)"
    } else {
        state.project_name.as_str()
    };
    lines.push(format!("Project: {name}"));
    if !state.website_type.is_empty() {
        lines.push(format!("{}Type: {}", indent(1), state.website_type));
    }
    lines.push(format!("{}Languages: {}", indent(1), state.languages));
    if state.uses_custom_colors() {
        lines.push(format!(
            "{}Palette: custom ({})",
            indent(1),
            state.custom_colors().primary
        ));
    } else {
        lines.push(format!(
            "{}Palette: {}",
            indent(1),
            state.selected_palette().name
        ));
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    for (i, &page) in state.selected_pages().iter().enumerate() {
        let content = state.page_content(page);
        lines.push(format!(
            "{} {} {}",
            format_index(i + 1),
            schema.display_name(page),
            fill_summary(content, schema.sections_for(page).len())
        ));
        for (section, values) in content.sections() {
            let filled = values.filled().count();
            if filled > 0 {
                lines.push(format!(
                    "{}{}: {}",
                    indent(1),
                    capitalize(section),
                    plural(filled, "field")
                ));
            }
        }
    }

    let stored: Vec<PageId> = PageId::ALL
        .into_iter()
        .filter(|p| !state.is_selected(*p))
        .filter(|p| state.page_content(*p).sections().any(|(_, s)| s.has_content()))
        .collect();
    if !stored.is_empty() {
        lines.push(String::new());
        lines.push("Stored, not selected".to_string());
        for page in stored {
            lines.push(format!(
                "{}{} {}",
                indent(1),
                schema.display_name(page),
                fill_summary(state.page_content(page), schema.sections_for(page).len())
            ));
        }
    }

    let buttons = state.floating_buttons();
    let enabled = buttons.enabled();
    if !enabled.is_empty() {
        lines.push(String::new());
        lines.push("Floating buttons".to_string());
        for platform in enabled {
            lines.push(format!("{}{} → {}", indent(1), platform, buttons.href(platform)));
        }
    }

    lines
}

pub fn print_check_output(state: &ProjectState, schema: &Schema) {
    for line in format_check_output(state, schema) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(
    file_name: &str,
    path: &Path,
    format: ExportFormat,
    bytes: usize,
    fingerprint: &str,
) -> Vec<String> {
    vec![
        format!("{} ({}, {} bytes)", file_name, format.mime_type(), bytes),
        format!("{}Path: {}", indent(1), path.display()),
        format!("{}SHA-256: {}", indent(1), fingerprint),
    ]
}

pub fn print_build_output(
    file_name: &str,
    path: &Path,
    format: ExportFormat,
    bytes: usize,
    fingerprint: &str,
) {
    for line in format_build_output(file_name, path, format, bytes, fingerprint) {
        println!("{}", line);
    }
}

// ============================================================================
// Schema
// ============================================================================

pub fn format_schema_output(schema: &Schema) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, page) in schema.pages().iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            page.display_name,
            page.id
        ));
        for (j, section) in page.sections.iter().enumerate() {
            lines.push(format!(
                "{}{} {} ({})",
                indent(1),
                format_index(j + 1),
                section.name,
                section.id
            ));
            for field in section.fields {
                lines.push(format!(
                    "{}{}: {}, \"{}\"",
                    indent(2),
                    field,
                    page.field_kind(field).label(),
                    page.input_hint(field)
                ));
            }
        }
    }
    lines
}

pub fn print_schema_output(schema: &Schema) {
    for line in format_schema_output(schema) {
        println!("{}", line);
    }
}

// ============================================================================
// Notifications
// ============================================================================

pub fn format_notification(notification: &Notification) -> String {
    let mark = match notification.kind {
        NotificationKind::Success => "✓",
        NotificationKind::Error => "✗",
    };
    format!("{mark} {}: {}", notification.title, notification.description)
}

/// Prints notifications to stderr so stdout stays clean for previews.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, notification: Notification) {
        eprintln!("{}", format_notification(&notification));
    }
}
