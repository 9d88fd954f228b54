//! Shared test utilities for the site-prompt test suite.
//!
//! Provides state builders and in-memory sinks so export actions can be
//! exercised without touching the filesystem or the system clipboard.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let state = named_state("Acme");
//! let mut sink = MemorySink::default();
//! let mut notifier = CollectingNotifier::default();
//! download(&state, &Schema::standard(), ExportFormat::Markdown, &mut sink, &mut notifier)?;
//! assert_eq!(sink.files[0].0, "Acme-prompt.md");
//! ```

use std::path::PathBuf;

use crate::export::{ClipboardSink, DownloadSink, ExportError};
use crate::state::ProjectState;

pub use crate::export::CollectingNotifier;

// =========================================================================
// State builders
// =========================================================================

/// A default state with only the project name set.
pub fn named_state(name: &str) -> ProjectState {
    let mut state = ProjectState::default();
    state.set_project_name(name);
    state
}

/// A state loaded with the bundled example project.
pub fn example_state() -> ProjectState {
    let mut state = ProjectState::default();
    state.load_example();
    state
}

// =========================================================================
// In-memory sinks
// =========================================================================

/// Records every save as `(file_name, mime_type, content)`.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: Vec<(String, String, String)>,
}

impl DownloadSink for MemorySink {
    fn save(
        &mut self,
        file_name: &str,
        mime_type: &str,
        content: &str,
    ) -> Result<PathBuf, ExportError> {
        self.files.push((
            file_name.to_string(),
            mime_type.to_string(),
            content.to_string(),
        ));
        Ok(PathBuf::from(file_name))
    }
}

/// Holds the last copied text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ExportError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

// =========================================================================
// Markdown assertions
// =========================================================================

/// Section sub-headers of one page block, in document order.
///
/// `page_header` is the uppercase page title line (`"### HOME"`).
pub fn section_headers<'a>(markdown: &'a str, page_header: &str) -> Vec<&'a str> {
    let Some(start) = markdown.find(&format!("{page_header}\n")) else {
        return Vec::new();
    };
    let block = &markdown[start..];
    let end = block.find("\n---\n").unwrap_or(block.len());
    block[..end]
        .lines()
        .filter(|l| l.starts_with("#### "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_headers_stop_at_page_rule() {
        let md = "### HOME\n\n#### Sección 1: Hero\n\n\n---\n\n### ABOUT US\n\n#### Sección 1: Intro\n";
        assert_eq!(section_headers(md, "### HOME"), vec!["#### Sección 1: Hero"]);
        assert_eq!(section_headers(md, "### ABOUT US"), vec!["#### Sección 1: Intro"]);
        assert!(section_headers(md, "### GALLERY").is_empty());
    }
}
