//! Preview sinks: show a compiled prompt without exporting it.
//!
//! - [`TerminalPreview`] writes one representation to any writer (stdout in the CLI)
//! - [`HtmlPreview`] writes a standalone page holding both representations,
//!   switchable with `<details>` panels so it works without JavaScript
//!
//! The HTML page renders the Markdown with pulldown-cmark and shows the JSON
//! verbatim in a `<pre>`. Raw HTML inside the Markdown (a field value such as
//! `<img onerror=...>`) is rendered as text, never as live markup.

use crate::compile::Compiled;
use crate::export::{ExportError, ExportFormat};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub trait PreviewSink {
    /// Display the compiled pair, starting on `format`.
    fn present(&mut self, compiled: &Compiled, format: ExportFormat) -> Result<(), ExportError>;
}

/// Prints one representation as plain text.
pub struct TerminalPreview<W: Write> {
    out: W,
}

impl<W: Write> TerminalPreview<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PreviewSink for TerminalPreview<W> {
    fn present(&mut self, compiled: &Compiled, format: ExportFormat) -> Result<(), ExportError> {
        let text = compiled.text(format);
        self.out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Writes a self-contained HTML preview page to a file.
pub struct HtmlPreview {
    path: PathBuf,
}

impl HtmlPreview {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreviewSink for HtmlPreview {
    fn present(&mut self, compiled: &Compiled, format: ExportFormat) -> Result<(), ExportError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let page = render_preview_page(compiled, format);
        debug!(path = %self.path.display(), "writing HTML preview");
        fs::write(&self.path, page.into_string())?;
        Ok(())
    }
}

const PREVIEW_CSS: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f1f5f9; color: #1e293b; }
header { padding: 1rem 2rem; background: #fff; border-bottom: 1px solid #e2e8f0; }
header h1 { margin: 0; font-size: 1.25rem; }
header p { margin: 0.25rem 0 0; color: #64748b; }
main { max-width: 60rem; margin: 1.5rem auto; padding: 0 1rem; }
details { background: #fff; border: 1px solid #e2e8f0; border-radius: 0.5rem; margin-bottom: 1rem; }
summary { cursor: pointer; padding: 0.75rem 1rem; font-weight: 600; }
.panel { padding: 0 1.5rem 1.5rem; overflow-x: auto; }
pre { white-space: pre-wrap; font-size: 0.85rem; background: #f8fafc; padding: 1rem; border-radius: 0.25rem; }
"#;

fn render_markdown_html(markdown: &str) -> String {
    let parser = Parser::new(markdown).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 2);
    md_html::push_html(&mut out, parser);
    out
}

/// The full preview page. The panel for `format` starts open.
pub fn render_preview_page(compiled: &Compiled, format: ExportFormat) -> Markup {
    let name = &compiled.prompt.project_name;
    let markdown_html = render_markdown_html(&compiled.markdown);
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Vista Previa del Prompt" }
                style { (PreEscaped(PREVIEW_CSS)) }
            }
            body {
                header {
                    h1 { "Vista Previa del Prompt" }
                    @if !name.is_empty() {
                        p { (name) }
                    }
                }
                main {
                    details id="markdown" open[format == ExportFormat::Markdown] {
                        summary { "Markdown" }
                        article.panel { (PreEscaped(markdown_html)) }
                    }
                    details id="json" open[format == ExportFormat::Json] {
                        summary { "JSON" }
                        div.panel { pre { (compiled.json) } }
                    }
                }
            }
        }
    }
}
