//! # site-prompt
//!
//! Describe a multi-page website once (pages, section copy, palette,
//! languages, social buttons) and get a single prompt document that tells
//! an AI assistant exactly what site to build. The document comes in two
//! forms: a Markdown prompt and a structural JSON export.
//!
//! # Architecture: Store → Compiler → Sinks
//!
//! ```text
//! input (form / project file)
//!      │  set_field, toggle_page, select_palette, ...
//!      ▼
//! ProjectState ──compile()──▶ Compiled { markdown, json }
//!                                    │
//!                     download / clipboard / preview sinks
//! ```
//!
//! - The **store** ([`state::ProjectState`]) is one owned value mutated only
//!   through its methods. There is no global state.
//! - The **compiler** ([`compile::compile`]) is a pure function of the state
//!   and the [`schema::Schema`]. It never fails and is byte-for-byte
//!   deterministic.
//! - The **sinks** ([`export`], [`preview`]) are traits, so the CLI writes to
//!   disk and the clipboard while tests capture output in memory.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`schema`] | Five page templates × ten sections, field names, field kinds and input hints |
//! | [`palette`] | The fixed catalog of five preset color palettes |
//! | [`types`] | Palette, floating buttons and page data, serialized straight into the JSON export |
//! | [`naming`] | Field-name humanization and derived file names |
//! | [`state`] | The project state store and its mutation operations |
//! | [`sample`] | The bundled example project behind `load_example` |
//! | [`compile`] | The document compiler: state → Markdown + JSON |
//! | [`snippets`] | HTML/JS code blocks embedded in the Markdown, built with Maud |
//! | [`export`] | Export actions, download/clipboard sinks and notifications |
//! | [`preview`] | Terminal and HTML preview sinks |
//! | [`input`] | TOML project files applied through the store |
//! | [`config`] | `site-prompt.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Insertion Order Is the Document Order
//!
//! Pages render in the order they were selected, sections and fields in the
//! order they were first written. The page data is stored in small
//! vector-backed maps rather than hash maps, and project files are parsed
//! with TOML key order preserved, so the document never depends on hashing
//! or sorting.
//!
//! ## Empty Equals Absent
//!
//! The store keeps empty strings as written, but every reader treats them as
//! missing: [`state::ProjectState::field`] returns `""` for unset fields and
//! the Markdown renderer skips empty values and sections without a single
//! filled value. The JSON export keeps everything as stored.
//!
//! ## Permissive Colors
//!
//! Palette channels are plain strings copied verbatim into the output. No
//! hex validation happens anywhere.
//!
//! ## Maud for Snippets
//!
//! The HTML code blocks inside the prompt are built with
//! [Maud](https://maud.lambda.xyz/) for their structure. User values go in
//! verbatim through `PreEscaped`: a URL like `watch?v=x&t=1` reads the same
//! in the button listing and in the anchor that follows it.

pub mod compile;
pub mod config;
pub mod export;
pub mod input;
pub mod naming;
pub mod output;
pub mod palette;
pub mod preview;
pub mod sample;
pub mod schema;
pub mod snippets;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
