//! Export actions and the sinks they write to.
//!
//! The actions ([`download`], [`copy_to_clipboard`]) compile the current
//! state, hand the text to a sink and report the result through a
//! [`Notifier`]. Sinks are traits so the CLI can use the filesystem and the
//! system clipboard while tests capture everything in memory.
//!
//! ## Empty Project Name
//!
//! [`download`] refuses to run without a project name: it sends exactly one
//! error notification, touches no sink and returns [`ExportOutcome::Rejected`].
//! The state is only ever borrowed immutably, so it cannot change either.
//!
//! ## Atomic Writes
//!
//! [`DirectorySink`] writes to a hidden temporary file beside the target
//! and renames it into place. A failed export never leaves a partial file
//! under the final name.

use crate::compile::{Compiled, compile};
use crate::naming::export_file_name;
use crate::schema::Schema;
use crate::state::ProjectState;
use clap::ValueEnum;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

/// The two exported artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[value(name = "md", alias = "markdown")]
    Markdown,
    #[value(name = "json")]
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Json => "application/json",
        }
    }
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// An advisory message for the user. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    fn success(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn missing_project_name() -> Self {
        Self {
            title: "Error".to_string(),
            description: "Por favor ingresa un nombre de proyecto".to_string(),
            kind: NotificationKind::Error,
        }
    }

    pub fn downloaded(file_name: &str) -> Self {
        Self::success("Éxito", format!("Prompt descargado como {file_name}"))
    }

    pub fn copied() -> Self {
        Self::success("Copiado", "Prompt copiado al portapapeles")
    }

    pub fn example_loaded() -> Self {
        Self::success("¡Listo!", "Todos los campos han sido llenados con datos de ejemplo")
    }
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Keeps every notification, in order.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    pub notifications: Vec<Notification>,
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Persists a named artifact. Returns where it ended up.
pub trait DownloadSink {
    fn save(&mut self, file_name: &str, mime_type: &str, content: &str)
    -> Result<PathBuf, ExportError>;
}

pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ExportError>;
}

/// Saves downloads into one directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn save(
        &mut self,
        file_name: &str,
        mime_type: &str,
        content: &str,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(file_name);
        let tmp = self.dir.join(format!(".{file_name}.tmp"));
        debug!(path = %target.display(), mime_type, bytes = content.len(), "writing export");
        if let Err(e) = fs::write(&tmp, content) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        fs::rename(&tmp, &target)?;
        Ok(target)
    }
}

/// Clipboard commands tried in order; the first one that runs wins.
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

/// Pipes text into whichever platform clipboard tool is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn pipe_into(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        Ok(child.wait()?.success())
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ExportError> {
        for (program, args) in CLIPBOARD_COMMANDS {
            match Self::pipe_into(program, args, text) {
                Ok(true) => {
                    debug!(program, "copied to clipboard");
                    return Ok(());
                }
                Ok(false) => warn!(program, "clipboard command failed"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!(program, error = %e, "clipboard command failed"),
            }
        }
        Err(ExportError::Clipboard(
            "none of wl-copy, xclip, xsel, pbcopy or clip worked".to_string(),
        ))
    }
}

// =============================================================================
// Actions
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved {
        path: PathBuf,
        file_name: String,
        bytes: usize,
        /// Hex SHA-256 of the written content.
        fingerprint: String,
    },
    /// Precondition failed; nothing was written.
    Rejected,
}

/// The export trigger: validate, compile, save, notify.
pub fn download(
    state: &ProjectState,
    schema: &Schema,
    format: ExportFormat,
    sink: &mut dyn DownloadSink,
    notifier: &mut dyn Notifier,
) -> Result<ExportOutcome, ExportError> {
    if state.project_name.is_empty() {
        warn!("export rejected: project name is empty");
        notifier.notify(Notification::missing_project_name());
        return Ok(ExportOutcome::Rejected);
    }

    let compiled = compile(state, schema);
    let file_name = export_file_name(&state.project_name, format.extension());
    let content = compiled.text(format);
    let path = sink.save(&file_name, format.mime_type(), content)?;
    info!(path = %path.display(), "prompt exported");
    notifier.notify(Notification::downloaded(&file_name));

    Ok(ExportOutcome::Saved {
        path,
        file_name,
        bytes: content.len(),
        fingerprint: compiled.fingerprint(format),
    })
}

/// Copy the compiled document. No project-name check, matching the copy button.
pub fn copy_to_clipboard(
    state: &ProjectState,
    schema: &Schema,
    format: ExportFormat,
    sink: &mut dyn ClipboardSink,
    notifier: &mut dyn Notifier,
) -> Result<Compiled, ExportError> {
    let compiled = compile(state, schema);
    sink.copy(compiled.text(format))?;
    notifier.notify(Notification::copied());
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn empty_name_is_rejected_once() {
        let state = ProjectState::default();
        let mut sink = MemorySink::default();
        let mut notifier = CollectingNotifier::default();
        let outcome = download(
            &state,
            &Schema::standard(),
            ExportFormat::Markdown,
            &mut sink,
            &mut notifier,
        )
        .unwrap();
        assert_eq!(outcome, ExportOutcome::Rejected);
        assert!(sink.files.is_empty());
        assert_eq!(notifier.notifications, vec![Notification::missing_project_name()]);
    }

    #[test]
    fn download_names_file_from_project() {
        let state = named_state("My Site");
        let mut sink = MemorySink::default();
        let mut notifier = CollectingNotifier::default();
        let outcome = download(
            &state,
            &Schema::standard(),
            ExportFormat::Json,
            &mut sink,
            &mut notifier,
        )
        .unwrap();
        let ExportOutcome::Saved { file_name, .. } = outcome else {
            panic!("expected a saved export");
        };
        assert_eq!(file_name, "My-Site-prompt.json");
        assert_eq!(sink.files[0].0, "My-Site-prompt.json");
        assert_eq!(sink.files[0].1, "application/json");
        assert_eq!(
            notifier.notifications[0].description,
            "Prompt descargado como My-Site-prompt.json"
        );
    }

    #[test]
    fn directory_sink_writes_atomically() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut sink = DirectorySink::new(tmp.path().join("out"));
        let path = sink.save("a-prompt.md", "text/markdown", "# hi\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# hi\n");
        let names: Vec<_> = fs::read_dir(sink.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a-prompt.md")]);
    }

    #[test]
    fn directory_sink_overwrites_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut sink = DirectorySink::new(tmp.path());
        sink.save("x.md", "text/markdown", "old").unwrap();
        let path = sink.save("x.md", "text/markdown", "new").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn copy_sends_markdown_and_notifies() {
        let state = ProjectState::default();
        let mut clipboard = MemoryClipboard::default();
        let mut notifier = CollectingNotifier::default();
        let compiled = copy_to_clipboard(
            &state,
            &Schema::standard(),
            ExportFormat::Markdown,
            &mut clipboard,
            &mut notifier,
        )
        .unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some(compiled.markdown.as_str()));
        assert_eq!(notifier.notifications, vec![Notification::copied()]);
    }

    #[test]
    fn format_metadata() {
        assert_eq!(ExportFormat::Markdown.extension(), "md");
        assert_eq!(ExportFormat::Markdown.mime_type(), "text/markdown");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    }
}
