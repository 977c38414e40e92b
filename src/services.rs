// 🔌 Host services - clipboard and "open in a new context"
//
// The shell only talks to these traits. System backends shell out to the
// platform's usual helpers; the recording fakes are used in tests.

use std::cell::RefCell;
use std::io::Write;
use std::process::{Command, Stdio};
use std::rc::Rc;
use thiserror::Error;

use crate::preferences::Preferences;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard helper found (tried {0})")]
    NoBackend(String),

    #[error("clipboard helper `{program}` failed: {reason}")]
    Helper { program: String, reason: String },

    #[error("clipboard i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no opener found for {0}")]
    NoBackend(String),

    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}")]
    Exit { program: String, status: String },
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

pub trait Opener {
    /// Hand an external URL to the host (browser, PDF viewer, ...)
    fn open(&mut self, url: &str) -> Result<(), OpenError>;
}

// ============================================================================
// SYSTEM BACKENDS
// ============================================================================

/// Pipes text into the first clipboard helper that exists
pub struct CommandClipboard {
    candidates: Vec<(&'static str, Vec<&'static str>)>,
}

impl CommandClipboard {
    pub fn new() -> Self {
        let candidates = if cfg!(target_os = "macos") {
            vec![("pbcopy", vec![])]
        } else if cfg!(target_os = "windows") {
            vec![("clip", vec![])]
        } else {
            vec![
                ("wl-copy", vec![]),
                ("xclip", vec!["-selection", "clipboard"]),
                ("xsel", vec!["--clipboard", "--input"]),
            ]
        };
        Self::with_candidates(candidates)
    }

    /// Helpers tried in order, each as `(program, args)`
    pub fn with_candidates(candidates: Vec<(&'static str, Vec<&'static str>)>) -> Self {
        CommandClipboard { candidates }
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error: Option<ClipboardError> = None;

        for (program, args) in &self.candidates {
            let child = Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            let mut child = match child {
                Ok(child) => child,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
                Err(err) => {
                    last_error = Some(err.into());
                    continue;
                }
            };

            // Dropping stdin closes the pipe so the helper sees EOF
            let written = match child.stdin.take() {
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            };
            let status = child.wait()?;

            match (written, status.success()) {
                (Ok(()), true) => return Ok(()),
                (Err(err), _) => {
                    tracing::debug!(program = *program, error = %err, "clipboard helper rejected input");
                    last_error = Some(err.into());
                }
                (Ok(()), false) => {
                    tracing::debug!(program = *program, %status, "clipboard helper failed");
                    last_error = Some(ClipboardError::Helper {
                        program: program.to_string(),
                        reason: status.to_string(),
                    });
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            let tried: Vec<&str> = self.candidates.iter().map(|(p, _)| *p).collect();
            ClipboardError::NoBackend(tried.join(", "))
        }))
    }
}

/// Runs the platform opener (`xdg-open`, `open`, `start`) and reaps it
#[derive(Debug, Default)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        let (program, args): (&str, Vec<&str>) = if cfg!(target_os = "macos") {
            ("open", vec![url])
        } else if cfg!(target_os = "windows") {
            ("cmd", vec!["/C", "start", "", url])
        } else {
            ("xdg-open", vec![url])
        };
        run_opener(program, &args, url)
    }
}

/// The platform openers hand off to the viewer and return, so waiting is short
fn run_opener(program: &str, args: &[&str], url: &str) -> Result<(), OpenError> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                OpenError::NoBackend(url.to_string())
            } else {
                OpenError::Launch {
                    program: program.to_string(),
                    source,
                }
            }
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(OpenError::Exit {
            program: program.to_string(),
            status: status.to_string(),
        })
    }
}

// ============================================================================
// RECORDING FAKES
// ============================================================================

/// Clipboard that remembers writes; can be switched to fail
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        MemoryClipboard {
            contents: Rc::default(),
            fail: true,
        }
    }

    /// Most recent successful write
    pub fn last(&self) -> Option<String> {
        self.contents.borrow().last().cloned()
    }

    pub fn writes(&self) -> usize {
        self.contents.borrow().len()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::NoBackend("memory (disabled)".to_string()));
        }
        self.contents.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Opener that records requested URLs; can be switched to fail
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        RecordingOpener {
            opened: Rc::default(),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Opener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        if self.fail {
            return Err(OpenError::NoBackend(url.to_string()));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

// ============================================================================
// SERVICE BUNDLE
// ============================================================================

/// Everything the shell needs from its host, injected at construction
pub struct Services {
    pub prefs: Preferences,
    pub clipboard: Box<dyn Clipboard>,
    pub opener: Box<dyn Opener>,
}

impl Services {
    pub fn system(prefs: Preferences) -> Self {
        Services {
            prefs,
            clipboard: Box::new(CommandClipboard::new()),
            opener: Box::new(SystemOpener),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_shares_contents_between_clones() {
        let shared = MemoryClipboard::new();
        let mut clipboard = shared.clone();
        clipboard.write_text("https://example.com").unwrap();
        assert_eq!(shared.last(), Some("https://example.com".to_string()));
        assert_eq!(shared.writes(), 1);
    }

    #[test]
    fn test_failing_clipboard() {
        let mut clipboard = MemoryClipboard::failing();
        assert!(clipboard.write_text("x").is_err());
        assert_eq!(clipboard.writes(), 0);
    }

    #[test]
    fn test_recording_opener() {
        let shared = RecordingOpener::new();
        let mut opener = shared.clone();
        opener.open("https://github.com").unwrap();
        assert_eq!(shared.opened(), vec!["https://github.com".to_string()]);
    }

    #[test]
    fn test_failing_opener_records_nothing() {
        let mut opener = RecordingOpener::failing();
        assert!(matches!(opener.open("https://github.com"), Err(OpenError::NoBackend(_))));
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn test_clipboard_without_helpers_reports_no_backend() {
        let mut clipboard = CommandClipboard::with_candidates(vec![("folio-no-such-helper", vec![])]);
        match clipboard.write_text("x") {
            Err(ClipboardError::NoBackend(tried)) => assert_eq!(tried, "folio-no-such-helper"),
            other => panic!("expected NoBackend, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_clipboard_falls_through_failed_helper() {
        let mut clipboard = CommandClipboard::with_candidates(vec![("false", vec![]), ("cat", vec![])]);
        assert!(clipboard.write_text("https://example.com").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_clipboard_reports_last_helper_failure() {
        let mut clipboard = CommandClipboard::with_candidates(vec![
            ("folio-no-such-helper", vec![]),
            ("false", vec![]),
        ]);
        assert!(matches!(
            clipboard.write_text("x"),
            Err(ClipboardError::Helper { .. }) | Err(ClipboardError::Io(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_opener_exit_status_is_checked() {
        assert!(run_opener("true", &[], "https://example.com").is_ok());
        match run_opener("false", &[], "https://example.com") {
            Err(OpenError::Exit { program, .. }) => assert_eq!(program, "false"),
            other => panic!("expected Exit, got {:?}", other),
        }
        assert!(matches!(
            run_opener("folio-no-such-opener", &[], "https://example.com"),
            Err(OpenError::NoBackend(_))
        ));
    }
}
