//! System clipboard access and the copy-confirmation state machine.
//!
//! [`copy_to_clipboard`] pipes text into the platform's clipboard tool. [`CopyFeedback`]
//! tracks the label a "copy" control shows: a successful copy switches it to
//! [`COPIED_LABEL`] until a deadline passes, a new copy restarts the deadline, and a failed
//! copy changes nothing. The HTML detail page runs the same machine in its inline script,
//! fed with these labels and the configured duration.

use crate::error::{DailyError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

pub const IDLE_LABEL: &str = "Copy BibTeX";
pub const COPIED_LABEL: &str = "Copied!";
pub const DEFAULT_RESET: Duration = Duration::from_millis(2000);

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses wl-copy, xclip or xsel, first one that starts
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let candidates: &[(&str, &[&str])] = if cfg!(target_os = "macos") {
        &[("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        &[("clip", &[])]
    } else if cfg!(target_os = "linux") {
        &[
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ]
    } else {
        return Err(DailyError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ));
    };

    let mut last_error = None;
    for (program, args) in candidates {
        match Command::new(program).args(*args).stdin(Stdio::piped()).spawn() {
            Ok(mut child) => {
                if let Some(mut stdin) = child.stdin.take() {
                    stdin.write_all(text.as_bytes()).map_err(|e| {
                        DailyError::Clipboard(format!("Failed to write to {}: {}", program, e))
                    })?;
                }
                let status = child.wait().map_err(|e| {
                    DailyError::Clipboard(format!("Failed to wait for {}: {}", program, e))
                })?;
                tracing::debug!(program, success = status.success(), "clipboard command");
                return if status.success() {
                    Ok(())
                } else {
                    Err(DailyError::Clipboard(format!("{} exited with error", program)))
                };
            }
            Err(e) => last_error = Some(format!("{}: {}", program, e)),
        }
    }

    Err(DailyError::Clipboard(format!(
        "No clipboard command could be started ({})",
        last_error.unwrap_or_default()
    )))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copied { until: Instant },
}

#[derive(Debug, Clone)]
pub struct CopyFeedback {
    state: CopyState,
    reset_after: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_RESET)
    }
}

impl CopyFeedback {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            state: CopyState::Idle,
            reset_after,
        }
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    /// Feeds the outcome of a copy attempt made at `now`.
    pub fn record<T, E>(&mut self, outcome: &std::result::Result<T, E>, now: Instant) {
        if outcome.is_ok() {
            self.state = CopyState::Copied {
                until: now + self.reset_after,
            };
        }
    }

    /// Returns true when the deadline passed and the state went back to idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            CopyState::Copied { until } if now >= until => {
                self.state = CopyState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.state = CopyState::Idle;
    }

    pub fn is_copied(&self) -> bool {
        matches!(self.state, CopyState::Copied { .. })
    }

    pub fn label(&self) -> &'static str {
        match self.state {
            CopyState::Idle => IDLE_LABEL,
            CopyState::Copied { .. } => COPIED_LABEL,
        }
    }
}
