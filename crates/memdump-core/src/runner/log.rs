//! Injected invocation log sink.
//!
//! Every external tool invocation appends its command line and captured
//! stdout to one artifact and captured stderr to another. The sink is
//! injected into [`super::operations::SystemRunner`] rather than touched as
//! ambient global state, so tests can capture log output in memory.
//!
//! Append failures are swallowed: a full disk must not abort a running
//! dump. Both file artifacts are append-only with no rotation or size limit.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

/// Which log artifact an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    /// Command lines and captured standard output.
    Output,
    /// Captured standard error.
    Error,
}

/// Sink for external tool invocation records.
pub trait InvocationLog: Send + Sync {
    /// Append `text` to the artifact for `category`. Must not fail the
    /// caller; implementations swallow their own errors.
    fn append(&self, category: LogCategory, text: &str);
}

/// File-backed sink writing `log.txt` / `error.txt` style artifacts.
#[derive(Debug, Clone)]
pub struct FileInvocationLog {
    log_path: PathBuf,
    error_log_path: PathBuf,
}

impl FileInvocationLog {
    pub fn new(log_path: impl Into<PathBuf>, error_log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            error_log_path: error_log_path.into(),
        }
    }

    fn path_for(&self, category: LogCategory) -> &PathBuf {
        match category {
            LogCategory::Output => &self.log_path,
            LogCategory::Error => &self.error_log_path,
        }
    }
}

impl InvocationLog for FileInvocationLog {
    fn append(&self, category: LogCategory, text: &str) {
        if text.is_empty() {
            return;
        }

        let path = self.path_for(category);
        let result = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(text.as_bytes()));

        if let Err(e) = result {
            warn!(
                event = "core.runner.log_append_failed",
                path = %path.display(),
                error = %e
            );
        }
    }
}

/// In-memory sink for tests.
#[derive(Debug, Default)]
pub struct MemoryInvocationLog {
    entries: Mutex<Vec<(LogCategory, String)>>,
}

impl MemoryInvocationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(LogCategory, String)> {
        self.entries.lock().unwrap().clone()
    }

    /// Concatenated text appended under the given category.
    pub fn text_for(&self, category: LogCategory) -> String {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == category)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl InvocationLog for MemoryInvocationLog {
    fn append(&self, category: LogCategory, text: &str) {
        if text.is_empty() {
            return;
        }
        self.entries.lock().unwrap().push((category, text.to_string()));
    }
}
