//! Bounded conversation history, persisted as a hidden JSON file.
//!
//! The store keeps an ordered log of completed exchanges, oldest first,
//! capped at `max_entries` with FIFO eviction. Every write replaces the
//! whole file. Separate invocations sharing the same file are not
//! coordinated; a concurrent run can overwrite another's append. The store
//! is single-user and low-frequency, so no locking is applied.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Default cap on retained exchanges.
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// File name used when the store lives in the working directory.
pub const DEFAULT_FILE_NAME: &str = ".advisor_history.json";

/// One completed request/response exchange. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub request_text: String,
    pub response_text: String,
}

impl ConversationEntry {
    pub fn new(request_text: impl Into<String>, response_text: impl Into<String>) -> Self {
        Self {
            request_text: request_text.into(),
            response_text: response_text.into(),
        }
    }
}

/// Ordered log of exchanges, oldest first.
pub type ConversationLog = Vec<ConversationEntry>;

/// Durable, size-capped record of prior exchanges.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    max_entries: usize,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }

    /// Store backed by the default hidden file in the working directory.
    pub fn in_current_dir() -> Self {
        Self::new(PathBuf::from(DEFAULT_FILE_NAME))
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Read the backing file. A missing file is an empty log, not an error.
    ///
    /// Unreadable files surface as `Io`; files that exist but do not parse
    /// as a log surface as `Serialization`. Corrupt history is never
    /// silently discarded; `reset` is the escape hatch.
    pub fn load(&self) -> Result<ConversationLog> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ConversationLog::new())
            }
            Err(err) => return Err(err.into()),
        };
        let log: ConversationLog = serde_json::from_str(&raw)?;
        Ok(log)
    }

    /// Persist an empty log unconditionally, discarding prior contents.
    pub fn reset(&self) -> Result<ConversationLog> {
        let log = ConversationLog::new();
        self.persist(&log)?;
        debug!(path = %self.path.display(), "history reset");
        Ok(log)
    }

    /// Append one exchange, evicting the oldest entries beyond the cap,
    /// and persist the result by full overwrite.
    pub fn append(&self, entry: ConversationEntry) -> Result<ConversationLog> {
        let mut log = self.load()?;
        log.push(entry);
        if log.len() > self.max_entries {
            let excess = log.len() - self.max_entries;
            log.drain(..excess);
        }
        self.persist(&log)?;
        debug!(
            path = %self.path.display(),
            entries = log.len(),
            "history appended"
        );
        Ok(log)
    }

    fn persist(&self, log: &ConversationLog) -> Result<()> {
        let serialized = serde_json::to_string_pretty(log)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}
