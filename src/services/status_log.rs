use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

const MAX_ENTRIES: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

/// User-facing status panel, newest entry first. Every message is mirrored to
/// the `log` facade.
#[derive(Default)]
pub struct StatusLog {
    entries: RwLock<VecDeque<LogEntry>>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);

        let mut entries = self.entries.write().await;
        entries.push_front(LogEntry {
            at: Utc::now(),
            message,
        });
        entries.truncate(MAX_ENTRIES);
    }

    pub async fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().await.iter().cloned().collect()
    }
}
