//! Append-only JSON-lines chat log.
//!
//! Every outbound message is written as one [`ChatLogEntry`] object per
//! line to `{data_dir}/chat_logs.jsonl`. Writes are serialized through an
//! async mutex so concurrent accounts never interleave partial lines.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use banter_core::session::ChatLog;
use banter_types::account::AccountId;
use banter_types::chat::ChatLogEntry;
use banter_types::error::LogError;

/// File name of the chat log inside the data directory.
pub const CHAT_LOG_FILE: &str = "chat_logs.jsonl";

pub struct JsonlChatLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlChatLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Log at `{data_dir}/chat_logs.jsonl`.
    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(CHAT_LOG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry.
    pub async fn append(&self, entry: &ChatLogEntry) -> Result<(), LogError> {
        let mut line =
            serde_json::to_string(entry).map_err(|e| LogError::Serialization(e.to_string()))?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LogError::Io(e.to_string()))?;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| LogError::Io(format!("{}: {e}", self.path.display())))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| LogError::Io(e.to_string()))?;
        file.flush().await.map_err(|e| LogError::Io(e.to_string()))?;
        Ok(())
    }

    /// Read back every entry, skipping lines that fail to parse. A missing
    /// file reads as empty.
    pub async fn read_all(&self) -> Result<Vec<ChatLogEntry>, LogError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LogError::Io(e.to_string())),
        };

        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str::<ChatLogEntry>(line) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(path = %self.path.display(), %err, "Skipping malformed chat log line");
                    None
                }
            })
            .collect())
    }

    /// The last `limit` entries in write order.
    pub async fn read_recent(&self, limit: usize) -> Result<Vec<ChatLogEntry>, LogError> {
        let mut entries = self.read_all().await?;
        let skip = entries.len().saturating_sub(limit);
        entries.drain(..skip);
        Ok(entries)
    }
}

impl ChatLog for JsonlChatLog {
    async fn log_message(
        &self,
        account: &AccountId,
        text: &str,
        persona: &str,
    ) -> Result<(), LogError> {
        self.append(&ChatLogEntry::new(account.as_str(), text, persona))
            .await
    }
}
