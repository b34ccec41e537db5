use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::Result;

/// Messages kept on disk before the oldest ones are dropped.
pub const DEFAULT_CAPACITY: usize = 1000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    Emoji,
    Gif,
}

/// One chat log entry. Field names follow the established on-disk format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub content: String,
    #[serde(rename = "is_user")]
    pub from_user: bool,
    #[serde(rename = "content_type")]
    pub kind: MessageKind,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_user(content: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            content: content.into(),
            from_user: true,
            kind,
            timestamp: Utc::now(),
        }
    }

    pub fn from_pet(content: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            content: content.into(),
            from_user: false,
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// Chat log backed by a JSON file, saved after every append. Loading never
/// fails: a missing or malformed file starts an empty log.
#[derive(Clone, Debug)]
pub struct ChatHistory {
    path: PathBuf,
    messages: Vec<ChatMessage>,
    capacity: usize,
}

impl ChatHistory {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        Self::load_with_capacity(path, DEFAULT_CAPACITY)
    }

    pub fn load_with_capacity(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let mut messages = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
                Ok(messages) => messages,
                Err(err) => {
                    log::warn!(
                        "chat history at {} is malformed, starting empty: {err}",
                        path.display()
                    );
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                log::warn!(
                    "chat history at {} is unreadable, starting empty: {err}",
                    path.display()
                );
                Vec::new()
            }
        };

        if messages.len() > capacity {
            messages.drain(..messages.len() - capacity);
        }

        Self {
            path,
            messages,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The `count` most recent entries, oldest first.
    pub fn recent(&self, count: usize) -> &[ChatMessage] {
        &self.messages[self.messages.len().saturating_sub(count)..]
    }

    /// Appends and saves. The oldest entries beyond capacity are dropped.
    pub fn push(&mut self, message: ChatMessage) -> Result<()> {
        self.messages.push(message);
        if self.messages.len() > self.capacity {
            self.messages.drain(..self.messages.len() - self.capacity);
        }
        self.save()
    }

    /// Empties the log, removes the old file and writes a fresh empty one.
    pub fn clear(&mut self) -> Result<()> {
        self.messages.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        self.save()
    }

    fn save(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.messages)?;
        fs::write(&self.path, raw)?;
        log::debug!(
            "saved {} chat messages to {}",
            self.messages.len(),
            self.path.display()
        );
        Ok(())
    }
}
