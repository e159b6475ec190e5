// chat-slash - Slash commands for a terminal chat input
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::{ChatId, ChatMessage};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ChatRecord {
    #[serde(default)]
    messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    draft: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    chats: HashMap<ChatId, ChatRecord>,
}

/// Per-conversation message snapshots and unsent drafts.
///
/// Mutations only touch memory; call [`ChatStore::save`] to flush to disk.
#[derive(Debug, Default)]
pub struct ChatStore {
    path: Option<PathBuf>,
    chats: HashMap<ChatId, ChatRecord>,
    dirty: bool,
}

impl ChatStore {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the JSON store at `path`. A missing file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let chats = match std::fs::read_to_string(&path) {
            Ok(raw) => {
                let file: StoreFile = serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse chat store {}", path.display()))?;
                file.chats
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read chat store {}", path.display()));
            }
        };
        tracing::debug!(path = %path.display(), chats = chats.len(), "Loaded chat store");
        Ok(Self { path: Some(path), chats, dirty: false })
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn messages(&self, chat_id: ChatId) -> &[ChatMessage] {
        self.chats.get(&chat_id).map_or(&[], |record| record.messages.as_slice())
    }

    /// Replace the stored message snapshot for a conversation.
    pub fn update_messages(&mut self, chat_id: ChatId, messages: &[ChatMessage]) {
        self.chats.entry(chat_id).or_default().messages = messages.to_vec();
        self.dirty = true;
    }

    #[must_use]
    pub fn draft(&self, chat_id: ChatId) -> &str {
        self.chats.get(&chat_id).map_or("", |record| record.draft.as_str())
    }

    pub fn save_draft(&mut self, chat_id: ChatId, text: impl Into<String>) {
        let text = text.into();
        let record = self.chats.entry(chat_id).or_default();
        if record.draft != text {
            record.draft = text;
            self.dirty = true;
        }
    }

    pub fn clear_draft(&mut self, chat_id: ChatId) {
        if let Some(record) = self.chats.get_mut(&chat_id)
            && !record.draft.is_empty()
        {
            record.draft.clear();
            self.dirty = true;
        }
    }

    /// Write pending changes. No-op for in-memory stores or when nothing changed.
    pub fn save(&mut self) -> anyhow::Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let file = StoreFile { chats: self.chats.clone() };
        let json = serde_json::to_string_pretty(&file).context("failed to serialize chat store")?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json).with_context(|| format!("failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, path)
            .with_context(|| format!("failed to replace {}", path.display()))?;

        self.dirty = false;
        tracing::debug!(path = %path.display(), "Saved chat store");
        Ok(())
    }
}
