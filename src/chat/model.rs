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

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh id for messages created locally before the server assigns one.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One content part of a message. Only text parts feed `/compact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MessagePart {
    Text { text: String },
    Reasoning { text: String },
    /// Tool calls, files, sources and anything else this shell does not render.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: MessageRole,
    #[serde(default)]
    pub parts: Vec<MessagePart>,
}

impl ChatMessage {
    pub fn text(id: MessageId, role: MessageRole, text: impl Into<String>) -> Self {
        Self { id, role, parts: vec![MessagePart::Text { text: text.into() }] }
    }

    /// First `text` part, skipping reasoning and other kinds.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            MessagePart::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: ChatId,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_text_skips_reasoning() {
        let msg = ChatMessage {
            id: MessageId::new("m1"),
            role: MessageRole::Assistant,
            parts: vec![
                MessagePart::Reasoning { text: "thinking".into() },
                MessagePart::Text { text: "answer".into() },
                MessagePart::Text { text: "later".into() },
            ],
        };
        assert_eq!(msg.first_text(), Some("answer"));
    }

    #[test]
    fn unknown_part_kinds_deserialize_as_other() {
        let raw = r#"{"id":"m2","role":"assistant","parts":[{"type":"tool-invocation","toolName":"x"},{"type":"text","text":"ok"}]}"#;
        let msg: ChatMessage = serde_json::from_str(raw).expect("message json");
        assert_eq!(msg.parts[0], MessagePart::Other);
        assert_eq!(msg.first_text(), Some("ok"));
    }

    #[test]
    fn missing_parts_default_to_empty() {
        let msg: ChatMessage =
            serde_json::from_str(r#"{"id":"m3","role":"user"}"#).expect("message json");
        assert!(msg.parts.is_empty());
        assert_eq!(msg.first_text(), None);
    }
}
