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

use crate::Cli;
use crate::chat::{ChatId, MessageId};
use crate::error::AppError;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:54587";
pub const DEFAULT_MEMORIES_ID: &str = "system-memories";
const DATA_DIR_NAME: &str = "chat-slash";
const DATA_FILE_NAME: &str = "chats.json";

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: reqwest::Url,
    /// Id of the pinned memories message that `/clear` keeps.
    pub system_memories_id: MessageId,
    pub chat_id: ChatId,
    pub chat_title: String,
    /// `None` keeps drafts and snapshots in memory only.
    pub data_file: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let api_url = parse_api_url(&cli.api_url)?;

        let memories_id = cli.memories_id.trim();
        if memories_id.is_empty() {
            return Err(AppError::EmptyMemoriesId);
        }

        let chat_id = ChatId(cli.chat_id);
        let chat_title = cli
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map_or_else(|| format!("Chat {chat_id}"), str::to_owned);

        Ok(Self {
            api_url,
            system_memories_id: MessageId::new(memories_id),
            chat_id,
            chat_title,
            data_file: cli.data_file.clone().or_else(default_data_file),
        })
    }
}

fn parse_api_url(raw: &str) -> Result<reqwest::Url, AppError> {
    let url = reqwest::Url::parse(raw.trim())
        .map_err(|e| AppError::InvalidApiUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::InvalidApiUrl(format!("{raw}: unsupported scheme")));
    }
    Ok(url)
}

fn default_data_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME).join(DATA_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["chat-slash"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn defaults_resolve() {
        let config = Config::from_cli(&cli(&[])).expect("config");
        assert_eq!(config.system_memories_id.as_str(), DEFAULT_MEMORIES_ID);
        assert_eq!(config.chat_id, ChatId(1));
        assert_eq!(config.chat_title, "Chat 1");
    }

    #[test]
    fn blank_memories_id_is_rejected() {
        let err = Config::from_cli(&cli(&["--memories-id", "  "])).unwrap_err();
        assert_eq!(err, AppError::EmptyMemoriesId);
    }

    #[test]
    fn non_http_url_is_rejected() {
        let err = Config::from_cli(&cli(&["--api-url", "ftp://example.com"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidApiUrl(_)));
    }

    #[test]
    fn explicit_title_wins() {
        let config = Config::from_cli(&cli(&["--chat-id", "7", "--title", "Planning"]))
            .expect("config");
        assert_eq!(config.chat_id, ChatId(7));
        assert_eq!(config.chat_title, "Planning");
    }
}
