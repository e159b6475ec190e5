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

pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod ui;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chat-slash", about = "Terminal chat input with slash commands")]
pub struct Cli {
    /// Base URL of the chat message API
    #[arg(long, env = "CHAT_SLASH_API_URL", default_value = config::DEFAULT_API_URL)]
    pub api_url: String,

    /// Message id of the pinned system memories message (never cleared)
    #[arg(long, default_value = config::DEFAULT_MEMORIES_ID)]
    pub memories_id: String,

    /// Conversation to open
    #[arg(long, default_value_t = 1)]
    pub chat_id: i64,

    /// Title shown in the header for the open conversation
    #[arg(long)]
    pub title: Option<String>,

    /// JSON file holding drafts and message snapshots
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Write tracing diagnostics to a file (disabled unless explicitly set)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directives (example: `info,chat_slash::app=debug`)
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to `--log-file` instead of truncating on startup
    #[arg(long)]
    pub log_append: bool,
}
