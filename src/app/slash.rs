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

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlashCommand {
    Clear,
    Compact,
}

impl SlashCommand {
    /// Registry order. Suggestions are always listed in this order.
    pub const ALL: [Self; 2] = [Self::Clear, Self::Compact];

    #[must_use]
    pub fn trigger(self) -> &'static str {
        match self {
            Self::Clear => "/clear",
            Self::Compact => "/compact",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Clear => "Clear the current chat and start a new conversation",
            Self::Compact => "Summarize the conversation and continue with compacted context",
        }
    }

    /// Exact, case-sensitive trigger lookup.
    #[must_use]
    pub fn from_trigger(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.trigger() == token)
    }
}

impl fmt::Display for SlashCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trigger())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub is_slash_command: bool,
    /// Leading token up to the first whitespace, `/` included.
    pub matched_token: Option<String>,
    /// Whole trimmed input, trailing arguments included.
    pub full_text: Option<String>,
    pub is_recognized: bool,
}

impl ParseResult {
    /// Recognized command, if any.
    #[must_use]
    pub fn command(&self) -> Option<SlashCommand> {
        if !self.is_recognized {
            return None;
        }
        self.matched_token.as_deref().and_then(SlashCommand::from_trigger)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub command: SlashCommand,
    pub description: &'static str,
}

impl From<SlashCommand> for SuggestionEntry {
    fn from(command: SlashCommand) -> Self {
        Self { command, description: command.description() }
    }
}

pub fn parse_slash_command(input: &str) -> ParseResult {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return ParseResult {
            is_slash_command: false,
            matched_token: None,
            full_text: None,
            is_recognized: false,
        };
    }

    let token = trimmed.split(char::is_whitespace).next().unwrap_or(trimmed);
    ParseResult {
        is_slash_command: true,
        matched_token: Some(token.to_owned()),
        full_text: Some(trimmed.to_owned()),
        is_recognized: SlashCommand::from_trigger(token).is_some(),
    }
}

/// Registry entries whose trigger starts with the typed prefix, case-insensitively.
pub fn suggestions(input: &str) -> Vec<SuggestionEntry> {
    let query = input.trim().to_lowercase();
    if !query.starts_with('/') {
        return Vec::new();
    }
    if query == "/" {
        return SlashCommand::ALL.into_iter().map(SuggestionEntry::from).collect();
    }

    SlashCommand::ALL
        .into_iter()
        .filter(|cmd| cmd.trigger().to_lowercase().starts_with(&query))
        .map(SuggestionEntry::from)
        .collect()
}

pub fn is_complete_command(input: &str) -> bool {
    SlashCommand::from_trigger(input.trim()).is_some()
}
