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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(String),
    #[error("System memories message id is empty")]
    EmptyMemoriesId,
    #[error("Chat data file unavailable")]
    DataFileUnavailable,
    #[error("Terminal initialization failed")]
    TerminalInit,
}

impl AppError {
    pub const INVALID_API_URL_EXIT_CODE: i32 = 20;
    pub const EMPTY_MEMORIES_ID_EXIT_CODE: i32 = 21;
    pub const DATA_FILE_UNAVAILABLE_EXIT_CODE: i32 = 22;
    pub const TERMINAL_INIT_EXIT_CODE: i32 = 23;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidApiUrl(_) => Self::INVALID_API_URL_EXIT_CODE,
            Self::EmptyMemoriesId => Self::EMPTY_MEMORIES_ID_EXIT_CODE,
            Self::DataFileUnavailable => Self::DATA_FILE_UNAVAILABLE_EXIT_CODE,
            Self::TerminalInit => Self::TERMINAL_INIT_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidApiUrl(_) => {
                "The API URL is not valid. Pass an absolute http(s) URL via --api-url."
            }
            Self::EmptyMemoriesId => "The --memories-id value must not be empty.",
            Self::DataFileUnavailable => {
                "Could not read or create the chat data file. Check --data-file and permissions."
            }
            Self::TerminalInit => "Failed to set up the terminal for the chat interface.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            AppError::InvalidApiUrl("x".into()).exit_code(),
            AppError::EmptyMemoriesId.exit_code(),
            AppError::DataFileUnavailable.exit_code(),
            AppError::TerminalInit.exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
