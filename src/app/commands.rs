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

use super::dialog::{DialogState, Direction};
use super::slash::{self, SlashCommand, SuggestionEntry};
use crate::chat::{
    Chat, ChatMessage, ChatStore, MessageId, MessageSender, MessageStore, OutgoingMessage,
};
use ratatui::layout::Rect;
use std::rc::Rc;

/// Max dropdown rows shown before the list scrolls.
pub const MAX_VISIBLE: usize = 8;

pub const COMPACT_PREAMBLE: &str = "Summarize the existing conversation above. Provide a concise context summary we can continue from. Do not repeat all messages.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlashState {
    pub suggestions_visible: bool,
    pub dialog: DialogState,
    /// Screen area of the input box when suggestions were last opened.
    pub anchor: Option<Rect>,
}

impl SlashState {
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.dialog.selected
    }
}

/// The open conversation as seen by command handlers.
#[derive(Debug, Default)]
pub struct Conversation {
    pub chat: Option<Chat>,
    pub messages: Vec<ChatMessage>,
    pub is_submitting: bool,
}

/// Owns slash dropdown state and runs recognized commands.
pub struct SlashCoordinator {
    state: SlashState,
    system_memories_id: MessageId,
    remote: Rc<dyn MessageStore>,
    sender: Rc<dyn MessageSender>,
}

impl SlashCoordinator {
    pub fn new(
        system_memories_id: MessageId,
        remote: Rc<dyn MessageStore>,
        sender: Rc<dyn MessageSender>,
    ) -> Self {
        Self { state: SlashState::default(), system_memories_id, remote, sender }
    }

    #[must_use]
    pub fn state(&self) -> &SlashState {
        &self.state
    }

    /// Run `text` if it is a recognized command.
    ///
    /// Returns `true` when the input was consumed and should be cleared.
    /// Returns `false` when it should go out as an ordinary message.
    ///
    /// Must be called from within a `tokio::task::LocalSet` context because
    /// `/clear` spawns its remote deletes with `spawn_local`.
    pub fn process_input(
        &mut self,
        text: &str,
        conversation: &mut Conversation,
        store: &mut ChatStore,
    ) -> bool {
        let Some(command) = slash::parse_slash_command(text).command() else {
            return false;
        };
        self.execute(command, conversation, store);
        true
    }

    pub fn execute(
        &mut self,
        command: SlashCommand,
        conversation: &mut Conversation,
        store: &mut ChatStore,
    ) {
        tracing::debug!(%command, "Executing slash command");
        self.hide();
        match command {
            SlashCommand::Clear => self.handle_clear(conversation, store),
            SlashCommand::Compact => self.handle_compact(conversation, store),
        }
    }

    /// Recompute suggestions for `text`, opening or closing the dropdown.
    pub fn update_suggestions(&mut self, text: &str, anchor: Option<Rect>) -> Vec<SuggestionEntry> {
        let suggestions = slash::suggestions(text);
        if suggestions.is_empty() {
            self.hide();
        } else {
            self.state.suggestions_visible = true;
            self.state.dialog.reset();
            if anchor.is_some() {
                self.state.anchor = anchor;
            }
        }
        suggestions
    }

    pub fn navigate(&mut self, direction: Direction, count: usize) {
        self.state.dialog.navigate(direction, count);
    }

    pub fn hide(&mut self) {
        self.state = SlashState::default();
    }

    #[must_use]
    pub fn select_suggestion(
        &self,
        index: usize,
        suggestions: &[SuggestionEntry],
    ) -> Option<SlashCommand> {
        suggestions.get(index).map(|entry| entry.command)
    }

    #[must_use]
    pub fn is_slash_command_input(&self, text: &str) -> bool {
        slash::parse_slash_command(text).is_slash_command
    }

    #[must_use]
    pub fn is_valid_slash_command(&self, text: &str) -> bool {
        slash::parse_slash_command(text).is_recognized
    }

    fn is_sentinel(&self, message: &ChatMessage) -> bool {
        message.id == self.system_memories_id
    }

    /// Drop every message except the pinned memories, locally first, then remotely.
    ///
    /// Must be called from within a `tokio::task::LocalSet` context because
    /// the deletes are `!Send` futures run with `spawn_local`.
    pub fn handle_clear(&self, conversation: &mut Conversation, store: &mut ChatStore) {
        let Some(chat_id) = conversation.chat.as_ref().map(|chat| chat.id) else {
            tracing::debug!("/clear ignored: no active chat");
            return;
        };

        let (kept, removed): (Vec<ChatMessage>, Vec<ChatMessage>) =
            std::mem::take(&mut conversation.messages)
                .into_iter()
                .partition(|message| self.is_sentinel(message));
        if removed.is_empty() {
            tracing::error!(%chat_id, "/clear ignored: no conversation to clear");
            conversation.messages = kept;
            return;
        }

        // Duplicated sentinel ids are not expected; keep the first.
        conversation.messages = kept.into_iter().take(1).collect();
        store.update_messages(chat_id, &conversation.messages);
        store.clear_draft(chat_id);
        tracing::info!(%chat_id, removed = removed.len(), "Cleared conversation");

        for message in removed {
            let remote = Rc::clone(&self.remote);
            tokio::task::spawn_local(async move {
                if let Err(e) = remote.delete_message(&message.id).await {
                    tracing::error!(
                        message_id = %message.id,
                        "Failed to delete message during /clear: {e:#}"
                    );
                }
            });
        }
    }

    /// Ask the model for a summary of the conversation so far.
    pub fn handle_compact(&self, conversation: &mut Conversation, store: &mut ChatStore) {
        let Some(chat_id) = conversation.chat.as_ref().map(|chat| chat.id) else {
            tracing::debug!("/compact ignored: no active chat");
            return;
        };
        if !conversation.messages.iter().any(|message| !self.is_sentinel(message)) {
            tracing::error!(%chat_id, "/compact ignored: no conversation to summarize");
            return;
        }

        let prompt = compact_prompt(&conversation.messages);
        conversation.is_submitting = true;
        self.sender.send_message(OutgoingMessage::new(prompt));
        store.clear_draft(chat_id);
        tracing::info!(%chat_id, messages = conversation.messages.len(), "Requested compaction");
    }
}

/// One `role: text` line per message, wrapped in the summarization instruction.
pub fn compact_prompt(messages: &[ChatMessage]) -> String {
    let transcript = messages
        .iter()
        .map(|message| format!("{}: {}", message.role, message.first_text().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{COMPACT_PREAMBLE}\n\n---\n{transcript}")
}
