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

use super::commands::{Conversation, SlashCoordinator};
use super::events::AppEvent;
use super::input::InputState;
use super::slash::SuggestionEntry;
use crate::chat::{Chat, ChatId, ChatStore, MessageId, MessageSender, MessageStore};
use ratatui::layout::Rect;
use std::rc::Rc;
use tokio::sync::mpsc;

/// External collaborators the app talks to.
pub struct Collaborators {
    pub remote: Rc<dyn MessageStore>,
    pub sender: Rc<dyn MessageSender>,
}

pub struct App {
    pub conversation: Conversation,
    pub store: ChatStore,
    pub input: InputState,
    pub slash: SlashCoordinator,
    /// Suggestions currently offered, mirrored from the last `update_suggestions` call.
    pub suggestions: Vec<SuggestionEntry>,
    pub sender: Rc<dyn MessageSender>,
    pub should_quit: bool,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
    pub event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Last known frame area, used as the dropdown container.
    pub cached_frame_area: Rect,
    /// Area the input box was last drawn in, used as the dropdown anchor.
    pub rendered_input_area: Rect,
}

impl App {
    /// Open `chat`, restoring its stored messages and draft.
    pub fn new(
        chat: Chat,
        system_memories_id: MessageId,
        store: ChatStore,
        collaborators: Collaborators,
        (event_tx, event_rx): (mpsc::UnboundedSender<AppEvent>, mpsc::UnboundedReceiver<AppEvent>),
    ) -> Self {
        let messages = store.messages(chat.id).to_vec();
        let mut input = InputState::new();
        input.set_text(store.draft(chat.id));

        let mut app = Self {
            conversation: Conversation { chat: Some(chat), messages, is_submitting: false },
            store,
            input,
            slash: SlashCoordinator::new(
                system_memories_id,
                collaborators.remote,
                Rc::clone(&collaborators.sender),
            ),
            suggestions: Vec::new(),
            sender: collaborators.sender,
            should_quit: false,
            event_tx,
            event_rx,
            cached_frame_area: Rect::default(),
            rendered_input_area: Rect::default(),
        };
        // A restored `/co` draft should reopen the dropdown right away.
        let draft = app.input.text();
        app.suggestions = app.slash.update_suggestions(&draft, None);
        app
    }

    #[must_use]
    pub fn chat_id(&self) -> Option<ChatId> {
        self.conversation.chat.as_ref().map(|chat| chat.id)
    }

    #[must_use]
    pub fn is_suggesting(&self) -> bool {
        self.slash.state().suggestions_visible && !self.suggestions.is_empty()
    }

    /// Flush drafts and snapshots if anything changed.
    pub fn persist(&mut self) {
        if let Err(e) = self.store.save() {
            tracing::warn!("Failed to save chat store: {e:#}");
        }
    }
}
