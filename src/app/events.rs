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

use super::App;
use super::autocomplete;
use super::keys::handle_key;
use crate::chat::{ChatMessage, MessageId, MessageRole, MessageSender, OutgoingMessage};
use crate::ui::slash_dropdown::SlashDropdown;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

/// Events delivered to the UI loop from outside keyboard input.
#[derive(Debug)]
pub enum AppEvent {
    /// A message was accepted by the conversation runtime and belongs in the list.
    MessageAppended(ChatMessage),
}

/// `MessageSender` that loops sent text back into the app as a user message.
pub struct ChannelSender {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl ChannelSender {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl MessageSender for ChannelSender {
    fn send_message(&self, message: OutgoingMessage) {
        let appended = ChatMessage::text(MessageId::generate(), MessageRole::User, message.text);
        if self.tx.send(AppEvent::MessageAppended(appended)).is_err() {
            tracing::warn!("Event channel closed; outgoing message dropped");
        }
    }
}

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Paste(text) => {
            app.input.insert_str(&text);
            autocomplete::on_input_changed(app);
        }
        // Resize is handled automatically by ratatui
        _ => {}
    }
}

pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::MessageAppended(message) => {
            tracing::debug!(message_id = %message.id, role = %message.role, "Message appended");
            app.conversation.messages.push(message);
            app.conversation.is_submitting = false;
            if let Some(chat_id) = app.chat_id() {
                app.store.update_messages(chat_id, &app.conversation.messages);
            }
        }
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !app.is_suggesting() {
        return;
    }

    let mut picked = None;
    let hit = SlashDropdown::from_app(app).activate_at(
        app.cached_frame_area,
        mouse.column,
        mouse.row,
        |command| picked = Some(command),
    );
    match picked {
        Some(command) => autocomplete::apply_command(app, command),
        None if !hit => autocomplete::dismiss(app),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_sender_emits_user_message() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        ChannelSender::new(tx).send_message(OutgoingMessage::new("hello"));
        let Ok(AppEvent::MessageAppended(message)) = rx.try_recv() else {
            panic!("expected appended message");
        };
        assert_eq!(message.role, MessageRole::User);
        assert_eq!(message.first_text(), Some("hello"));
    }

    #[test]
    fn closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        ChannelSender::new(tx).send_message(OutgoingMessage::new("lost"));
    }
}
