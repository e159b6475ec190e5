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
use crate::chat::OutgoingMessage;

/// Enter on the message box: run a slash command or send the text as a message.
pub(super) fn submit_input(app: &mut App) {
    if app.conversation.is_submitting {
        tracing::debug!("Submit ignored: previous message still in flight");
        return;
    }
    let Some(chat_id) = app.chat_id() else {
        return;
    };

    let text = app.input.text();
    if text.trim().is_empty() {
        return;
    }

    autocomplete::dismiss(app);

    if app.slash.process_input(text.trim(), &mut app.conversation, &mut app.store) {
        app.store.clear_draft(chat_id);
        app.input.clear();
        return;
    }

    app.conversation.is_submitting = true;
    app.sender.send_message(OutgoingMessage::new(text));
    app.store.clear_draft(chat_id);
    app.input.clear();
}
