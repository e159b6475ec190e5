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

//! Glue between the message box and the slash coordinator.

use super::App;
use super::dialog::Direction;
use super::slash::SlashCommand;

/// Save the draft and refresh suggestions after the input text changed.
pub fn on_input_changed(app: &mut App) {
    let text = app.input.text();
    if let Some(chat_id) = app.chat_id() {
        app.store.save_draft(chat_id, text.as_str());
    }
    let anchor = (app.rendered_input_area.area() > 0).then_some(app.rendered_input_area);
    app.suggestions = app.slash.update_suggestions(&text, anchor);
}

pub fn move_up(app: &mut App) {
    app.slash.navigate(Direction::Up, app.suggestions.len());
}

pub fn move_down(app: &mut App) {
    app.slash.navigate(Direction::Down, app.suggestions.len());
}

/// Put the highlighted command into the input box.
pub fn confirm_selection(app: &mut App) {
    let index = app.slash.state().selected_index();
    match app.slash.select_suggestion(index, &app.suggestions) {
        Some(command) => apply_command(app, command),
        None => {
            tracing::debug!(index, count = app.suggestions.len(), "Slash confirm out of range");
            dismiss(app);
        }
    }
}

/// Replace the input with `command`'s trigger so the next Enter runs it.
pub fn apply_command(app: &mut App, command: SlashCommand) {
    app.input.set_text(command.trigger());
    if let Some(chat_id) = app.chat_id() {
        app.store.save_draft(chat_id, command.trigger());
    }
    dismiss(app);
}

pub fn dismiss(app: &mut App) {
    app.slash.hide();
    app.suggestions.clear();
}
