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
use super::input_submit::submit_input;
use super::slash::is_complete_command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn is_ctrl_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    is_ctrl_shortcut(key.modifiers)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

fn is_printable_text_modifiers(modifiers: KeyModifiers) -> bool {
    let ctrl_alt =
        modifiers.contains(KeyModifiers::CONTROL) && modifiers.contains(KeyModifiers::ALT);
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) || ctrl_alt
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char_shortcut(key, 'q') || is_ctrl_char_shortcut(key, 'c') {
        app.should_quit = true;
        return;
    }
    if app.is_suggesting() {
        handle_slash_key(app, key);
    } else {
        handle_normal_key(app, key);
    }
}

/// Keys while the slash dropdown is open.
fn handle_slash_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Up, _) => autocomplete::move_up(app),
        (KeyCode::Down, _) => autocomplete::move_down(app),
        // A fully typed trigger runs immediately
        (KeyCode::Enter, m)
            if !m.intersects(KeyModifiers::SHIFT | KeyModifiers::CONTROL)
                && is_complete_command(&app.input.text()) =>
        {
            submit_input(app);
        }
        (KeyCode::Enter | KeyCode::Tab, m) if !m.contains(KeyModifiers::SHIFT) => {
            autocomplete::confirm_selection(app);
        }
        (KeyCode::Esc, _) => autocomplete::dismiss(app),
        _ => handle_normal_key(app, key),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, m)
            if !m.contains(KeyModifiers::SHIFT) && !m.contains(KeyModifiers::CONTROL) =>
        {
            submit_input(app);
        }
        // Shift+Enter or Ctrl+Enter: newline, never submits
        (KeyCode::Enter, _) => {
            app.input.insert_newline();
            autocomplete::on_input_changed(app);
        }
        (KeyCode::Backspace, _) => {
            app.input.delete_char_before();
            autocomplete::on_input_changed(app);
        }
        (KeyCode::Delete, _) => {
            app.input.delete_char_after();
            autocomplete::on_input_changed(app);
        }
        (KeyCode::Left, _) => app.input.move_left(),
        (KeyCode::Right, _) => app.input.move_right(),
        (KeyCode::Home, _) => app.input.move_home(),
        (KeyCode::End, _) => app.input.move_end(),
        (KeyCode::Esc, _) => autocomplete::dismiss(app),
        (KeyCode::Char(c), m) if is_printable_text_modifiers(m) => {
            app.input.insert_char(c);
            autocomplete::on_input_changed(app);
        }
        _ => {}
    }
}
