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

mod autocomplete;
pub mod commands;
pub mod dialog;
mod events;
mod input;
mod input_submit;
mod keys;
pub mod slash;
mod state;

pub use commands::{Conversation, SlashCoordinator, SlashState};
pub use dialog::Direction;
pub use events::{AppEvent, ChannelSender, handle_app_event, handle_terminal_event};
pub use input::InputState;
pub use slash::{
    ParseResult, SlashCommand, SuggestionEntry, is_complete_command, parse_slash_command,
    suggestions,
};
pub use state::{App, Collaborators};

use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init().map_err(|e| {
        tracing::error!("Terminal init failed: {e}");
        crate::error::AppError::TerminalInit
    })?;

    // Ignore errors on terminals without bracketed paste or mouse support
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::EnableBracketedPaste,
        crossterm::event::EnableMouseCapture,
    );

    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    let result = loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => handle_terminal_event(app, event),
            Some(event) = app.event_rx.recv() => handle_app_event(app, event),
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain everything already queued
        loop {
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                handle_terminal_event(app, event);
                continue;
            }
            match app.event_rx.try_recv() {
                Ok(event) => handle_app_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            break Ok(());
        }

        // Phase 3: persist and render once
        if app.store.is_dirty() {
            app.persist();
        }
        if let Err(e) = terminal.draw(|f| crate::ui::render(f, app)) {
            break Err(anyhow::Error::new(e));
        }
        last_render = Instant::now();
    };

    app.persist();

    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableBracketedPaste,
        crossterm::event::DisableMouseCapture,
    );
    ratatui::restore();

    result
}
