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

mod chat;
mod input;
mod layout;
pub mod slash_dropdown;
pub mod theme;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use slash_dropdown::SlashDropdown;

pub fn render(frame: &mut Frame, app: &mut App) {
    let frame_area = frame.area();
    app.cached_frame_area = frame_area;

    let areas = layout::compute(frame_area, input::line_count(app));

    render_header(frame, areas.header, app);
    render_separator(frame, areas.header_sep);
    chat::render(frame, areas.body, app);
    render_separator(frame, areas.input_sep);
    app.rendered_input_area = input::render(frame, areas.input, app);
    render_footer(frame, areas.footer, app);

    // Overlay last so it draws over the chat body
    SlashDropdown::from_app(app).render(frame, frame_area);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let title = app.conversation.chat.as_ref().map_or("No chat", |chat| chat.title.as_str());
    let line = Line::from(vec![
        Span::raw(" ".repeat(usize::from(input::INPUT_PAD))),
        Span::styled(
            title.to_owned(),
            Style::default().fg(theme::RUST_ORANGE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} messages", app.conversation.messages.len()),
            Style::default().fg(theme::DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let hint = if app.is_suggesting() {
        "↑/↓ choose · Tab/Enter select · Esc cancel"
    } else {
        "Enter send · Shift+Enter newline · Ctrl+C quit"
    };
    let line = Line::from(vec![
        Span::raw(" ".repeat(usize::from(input::INPUT_PAD))),
        Span::styled(hint, Style::default().fg(theme::DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let sep = theme::SEPARATOR_CHAR.repeat(usize::from(area.width));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(sep, Style::default().fg(theme::DIM)))),
        area,
    );
}
