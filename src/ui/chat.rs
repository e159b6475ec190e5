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

use crate::app::App;
use crate::chat::{ChatMessage, MessagePart, MessageRole};
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

fn role_header(role: MessageRole) -> Span<'static> {
    let (label, color) = match role {
        MessageRole::User => ("You", theme::ROLE_USER),
        MessageRole::Assistant => ("Assistant", theme::ROLE_ASSISTANT),
        MessageRole::System => ("Memories", theme::ROLE_SYSTEM),
    };
    Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

fn message_lines(message: &ChatMessage, out: &mut Vec<Line<'static>>) {
    out.push(Line::from(role_header(message.role)));
    for part in &message.parts {
        match part {
            MessagePart::Text { text } => {
                out.extend(text.lines().map(|line| Line::from(line.to_owned())));
            }
            MessagePart::Reasoning { text } => {
                let style = Style::default().fg(theme::DIM).add_modifier(Modifier::ITALIC);
                out.extend(text.lines().map(|line| Line::styled(line.to_owned(), style)));
            }
            MessagePart::Other => {}
        }
    }
    out.push(Line::default());
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if app.conversation.messages.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(Span::styled(
                "No messages yet.",
                Style::default().fg(theme::DIM),
            )),
            Line::from(Span::styled(
                "Type / to see available commands.",
                Style::default().fg(theme::DIM),
            )),
        ]);
        frame.render_widget(hint, area);
        return;
    }

    let mut lines = Vec::new();
    for message in &app.conversation.messages {
        message_lines(message, &mut lines);
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    // Stick to the bottom of the conversation.
    let total = paragraph.line_count(area.width);
    let scroll = u16::try_from(total.saturating_sub(usize::from(area.height))).unwrap_or(u16::MAX);
    frame.render_widget(paragraph.scroll((scroll, 0)), area);
}
