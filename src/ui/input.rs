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
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Horizontal padding to match header/footer inset.
pub const INPUT_PAD: u16 = 2;

/// Prompt prefix width: "❯ " = 2 columns
const PROMPT_WIDTH: u16 = 2;

/// Maximum input area height (lines) to prevent the input from consuming the entire screen.
const MAX_INPUT_HEIGHT: u16 = 8;

#[allow(clippy::cast_possible_truncation)]
pub fn line_count(app: &App) -> u16 {
    (app.input.lines.len().min(usize::from(MAX_INPUT_HEIGHT)) as u16).max(1)
}

/// Draw the message box and return the padded area it occupies.
pub fn render(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let padded = Rect {
        x: area.x + INPUT_PAD,
        y: area.y,
        width: area.width.saturating_sub(INPUT_PAD * 2),
        height: area.height,
    };
    let prompt = Span::styled(
        format!("{} ", theme::PROMPT_CHAR),
        Style::default().fg(theme::RUST_ORANGE),
    );

    if app.input.is_empty() {
        let placeholder = if app.conversation.is_submitting {
            "Waiting for reply..."
        } else {
            "Type a message or / for commands"
        };
        let line = Line::from(vec![prompt, Span::styled(placeholder, Style::default().fg(theme::DIM))]);
        frame.render_widget(Paragraph::new(line), padded);
        frame.set_cursor_position((padded.x + PROMPT_WIDTH, padded.y));
        return padded;
    }

    // Keep the cursor row on screen when the buffer is taller than the box.
    let visible_rows = usize::from(padded.height.max(1));
    let first_row = (app.input.cursor_row + 1).saturating_sub(visible_rows);

    let lines: Vec<Line> = app
        .input
        .lines
        .iter()
        .enumerate()
        .skip(first_row)
        .take(visible_rows)
        .map(|(row, text)| {
            let prefix = if row == 0 { prompt.clone() } else { Span::raw("  ") };
            Line::from(vec![prefix, Span::raw(text.clone())])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), padded);

    let before_cursor: String =
        app.input.lines[app.input.cursor_row].chars().take(app.input.cursor_col).collect();
    let cursor_x = padded
        .x
        .saturating_add(PROMPT_WIDTH)
        .saturating_add(u16::try_from(before_cursor.width()).unwrap_or(u16::MAX));
    let cursor_y = padded.y.saturating_add(
        u16::try_from(app.input.cursor_row.saturating_sub(first_row)).unwrap_or(u16::MAX),
    );
    frame.set_cursor_position((cursor_x.min(padded.right().saturating_sub(1)), cursor_y));
    padded
}
