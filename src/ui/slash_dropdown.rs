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
use crate::app::commands::MAX_VISIBLE;
use crate::app::dialog::visible_range;
use crate::app::{SlashCommand, SuggestionEntry};
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

/// Narrowest the dropdown gets when anchored to a small input.
pub const MIN_WIDTH: u16 = 48;

const TITLE: &str = " Slash Commands ";
const HINT: &str = " Tab/Enter select · Esc cancel ";

fn command_icon(command: SlashCommand) -> &'static str {
    match command {
        SlashCommand::Clear => "#",
        SlashCommand::Compact => "↯",
    }
}

/// Slash command suggestion overlay. Holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct SlashDropdown<'a> {
    pub suggestions: &'a [SuggestionEntry],
    pub selected_index: usize,
    pub visible: bool,
    /// Input box area. The dropdown opens upward from it.
    pub anchor: Option<Rect>,
}

impl<'a> SlashDropdown<'a> {
    pub fn from_app(app: &'a App) -> Self {
        let state = app.slash.state();
        Self {
            suggestions: &app.suggestions,
            selected_index: state.selected_index(),
            visible: state.suggestions_visible,
            anchor: state.anchor,
        }
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    fn rows(&self) -> (usize, usize) {
        visible_range(self.selected_index, self.suggestions.len(), MAX_VISIBLE)
    }

    /// Where the overlay lands inside `container`, or `None` when hidden.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn area(&self, container: Rect) -> Option<Rect> {
        if !self.is_shown() || container.area() == 0 {
            return None;
        }
        let (start, end) = self.rows();
        let height = ((end - start) as u16).saturating_add(2); // +2 for top/bottom border

        let area = match self.anchor {
            Some(anchor) => {
                let width = anchor.width.max(MIN_WIDTH);
                let top = anchor.y.saturating_sub(height).max(container.y);
                Rect { x: anchor.x, y: top, width, height: anchor.y.saturating_sub(top) }
            }
            None => Rect {
                x: container.x,
                y: container.bottom().saturating_sub(height),
                width: container.width,
                height,
            },
        };
        let area = area.intersection(container);
        (area.area() > 0).then_some(area)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let (start, end) = self.rows();
        self.suggestions[start..end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                let is_selected = start + offset == self.selected_index;
                let row_style = if is_selected {
                    Style::default().bg(theme::SELECTED_BG)
                } else {
                    Style::default()
                };
                let marker = if is_selected {
                    Span::styled(
                        " \u{25b8} ",
                        Style::default().fg(theme::RUST_ORANGE).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw("   ")
                };
                Line::from(vec![
                    marker,
                    Span::styled(
                        format!("{} ", command_icon(entry.command)),
                        Style::default().fg(theme::DIM),
                    ),
                    Span::styled(
                        entry.command.trigger(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(entry.description, Style::default().fg(theme::DIM)),
                ])
                .style(row_style)
            })
            .collect()
    }

    pub fn render(&self, frame: &mut Frame, container: Rect) {
        let Some(area) = self.area(container) else {
            return;
        };

        let block = Block::default()
            .title(Span::styled(TITLE, Style::default().fg(theme::DIM)))
            .title_bottom(Span::styled(HINT, Style::default().fg(theme::DIM)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::DIM));

        // Clear the area first so the overlay has a solid background
        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(self.lines()).block(block), area);
    }

    /// Hit-test a click. Calls `on_select` with the entry under (`column`, `row`).
    ///
    /// Returns `true` when the click landed on a suggestion row.
    pub fn activate_at(
        &self,
        container: Rect,
        column: u16,
        row: u16,
        on_select: impl FnOnce(SlashCommand),
    ) -> bool {
        let Some(area) = self.area(container) else {
            return false;
        };
        let inner = area.inner(ratatui::layout::Margin::new(1, 1));
        if !inner.contains(ratatui::layout::Position::new(column, row)) {
            return false;
        }

        let (start, end) = self.rows();
        let index = start + usize::from(row - inner.y);
        let Some(entry) = self.suggestions.get(index).filter(|_| index < end) else {
            return false;
        };
        on_select(entry.command);
        true
    }
}
