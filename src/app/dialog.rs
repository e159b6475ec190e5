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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Selection cursor for a dropdown list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    pub selected: usize,
}

impl DialogState {
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Step the selection with wrap-around. An empty list leaves the state untouched.
    pub fn navigate(&mut self, direction: Direction, item_count: usize) {
        if item_count == 0 {
            return;
        }
        let last = item_count - 1;
        self.selected = match direction {
            Direction::Down if self.selected >= last => 0,
            Direction::Down => self.selected + 1,
            Direction::Up if self.selected == 0 || self.selected > last => last,
            Direction::Up => self.selected - 1,
        };
    }
}

/// `[start, end)` window of at most `max_visible` rows that contains `selected`.
#[must_use]
pub fn visible_range(selected: usize, item_count: usize, max_visible: usize) -> (usize, usize) {
    if item_count == 0 || max_visible == 0 {
        return (0, 0);
    }
    let selected = selected.min(item_count - 1);
    let start = (selected + 1).saturating_sub(max_visible);
    (start, (start + max_visible).min(item_count))
}

#[cfg(test)]
mod tests {
    use super::{DialogState, Direction, visible_range};

    #[test]
    fn down_from_last_wraps_to_first() {
        let mut d = DialogState { selected: 2 };
        d.navigate(Direction::Down, 3);
        assert_eq!(d.selected, 0);
    }

    #[test]
    fn up_from_first_wraps_to_last() {
        let mut d = DialogState::default();
        d.navigate(Direction::Up, 3);
        assert_eq!(d.selected, 2);
    }

    #[test]
    fn steps_inside_the_list() {
        let mut d = DialogState::default();
        d.navigate(Direction::Down, 3);
        d.navigate(Direction::Down, 3);
        assert_eq!(d.selected, 2);
        d.navigate(Direction::Up, 3);
        assert_eq!(d.selected, 1);
    }

    #[test]
    fn stale_selection_past_end_recovers() {
        let mut d = DialogState { selected: 7 };
        d.navigate(Direction::Down, 2);
        assert_eq!(d.selected, 0);
        let mut d = DialogState { selected: 7 };
        d.navigate(Direction::Up, 2);
        assert_eq!(d.selected, 1);
    }

    #[test]
    fn empty_list_is_noop() {
        let mut d = DialogState { selected: 1 };
        d.navigate(Direction::Down, 0);
        d.navigate(Direction::Up, 0);
        assert_eq!(d, DialogState { selected: 1 });
    }

    #[test]
    fn window_follows_selection() {
        assert_eq!(visible_range(0, 6, 4), (0, 4));
        assert_eq!(visible_range(5, 6, 4), (2, 6));
        assert_eq!(visible_range(1, 2, 8), (0, 2));
        assert_eq!(visible_range(9, 2, 8), (0, 2));
        assert_eq!(visible_range(0, 0, 8), (0, 0));
    }
}
