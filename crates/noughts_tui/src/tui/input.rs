//! Keyboard input: event sources, cursor movement and answer parsing.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use noughts_core::{Coord, SIZE};

/// Where terminal events come from.
pub trait KeySource {
    /// Blocks until the next event.
    fn next_event(&mut self) -> Result<Event>;
}

/// Reads events from the real terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_event(&mut self) -> Result<Event> {
        loop {
            match event::read()? {
                // Windows also reports releases; only presses count.
                Event::Key(key) if key.kind != KeyEventKind::Press => continue,
                other => return Ok(other),
            }
        }
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let last = SIZE - 1;

    match key {
        KeyCode::Left => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Coord::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Up => Coord::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Coord::new((cursor.row + 1).min(last), cursor.col),
        _ => cursor,
    }
}

/// Parses `x y` as typed by the human: 1-based, column first.
///
/// Accepts spaces or a comma between the numbers. Returns `None` for
/// anything that is not two numbers in `1..=3`.
pub fn parse_coordinates(text: &str) -> Option<Coord> {
    let mut parts = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());

    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Coord::from_one_based(x, y)
}

/// Parses a `y` / `n` answer.
pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        let center = Coord::new(1, 1);
        assert_eq!(move_cursor(center, KeyCode::Left), Coord::new(1, 0));
        assert_eq!(move_cursor(center, KeyCode::Right), Coord::new(1, 2));
        assert_eq!(move_cursor(center, KeyCode::Up), Coord::new(0, 1));
        assert_eq!(move_cursor(center, KeyCode::Down), Coord::new(2, 1));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Coord::new(0, 0), KeyCode::Left), Coord::new(0, 0));
        assert_eq!(move_cursor(Coord::new(0, 0), KeyCode::Up), Coord::new(0, 0));
        assert_eq!(move_cursor(Coord::new(2, 2), KeyCode::Right), Coord::new(2, 2));
        assert_eq!(move_cursor(Coord::new(2, 2), KeyCode::Down), Coord::new(2, 2));
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(Coord::new(1, 2), KeyCode::Char('h')), Coord::new(1, 2));
    }

    #[test]
    fn test_parse_coordinates_column_first() {
        assert_eq!(parse_coordinates("3 1"), Some(Coord::new(0, 2)));
        assert_eq!(parse_coordinates("  1   3 "), Some(Coord::new(2, 0)));
        assert_eq!(parse_coordinates("2,2"), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_parse_coordinates_rejects_bad_input() {
        for text in ["", "2", "a b", "0 1", "4 1", "1 2 3", "-1 2", "1.5 2"] {
            assert_eq!(parse_coordinates(text), None, "{text:?}");
        }
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no(" N "), Some(false));
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no("maybe"), None);
    }
}
