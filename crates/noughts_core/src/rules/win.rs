//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Coord, Mark};

/// Every line of three, checked in this order: rows, columns, diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord { row: 0, col: 0 }, Coord { row: 0, col: 1 }, Coord { row: 0, col: 2 }],
    [Coord { row: 1, col: 0 }, Coord { row: 1, col: 1 }, Coord { row: 1, col: 2 }],
    [Coord { row: 2, col: 0 }, Coord { row: 2, col: 1 }, Coord { row: 2, col: 2 }],
    // Columns
    [Coord { row: 0, col: 0 }, Coord { row: 1, col: 0 }, Coord { row: 2, col: 0 }],
    [Coord { row: 0, col: 1 }, Coord { row: 1, col: 1 }, Coord { row: 2, col: 1 }],
    [Coord { row: 0, col: 2 }, Coord { row: 1, col: 2 }, Coord { row: 2, col: 2 }],
    // Diagonals
    [Coord { row: 0, col: 0 }, Coord { row: 1, col: 1 }, Coord { row: 2, col: 2 }],
    [Coord { row: 0, col: 2 }, Coord { row: 1, col: 1 }, Coord { row: 2, col: 0 }],
];

/// Returns the mark holding the first completed line, if any.
///
/// Only the first line found counts. Under alternating single-cell moves
/// every completed line belongs to the same mark, so the order of
/// [`LINES`] never changes the answer.
pub fn check_winner(board: &Board) -> Option<Mark> {
    completed_lines(board).next().map(|(_, mark)| mark)
}

/// Iterates over every completed line as `(index into LINES, mark)`.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = (usize, Mark)> + '_ {
    LINES.iter().enumerate().filter_map(|(idx, &[a, b, c])| {
        let first = board.get(a)?;
        if let Cell::Marked(mark) = first
            && board.get(b) == Some(first)
            && board.get(c) == Some(first)
        {
            Some((idx, mark))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, cells: &[Coord]) -> Board {
        let mut board = Board::new();
        for &coord in cells {
            board.apply_move(coord, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Mark::Zero, &line);
            assert_eq!(check_winner(&board), Some(Mark::Zero), "line {:?}", line);
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Mark::Cross, &[Coord::new(0, 0), Coord::new(0, 1)]);
        board.apply_move(Coord::new(0, 2), Mark::Zero).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_are_reported_before_diagonals() {
        // Center completes the middle row and the main diagonal at once.
        let board = board_with(
            Mark::Cross,
            &[
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(2, 2),
            ],
        );
        let lines: Vec<_> = completed_lines(&board).collect();
        assert_eq!(lines, vec![(1, Mark::Cross), (6, Mark::Cross)]);
    }
}
