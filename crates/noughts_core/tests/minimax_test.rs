//! Tests for the minimax opponent against known positions and perfect play.

use noughts_core::{Board, Coord, GameResult, Mark, MinimaxSolver, Seats, Side};

/// Moves for the human that keep the best outcome available to them.
fn human_optimal_moves(board: &Board, seats: Seats) -> Vec<Coord> {
    // Score from the human's side by swapping seats, then keep every move
    // with the best win/draw/loss class.
    let scored = MinimaxSolver::new().score_moves(board, seats.swapped());
    let best = scored
        .iter()
        .map(|m| m.score.signum())
        .max()
        .expect("human asked to move on a full board");

    scored
        .into_iter()
        .filter(|m| m.score.signum() == best)
        .map(|m| m.coord)
        .collect()
}

/// Walks every optimal human line against the solver, returning the number of finished games.
fn explore_optimal_lines(board: Board, seats: Seats, to_move: Side) -> usize {
    let result = board.evaluate(seats);
    if result.is_finished() {
        assert_eq!(result, GameResult::Draw, "optimal play ended in {result} on {board}");
        return 1;
    }

    match to_move {
        Side::Computer => {
            let coord = MinimaxSolver::new().best_move(&board, seats).unwrap();
            let mut next = board;
            next.apply_move(coord, seats.computer()).unwrap();
            explore_optimal_lines(next, seats, Side::Human)
        }
        Side::Human => human_optimal_moves(&board, seats)
            .into_iter()
            .map(|coord| {
                let mut next = board;
                next.apply_move(coord, seats.human()).unwrap();
                explore_optimal_lines(next, seats, Side::Computer)
            })
            .sum(),
    }
}

#[test]
fn test_immediate_win_is_taken() {
    // C C _ / H H _ / _ _ _ with the computer as cross.
    let board: Board = "xx./oo./...".parse().unwrap();
    let seats = Seats::new(Mark::Zero);
    assert_eq!(
        MinimaxSolver::new().best_move(&board, seats),
        Some(Coord::new(0, 2))
    );
}

#[test]
fn test_immediate_win_is_taken_as_zero() {
    let board: Board = "oo./xx./x..".parse().unwrap();
    let seats = Seats::new(Mark::Cross);
    assert_eq!(
        MinimaxSolver::new().best_move(&board, seats),
        Some(Coord::new(0, 2))
    );
}

#[test]
fn test_first_move_is_corner_or_center() {
    let seats = Seats::new(Mark::Zero);
    let coord = MinimaxSolver::new().best_move(&Board::new(), seats).unwrap();
    let optimal = [
        Coord::new(0, 0),
        Coord::new(0, 2),
        Coord::new(2, 0),
        Coord::new(2, 2),
        Coord::new(1, 1),
    ];
    assert!(optimal.contains(&coord), "edge opening {coord}");
}

#[test]
fn test_ties_break_in_row_major_order() {
    // Every opening draws, so the first cell scanned is chosen.
    let seats = Seats::new(Mark::Zero);
    assert_eq!(
        MinimaxSolver::new().best_move(&Board::new(), seats),
        Some(Coord::new(0, 0))
    );
}

#[test]
fn test_best_move_leaves_board_untouched() {
    let positions = [".../.../...", "x../.o./...", "xo./.x./..o", "xox/.o./..."];
    let seats = Seats::new(Mark::Cross);

    for text in positions {
        let board: Board = text.parse().unwrap();
        let before = board;
        let _ = MinimaxSolver::new().best_move(&board, seats);
        assert_eq!(board, before);
        assert_eq!(board.to_string(), before.to_string());
    }
}

#[test]
fn test_corner_opening_is_answered_with_center() {
    // Anything but the center loses against a corner opening.
    let board: Board = "x../.../...".parse().unwrap();
    let seats = Seats::new(Mark::Cross);
    assert_eq!(
        MinimaxSolver::new().best_move(&board, seats),
        Some(Coord::new(1, 1))
    );
}

#[test]
fn test_fork_is_prevented() {
    // X in opposite corners, O in the center: O must take an edge, not a corner.
    let board: Board = "x../.o./..x".parse().unwrap();
    let seats = Seats::new(Mark::Cross);
    let coord = MinimaxSolver::new().best_move(&board, seats).unwrap();
    assert!(!coord.is_corner(), "corner reply {coord} allows a fork");
}

#[test]
fn test_optimal_human_draws_when_computer_starts() {
    let seats = Seats::new(Mark::Zero);
    let games = explore_optimal_lines(Board::new(), seats, seats.first_mover());
    assert!(games > 1);
}

#[test]
fn test_optimal_human_draws_when_human_starts() {
    let seats = Seats::new(Mark::Cross);
    let games = explore_optimal_lines(Board::new(), seats, seats.first_mover());
    assert!(games >= 9);
}
