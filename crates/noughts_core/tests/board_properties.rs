//! Property tests for board invariants under random legal play.

use noughts_core::rules::completed_lines;
use noughts_core::{
    Board, Coord, GameResult, IllegalMove, Mark, MinimaxSolver, Outcome, Phase, Session,
};
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::HashSet;

fn any_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::Cross), Just(Mark::Zero)]
}

/// A random prefix of a random game: cells in play order.
fn play_order() -> impl Strategy<Value = Vec<Coord>> {
    Just(Coord::ALL.to_vec()).prop_shuffle()
}

/// Plays `order` alternately from cross, stopping at the first finished position.
fn play_until_over(order: &[Coord]) -> Vec<Board> {
    let mut board = Board::new();
    let mut mark = Mark::Cross;
    let mut seen = vec![board];

    for &coord in order {
        if board.outcome() != Outcome::InProgress {
            break;
        }
        board.apply_move(coord, mark).unwrap();
        seen.push(board);
        mark = mark.opponent();
    }

    seen
}

proptest! {
    #[test]
    fn prop_reachable_boards_have_at_most_one_winner(order in play_order()) {
        for board in play_until_over(&order) {
            let winners: HashSet<Mark> = completed_lines(&board).map(|(_, mark)| mark).collect();
            prop_assert!(winners.len() <= 1, "two winners on {}", board);

            if let Some(&winner) = winners.iter().next() {
                prop_assert_eq!(board.outcome(), Outcome::Won(winner));
            }
        }
    }

    #[test]
    fn prop_random_games_always_end(order in play_order()) {
        let boards = play_until_over(&order);
        let last = boards.last().unwrap();
        prop_assert_ne!(last.outcome(), Outcome::InProgress);
        prop_assert!(boards.len() >= 6, "a win needs at least five moves");
    }

    #[test]
    fn prop_illegal_moves_leave_board_unchanged(
        order in play_order(),
        played in 1usize..9,
        pick in any::<Index>(),
        mark in any_mark(),
    ) {
        let mut board = Board::new();
        let mut next = Mark::Cross;
        for &coord in &order[..played] {
            board.apply_move(coord, next).unwrap();
            next = next.opponent();
        }
        let before = board;

        let occupied = order[pick.index(played)];
        prop_assert_eq!(board.apply_move(occupied, mark), Err(IllegalMove::Occupied(occupied)));
        prop_assert_eq!(board, before);

        let off_board = Coord::new(3 + pick.index(5), occupied.col);
        prop_assert_eq!(board.apply_move(off_board, mark), Err(IllegalMove::OutOfBounds(off_board)));
        prop_assert_eq!(board, before);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_solver_never_loses_to_random_play(
        human in any_mark(),
        picks in proptest::collection::vec(any::<Index>(), 5),
    ) {
        let mut session = Session::new();
        session.start(human).unwrap();
        let mut solver = MinimaxSolver::new();
        let mut picks = picks.into_iter();

        while session.phase() != Phase::Finished {
            match session.phase() {
                Phase::HumanTurn => {
                    let legal = session.board().legal_moves();
                    let pick = picks.next().unwrap();
                    session.play_human(*pick.get(&legal)).unwrap();
                }
                Phase::ComputerTurn => {
                    let before = *session.board();
                    let coord = solver.best_move(&before, session.seats().unwrap()).unwrap();
                    prop_assert_eq!(*session.board(), before);
                    prop_assert_eq!(session.play_computer(&mut solver).unwrap(), coord);
                }
                phase => prop_assert!(false, "unexpected phase {}", phase),
            }
        }

        prop_assert_ne!(session.result(), GameResult::HumanWin);
        let score = session.score();
        prop_assert_eq!(*score.human(), 0);
        prop_assert_eq!(
            *score.computer(),
            u32::from(session.result() == GameResult::ComputerWin)
        );
    }
}
