//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They do not know which
//! side holds which mark; [`Seats`](crate::Seats) maps their answers onto
//! the human and the computer.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, completed_lines};
