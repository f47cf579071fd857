//! Game rules for tic-tac-toe.
//!
//! Pure functions over a borrowed [`Board`](super::Board). Nothing here keeps
//! state between calls, so outcomes are always recomputed from the board.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{GameOutcome, detect_outcome};
pub use win::{LINES, check_winner};
