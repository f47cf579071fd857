//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side that owns a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// The human player (X, always moves first).
    #[display("X")]
    Player,
    /// The automated opponent (O).
    #[display("O")]
    Opponent,
}

impl Mark {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a side.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    ///
    /// No write-once check happens here; the session owns that rule.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = self.clone();
        next.set(pos, Square::Occupied(mark));
        next
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board layout: {} at {}:{}", reason, file, line)]
pub struct BoardParseError {
    /// What was wrong with the input.
    pub reason: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(reason: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            reason: reason.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a 9-cell layout such as `"XX_OO____"`.
///
/// `X` is the player, `O` the opponent, and `_`, `.` or space an empty
/// square. Whitespace between rows (newlines, `|`) is ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '|' | '/'))
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::new(format!(
                "expected 9 cells, found {}",
                cells.len()
            )));
        }

        let mut squares = [Square::Empty; 9];
        for (slot, c) in squares.iter_mut().zip(cells) {
            *slot = match c {
                'X' | 'x' => Square::Occupied(Mark::Player),
                'O' | 'o' => Square::Occupied(Mark::Opponent),
                '_' | '.' | ' ' => Square::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected cell '{}'",
                        other
                    )));
                }
            };
        }
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX_OO____".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::Player));
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::Opponent));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.count(Mark::Player), 2);
    }

    #[test]
    fn test_parse_board_with_row_separators() {
        let board: Board = "X_O|_X_|O__".parse().unwrap();
        assert_eq!(board.count(Mark::Player), 2);
        assert_eq!(board.count(Mark::Opponent), 2);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XX".parse::<Board>().is_err());
        assert!("XX_OO____Z".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_error_records_location() {
        let err = "XX_OO___Z".parse::<Board>().unwrap_err();
        assert_eq!(err.reason, "unexpected cell 'Z'");
        assert!(err.file.ends_with("types.rs"));
        assert!(err.line > 0);
        assert!(err.to_string().contains("types.rs"));
    }

    #[test]
    fn test_display_shows_keys_for_empty_squares() {
        let board: Board = "X________".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }
}
