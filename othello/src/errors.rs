use crate::{Color, Square};

/// The error type for [`Board::apply_move()`](crate::Board::apply_move) and
/// [`Game::play()`](crate::Game::play).
///
/// A move that fails with this error has not changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfBounds { row: u8, column: u8 },
    Occupied { square: Square },
    NoFlips { square: Square, color: Color },
    GameOver,
}

impl std::error::Error for InvalidMove {}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfBounds { row, column } => {
                write!(f, "({}, {}) is not on the board", row, column)
            }
            InvalidMove::Occupied { square } => {
                write!(f, "There is already a disc on {}", square)
            }
            InvalidMove::NoFlips { square, color } => write!(
                f,
                "A {} disc on {} would not flip any of the opponent's discs",
                color, square
            ),
            InvalidMove::GameOver => write!(f, "The game is already over"),
        }
    }
}

/// The error type for parsing a [`Board`](crate::Board) from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    UnexpectedCharacter { character: char, position: usize },
    WrongNumberOfCells { found: usize },
}

impl std::error::Error for ParseBoardError {}

impl std::fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseBoardError::UnexpectedCharacter {
                character,
                position,
            } => write!(
                f,
                "Unexpected character '{}' for cell {}, expected one of '.', 'X', 'O'",
                character, position
            ),
            ParseBoardError::WrongNumberOfCells { found } => {
                write!(f, "Expected 64 cells, found {}", found)
            }
        }
    }
}
