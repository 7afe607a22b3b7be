use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Color, GameResult, InvalidMove, ParseBoardError, Score, Square, SquareSet};

/// The eight directions in which a move can enclose discs, as `(d_row, d_column)`.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An 8x8 Othello board.
///
/// Every square is empty, black or white: the two disc sets are always disjoint.
/// The board knows the rules, but not whose turn it is; see [`Game`](crate::Game)
/// for that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    black: SquareSet,
    white: SquareSet,
}

impl Board {
    /// A board without any discs.
    pub fn empty() -> Self {
        Self {
            black: SquareSet::new(),
            white: SquareSet::new(),
        }
    }

    /// The standard opening position: white on (3, 3) and (4, 4),
    /// black on (3, 4) and (4, 3).
    pub fn initial() -> Self {
        let sq = |row: u8, column: u8| Square::from_index(row * 8 + column);
        Self {
            black: SquareSet::new().insert(sq(3, 4)).insert(sq(4, 3)),
            white: SquareSet::new().insert(sq(3, 3)).insert(sq(4, 4)),
        }
    }

    pub fn get(&self, square: Square) -> Option<Color> {
        if self.black.contains(square) {
            Some(Color::Black)
        } else if self.white.contains(square) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// All discs of one color.
    pub fn discs(&self, color: Color) -> SquareSet {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn occupied(&self) -> SquareSet {
        self.black | self.white
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == SquareSet::full()
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.black.len(),
            white: self.white.len(),
        }
    }

    /// The discs that would be flipped by placing a `color` disc on `square`.
    ///
    /// Empty if the square is occupied or the placement encloses nothing,
    /// i.e. exactly when the move is illegal.
    pub fn flips(&self, square: Square, color: Color) -> SquareSet {
        if self.occupied().contains(square) {
            return SquareSet::new();
        }
        let mut flipped = SquareSet::new();
        for (d_row, d_column) in DIRECTIONS {
            flipped |= self.flips_in_direction(square, color, d_row, d_column);
        }
        flipped
    }

    // A run of opponent discs counts only if a disc of `color` closes it off.
    fn flips_in_direction(&self, from: Square, color: Color, d_row: i8, d_column: i8) -> SquareSet {
        let own = self.discs(color);
        let theirs = self.discs(color.opponent());
        let mut run = SquareSet::new();
        let mut cursor = from.offset(d_row, d_column);
        while let Some(square) = cursor {
            if theirs.contains(square) {
                run = run.insert(square);
            } else if own.contains(square) {
                return run;
            } else {
                break;
            }
            cursor = square.offset(d_row, d_column);
        }
        SquareSet::new()
    }

    pub fn is_legal(&self, square: Square, color: Color) -> bool {
        !self.flips(square, color).is_empty()
    }

    /// All squares where `color` may place a disc.
    pub fn legal_moves(&self, color: Color) -> SquareSet {
        (!self.occupied())
            .into_iter()
            .filter(|&square| self.is_legal(square, color))
            .collect()
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        (!self.occupied())
            .into_iter()
            .any(|square| self.is_legal(square, color))
    }

    /// True iff the board is full or neither color can move.
    pub fn is_game_over(&self) -> bool {
        self.is_full() || (!self.has_legal_move(Color::Black) && !self.has_legal_move(Color::White))
    }

    /// The outcome, or `None` while the game is still going.
    pub fn result(&self) -> Option<GameResult> {
        self.is_game_over()
            .then(|| GameResult::from_score(self.score()))
    }

    /// Places a `color` disc on `square` and flips every enclosed run.
    ///
    /// Returns the flipped discs. On error, the board is unchanged.
    pub fn apply_move(&mut self, square: Square, color: Color) -> Result<SquareSet, InvalidMove> {
        if self.occupied().contains(square) {
            return Err(InvalidMove::Occupied { square });
        }
        let flipped = self.flips(square, color);
        if flipped.is_empty() {
            return Err(InvalidMove::NoFlips { square, color });
        }
        let (own, theirs) = match color {
            Color::Black => (&mut self.black, &mut self.white),
            Color::White => (&mut self.white, &mut self.black),
        };
        *own = *own | flipped.insert(square);
        *theirs = *theirs & !flipped;
        debug_assert!((self.black & self.white).is_empty());
        Ok(flipped)
    }

    /// Like [`Self::apply_move()`], for raw coordinates e.g. from a click.
    pub fn apply_move_at(
        &mut self,
        row: u8,
        column: u8,
        color: Color,
    ) -> Result<SquareSet, InvalidMove> {
        let square = Square::new(row, column).ok_or(InvalidMove::OutOfBounds { row, column })?;
        self.apply_move(square, color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// Eight rows of `.` (empty), `X` (black) and `O` (white).
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in Square::all() {
            let c = self.get(square).map_or('.', Color::symbol);
            write!(f, "{}", c)?;
            if square.column() == 7 && square.row() != 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Parses the format written by `Display`. Whitespace is ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut position = 0;
        for character in s.chars().filter(|c| !c.is_whitespace()) {
            if position < 64 {
                let square = Square::from_index(position as u8);
                match character {
                    '.' => {}
                    'X' | 'x' => board.black = board.black.insert(square),
                    'O' | 'o' => board.white = board.white.insert(square),
                    _ => {
                        return Err(ParseBoardError::UnexpectedCharacter {
                            character,
                            position,
                        })
                    }
                }
            }
            position += 1;
        }
        if position != 64 {
            return Err(ParseBoardError::WrongNumberOfCells { found: position });
        }
        Ok(board)
    }
}
