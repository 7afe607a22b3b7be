use serde::{Deserialize, Serialize};

/// Number of rows (and columns) of the board.
pub const BOARD_SIZE: u8 = 8;

/// The color of a disc, and of the player owning it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    /// Moves first in a standard game.
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The character used for this color in [`Board`](crate::Board)'s text format.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            _ => Err(format!("Unknown color '{}', expected 'black' or 'white'", s)),
        }
    }
}

/// A single cell of the board.
///
/// Row 0 is the top row, column 0 the leftmost column. The row-major
/// [`index`](Square::index) defines the scan order used for every
/// deterministic iteration over the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    column: u8,
}

impl Square {
    /// Returns `None` if the coordinates are off the board.
    pub fn new(row: u8, column: u8) -> Option<Self> {
        (row < BOARD_SIZE && column < BOARD_SIZE).then_some(Self { row, column })
    }

    pub(crate) fn from_index(idx: u8) -> Self {
        debug_assert!(idx < 64);
        Self {
            row: idx / BOARD_SIZE,
            column: idx % BOARD_SIZE,
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn column(self) -> u8 {
        self.column
    }

    /// Position in row-major order, in `0..64`.
    pub fn index(self) -> usize {
        usize::from(self.row * BOARD_SIZE + self.column)
    }

    /// The neighboring square in direction `(d_row, d_column)`, if it is on the board.
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Square> {
        let row = (self.row as i8).checked_add(d_row)?;
        let column = (self.column as i8).checked_add(d_column)?;
        if row < 0 || column < 0 {
            return None;
        }
        Square::new(row as u8, column as u8)
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square::from_index)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Disc counts of both colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    pub fn of(self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn total(self) -> u32 {
        self.black + self.white
    }
}

impl From<Score> for (u32, u32) {
    fn from(score: Score) -> Self {
        (score.black, score.white)
    }
}

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameResult {
    pub fn from_score(score: Score) -> Self {
        match score.black.cmp(&score.white) {
            std::cmp::Ordering::Less => GameResult::WhiteWins,
            std::cmp::Ordering::Equal => GameResult::Draw,
            std::cmp::Ordering::Greater => GameResult::BlackWins,
        }
    }

    /// The winning color, or `None` for a draw.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::BlackWins => Some(Color::Black),
            GameResult::WhiteWins => Some(Color::White),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::BlackWins => write!(f, "Black wins!"),
            GameResult::WhiteWins => write!(f, "White wins!"),
            GameResult::Draw => write!(f, "It's a tie!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_bounds() {
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Square::new(1, 1));
        assert_eq!(Square::new(7, 7).unwrap().offset(0, 1), None);
    }

    #[test]
    fn color_names() {
        for color in [Color::Black, Color::White] {
            assert_eq!(color.to_string().parse(), Ok(color));
        }
        assert!("red".parse::<Color>().is_err());
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn row_major_order() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[9], Square::new(1, 1).unwrap());
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn result_from_score() {
        assert_eq!(
            GameResult::from_score(Score { black: 40, white: 24 }),
            GameResult::BlackWins
        );
        assert_eq!(
            GameResult::from_score(Score { black: 32, white: 32 }),
            GameResult::Draw
        );
        assert_eq!(GameResult::WhiteWins.winner(), Some(Color::White));
    }
}
