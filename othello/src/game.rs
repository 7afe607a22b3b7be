use serde::{Deserialize, Serialize};

use crate::{Board, Color, GameResult, InvalidMove, Square, SquareSet};

/// Whose turn it is, or how the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    AwaitingMove(Color),
    GameOver(GameResult),
}

/// Summarizes the outcome of playing a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The opponent moves next.
    Normal { flipped: SquareSet },
    /// The opponent has no legal move, so the same color moves again.
    Passed { flipped: SquareSet, skipped: Color },
    GameEnded {
        flipped: SquareSet,
        result: GameResult,
    },
}

impl TurnOutcome {
    pub fn flipped(&self) -> SquareSet {
        match *self {
            TurnOutcome::Normal { flipped }
            | TurnOutcome::Passed { flipped, .. }
            | TurnOutcome::GameEnded { flipped, .. } => flipped,
        }
    }
}

/// A board plus whose turn it is.
///
/// Passing is never a move: when the color whose turn it would be has no
/// legal move, the turn goes straight back to the other color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    state: GameState,
    moves_played: u32,
}

impl Game {
    /// A new game from the opening position, black to move.
    pub fn new() -> Self {
        Self::with_first_mover(Color::Black)
    }

    pub fn with_first_mover(color: Color) -> Self {
        Self::from_board(Board::initial(), color)
    }

    /// Continue from an arbitrary position with `to_move` to play,
    /// skipping that color if it cannot move.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            state: next_state(&board, to_move),
            moves_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The color to move, or `None` once the game is over.
    pub fn current(&self) -> Option<Color> {
        match self.state {
            GameState::AwaitingMove(color) => Some(color),
            GameState::GameOver(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::GameOver(_))
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            GameState::AwaitingMove(_) => None,
            GameState::GameOver(result) => Some(result),
        }
    }

    /// Number of discs placed since this game was created.
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Legal moves of the color to move. Empty once the game is over.
    pub fn legal_moves(&self) -> SquareSet {
        match self.state {
            GameState::AwaitingMove(color) => self.board.legal_moves(color),
            GameState::GameOver(_) => SquareSet::new(),
        }
    }

    /// Plays a move for the color whose turn it is.
    ///
    /// On error, nothing changes and the same color is still to move.
    pub fn play(&mut self, square: Square) -> Result<TurnOutcome, InvalidMove> {
        let color = self.current().ok_or(InvalidMove::GameOver)?;
        let flipped = self.board.apply_move(square, color)?;
        self.moves_played += 1;
        self.state = next_state(&self.board, color.opponent());
        Ok(match self.state {
            GameState::GameOver(result) => TurnOutcome::GameEnded { flipped, result },
            GameState::AwaitingMove(next) if next == color => TurnOutcome::Passed {
                flipped,
                skipped: color.opponent(),
            },
            GameState::AwaitingMove(_) => TurnOutcome::Normal { flipped },
        })
    }

    /// Like [`Self::play()`], for raw coordinates.
    pub fn play_at(&mut self, row: u8, column: u8) -> Result<TurnOutcome, InvalidMove> {
        let square = Square::new(row, column).ok_or(InvalidMove::OutOfBounds { row, column })?;
        self.play(square)
    }

    /// Back to the opening position with black to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn next_state(board: &Board, preferred: Color) -> GameState {
    if board.has_legal_move(preferred) {
        GameState::AwaitingMove(preferred)
    } else if board.has_legal_move(preferred.opponent()) {
        GameState::AwaitingMove(preferred.opponent())
    } else {
        GameState::GameOver(GameResult::from_score(board.score()))
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ReachablePosition;
    use crate::Score;

    fn sq(row: u8, column: u8) -> Square {
        Square::new(row, column).unwrap()
    }

    quickcheck! {
        fn color_to_move_can_always_move(pos: ReachablePosition) -> bool {
            let game = Game::from_board(pos.board, pos.to_move);
            match game.state() {
                GameState::AwaitingMove(color) => game.board().has_legal_move(color),
                GameState::GameOver(result) => {
                    game.board().is_game_over()
                        && result == GameResult::from_score(game.board().score())
                }
            }
        }
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.state(), GameState::AwaitingMove(Color::Black));
        assert_eq!(game.board(), &Board::initial());
        assert_eq!(game.legal_moves().len(), 4);
        assert_eq!(
            Game::with_first_mover(Color::White).current(),
            Some(Color::White)
        );
    }

    #[test]
    fn turns_alternate() {
        let mut game = Game::new();
        let outcome = game.play_at(2, 3).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Normal {
                flipped: SquareSet::new().insert(sq(3, 3))
            }
        );
        assert_eq!(game.current(), Some(Color::White));
        assert_eq!(game.board().score(), Score { black: 4, white: 1 });
        assert_eq!(game.moves_played(), 1);

        game.reset();
        assert_eq!(game, Game::new());
        assert_eq!(game.board(), &Board::initial());
    }

    #[test]
    fn invalid_move_keeps_turn() {
        let mut game = Game::new();
        assert_eq!(
            game.play_at(0, 0),
            Err(InvalidMove::NoFlips {
                square: sq(0, 0),
                color: Color::Black
            })
        );
        assert_eq!(game.play_at(9, 9), Err(InvalidMove::OutOfBounds { row: 9, column: 9 }));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn opponent_without_moves_is_skipped() {
        // White's discs sit next to black discs on the edge, so white can
        // never enclose anything.
        let board: Board = "
            XO......
            ........
            ........
            ........
            ........
            ........
            ........
            XO......"
            .parse()
            .unwrap();
        let mut game = Game::from_board(board, Color::Black);
        assert_eq!(game.current(), Some(Color::Black));
        let outcome = game.play_at(0, 2).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Passed {
                flipped: SquareSet::new().insert(sq(0, 1)),
                skipped: Color::White
            }
        );
        assert_eq!(game.current(), Some(Color::Black));
        let outcome = game.play_at(7, 2).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::GameEnded {
                flipped: SquareSet::new().insert(sq(7, 1)),
                result: GameResult::BlackWins
            }
        );
        assert!(game.is_over());
        assert_eq!(game.board().score(), Score { black: 6, white: 0 });
        assert_eq!(game.play_at(0, 6), Err(InvalidMove::GameOver));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn color_without_moves_is_skipped_at_start() {
        let board: Board = "
            OX......
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        // Black cannot enclose anything, white can play (0, 2)
        let game = Game::from_board(board, Color::Black);
        assert_eq!(game.current(), Some(Color::White));
    }

    #[test]
    fn game_without_moves_is_over_immediately() {
        let board: Board = "
            XXXXXXXX
            XXXXXXXX
            XXXXXXXX
            XXXXXXXX
            XXXXOOOO
            OOOOOOOO
            OOOOOOOO
            OOOOOOOO"
            .parse()
            .unwrap();
        let game = Game::from_board(board, Color::White);
        assert_eq!(game.result(), Some(GameResult::BlackWins));
        assert_eq!(game.current(), None);
    }
}
