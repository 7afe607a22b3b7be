use othello::{Board, Color};
use tracing::debug;

use crate::{best_by, weight, Decision, Player, FLIP_WEIGHT};

/// The default computer opponent.
///
/// Scores each legal move as the [`WEIGHTS`](crate::WEIGHTS) entry of the
/// target square plus [`FLIP_WEIGHT`] per flipped disc, and plays the best
/// one. Among equal scores, the first square in row-major order wins.
/// No look-ahead.
pub struct PositionalBot;

impl PositionalBot {
    pub fn new() -> PositionalBot {
        PositionalBot
    }
}

impl Default for PositionalBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for PositionalBot {
    fn name(&self) -> &str {
        "positional bot"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> Decision {
        let best = best_by(board, color, |square| {
            let flipped = board.flips(square, color).len() as i32;
            weight(square) + FLIP_WEIGHT * flipped
        });
        match best {
            Some((square, score)) => {
                debug!(%color, %square, score, "Positional bot picked a move");
                Decision::Play(square)
            }
            None => Decision::AwaitInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use othello::Square;

    use super::*;

    fn sq(row: u8, column: u8) -> Square {
        Square::new(row, column).unwrap()
    }

    #[test]
    fn reply_to_opening_move() {
        let mut board = Board::initial();
        board.apply_move(sq(2, 3), Color::Black).unwrap();
        assert_eq!(<(u32, u32)>::from(board.score()), (4, 1));
        // (2, 2), (2, 4) and (4, 2) each flip one disc on a -1 square,
        // so the row-major tie-break picks (2, 2).
        assert_eq!(
            Vec::from_iter(board.legal_moves(Color::White)),
            vec![sq(2, 2), sq(2, 4), sq(4, 2)]
        );
        assert_eq!(
            PositionalBot::new().choose_move(&board, Color::White),
            Decision::Play(sq(2, 2))
        );
    }

    #[test]
    fn takes_corner_over_more_flips() {
        // White can take the corner (0, 0) flipping one disc, or play
        // (4, 7) flipping three.
        let board: Board = "
            ........
            .X......
            ..O.....
            ........
            ...OXXX.
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let mut bot = PositionalBot::new();
        assert_eq!(board.flips(sq(0, 0), Color::White).len(), 1);
        assert_eq!(board.flips(sq(4, 7), Color::White).len(), 3);
        assert_eq!(bot.choose_move(&board, Color::White), Decision::Play(sq(0, 0)));
    }

    #[test]
    fn avoids_x_square() {
        // Black can flip two discs from the X-square (1, 1), or one from (3, 2).
        let board: Board = "
            ........
            ........
            ..O.....
            ...OX...
            ....X...
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let mut bot = PositionalBot::new();
        assert_eq!(board.flips(sq(1, 1), Color::Black).len(), 2);
        assert_eq!(
            Vec::from_iter(board.legal_moves(Color::Black)),
            vec![sq(1, 1), sq(3, 2)]
        );
        assert_eq!(bot.choose_move(&board, Color::Black), Decision::Play(sq(3, 2)));
    }

    #[test]
    fn no_legal_move() {
        let text = "XO......".to_string() + &"........".repeat(7);
        let board: Board = text.parse().unwrap();
        assert_eq!(
            PositionalBot::new().choose_move(&board, Color::White),
            Decision::AwaitInput
        );
    }
}
