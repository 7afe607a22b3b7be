use othello::{Board, Color};
use tracing::debug;

use crate::{best_by, Decision, Player};

/// Plays the move that flips the most discs, ignoring position.
pub struct GreedyBot;

impl GreedyBot {
    pub fn new() -> GreedyBot {
        GreedyBot
    }
}

impl Default for GreedyBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for GreedyBot {
    fn name(&self) -> &str {
        "greedy bot"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> Decision {
        match best_by(board, color, |square| board.flips(square, color).len() as i32) {
            Some((square, flipped)) => {
                debug!(%color, %square, flipped, "Greedy bot picked a move");
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

    #[test]
    fn most_flips_wins() {
        // Same position as for the positional bot: the greedy bot goes for
        // three discs instead of the corner.
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
        assert_eq!(
            GreedyBot::new().choose_move(&board, Color::White),
            Decision::Play(Square::new(4, 7).unwrap())
        );
    }

    #[test]
    fn ties_go_to_first_square() {
        let board = Board::initial();
        assert_eq!(
            GreedyBot::new().choose_move(&board, Color::Black),
            Decision::Play(Square::new(2, 3).unwrap())
        );
    }
}
