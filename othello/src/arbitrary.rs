use quickcheck::{Arbitrary, Gen};

use crate::{Board, Color, Game, Square};

/// A position that can occur in a real game, plus the color to move.
#[derive(Clone, Debug)]
pub struct ReachablePosition {
    pub board: Board,
    pub to_move: Color,
}

impl Arbitrary for ReachablePosition {
    fn arbitrary(g: &mut Gen) -> Self {
        // Play out a random number of random legal moves from the opening
        let num_moves = usize::arbitrary(g) % 64;
        let mut game = Game::new();
        for _ in 0..num_moves {
            let moves: Vec<Square> = game.legal_moves().into_iter().collect();
            match g.choose(&moves) {
                Some(&square) => {
                    game.play(square).unwrap();
                }
                None => break, // Game over
            }
        }
        ReachablePosition {
            board: *game.board(),
            to_move: game.current().unwrap_or(Color::Black),
        }
    }
}
