use othello::{Board, Color, Square};
use tracing::trace;

use crate::{Decision, Player};

/// Adapter for moves made through the view.
///
/// The view forwards clicks via [`Player::receive_click()`]; the next call to
/// [`Player::choose_move()`] hands the click out once. Whether the click is a
/// legal move is for the game to decide.
pub struct HumanPlayer {
    name: String,
    pending: Option<Square>,
}

impl HumanPlayer {
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            pending: None,
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _board: &Board, _color: Color) -> Decision {
        match self.pending.take() {
            Some(square) => Decision::Play(square),
            None => Decision::AwaitInput,
        }
    }

    fn receive_click(&mut self, square: Square) {
        trace!(player = %self.name, %square, "Click received");
        self.pending = Some(square);
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
