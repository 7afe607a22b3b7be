mod greedy;
mod human;
mod positional;
mod weights;
pub use greedy::*;
pub use human::*;
pub use positional::*;
pub use weights::*;

use othello::{Board, Color, Square};
use serde::{Deserialize, Serialize};

/// What a [`Player`] wants to do on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Play(Square),
    /// No move yet, e.g. because the human hasn't clicked anything.
    AwaitInput,
}

/// Something that can pick moves: a computer strategy or a human behind the view.
pub trait Player {
    fn name(&self) -> &str;

    /// Pick a move for `color` on `board`.
    ///
    /// Only called while it is `color`'s turn, so there is at least one legal move.
    fn choose_move(&mut self, board: &Board, color: Color) -> Decision;

    /// Called with squares the user clicked while it was this player's turn.
    fn receive_click(&mut self, _square: Square) {}

    /// Whether this player waits for the user instead of computing moves.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// The available computer strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    /// Positional weights plus flipped discs, see [`PositionalBot`].
    #[default]
    Positional,
    /// Most flipped discs, see [`GreedyBot`].
    Greedy,
}

impl BotKind {
    pub fn build(self) -> Box<dyn Player> {
        match self {
            BotKind::Positional => Box::new(PositionalBot::new()),
            BotKind::Greedy => Box::new(GreedyBot::new()),
        }
    }
}

impl std::fmt::Display for BotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotKind::Positional => write!(f, "positional"),
            BotKind::Greedy => write!(f, "greedy"),
        }
    }
}

impl std::str::FromStr for BotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positional" => Ok(BotKind::Positional),
            "greedy" => Ok(BotKind::Greedy),
            _ => Err(format!(
                "Unknown bot '{}', expected 'positional' or 'greedy'",
                s
            )),
        }
    }
}

/// Picks the legal move with the highest score, preferring the earliest
/// square in row-major order among equal scores.
pub(crate) fn best_by<F>(board: &Board, color: Color, mut score: F) -> Option<(Square, i32)>
where
    F: FnMut(Square) -> i32,
{
    let mut best: Option<(Square, i32)> = None;
    for square in board.legal_moves(color) {
        let s = score(square);
        match best {
            Some((_, best_score)) if s <= best_score => {}
            _ => best = Some((square, s)),
        }
    }
    best
}
