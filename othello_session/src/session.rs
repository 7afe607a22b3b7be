use anyhow::bail;
use othello::{
    visualize_board, Color, Game, GameResult, GameState, InvalidMove, Square, SquareSet,
    TurnOutcome,
};
use othello_bots::{Decision, HumanPlayer, Player};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::high_score::ScoreFile;

/// What happened when the session asked the current player for a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The current player is the human, who hasn't picked a square yet.
    AwaitingInput,
    Played {
        color: Color,
        square: Square,
        outcome: TurnOutcome,
    },
    GameOver(GameResult),
}

/// One game of a human against the computer.
///
/// Owns the [`Game`] and both players. The view feeds clicks in through
/// [`Self::click()`] and lets the computer move through [`Self::step()`].
pub struct Session {
    config: Config,
    game: Game,
    /// Indexed by `Color as usize`.
    players: [Box<dyn Player>; 2],
    score_file: ScoreFile,
    high_score: u32,
    score_saved: bool,
}

impl Session {
    /// Starts a new game. Reads the high score once, up front.
    pub fn new(config: Config) -> Self {
        let score_file = ScoreFile::new(config.score_file.clone());
        let high_score = score_file.read_high_score();
        let human: Box<dyn Player> = Box::new(HumanPlayer::new(&config.player_name));
        let computer = config.bot.build();
        let players = match config.human_color {
            Color::Black => [human, computer],
            Color::White => [computer, human],
        };
        info!(
            human_color = %config.human_color,
            bot = %config.bot,
            high_score,
            "New game"
        );
        Self {
            config,
            game: Game::new(),
            players,
            score_file,
            high_score,
            score_saved: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn human_color(&self) -> Color {
        self.config.human_color
    }

    pub fn player(&self, color: Color) -> &dyn Player {
        self.players[color as usize].as_ref()
    }

    /// The number of discs the human currently has.
    pub fn human_score(&self) -> u32 {
        self.game.board().score().of(self.human_color())
    }

    /// The best score stored in the score file.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_human_turn(&self) -> bool {
        self.game.current() == Some(self.human_color())
    }

    pub fn is_computer_turn(&self) -> bool {
        self.game
            .current()
            .is_some_and(|color| !self.players[color as usize].is_interactive())
    }

    /// Hands a click to the player whose turn it is and tries to play it.
    ///
    /// Clicks during the computer's turn are ignored by the computer player.
    pub fn click(&mut self, square: Square) -> Result<StepOutcome, InvalidMove> {
        if let Some(color) = self.game.current() {
            self.players[color as usize].receive_click(square);
        }
        self.step()
    }

    /// Asks the current player for a move and plays it.
    ///
    /// An invalid move leaves the game unchanged, with the same player to move.
    pub fn step(&mut self) -> Result<StepOutcome, InvalidMove> {
        let color = match self.game.state() {
            GameState::AwaitingMove(color) => color,
            GameState::GameOver(result) => return Ok(StepOutcome::GameOver(result)),
        };
        let player = &mut self.players[color as usize];
        let square = match player.choose_move(self.game.board(), color) {
            Decision::Play(square) => square,
            Decision::AwaitInput => return Ok(StepOutcome::AwaitingInput),
        };
        match self.game.play(square) {
            Ok(outcome) => {
                info!(
                    player = player.name(),
                    %color,
                    %square,
                    flipped = outcome.flipped().len(),
                    "Move played"
                );
                match outcome {
                    TurnOutcome::Passed { skipped, .. } => {
                        info!(%skipped, "No legal move, turn skipped")
                    }
                    TurnOutcome::GameEnded { result, .. } => {
                        let score = self.game.board().score();
                        info!(%result, black = score.black, white = score.white, "Game over");
                        debug!(
                            "Final position:\n{}",
                            visualize_board(self.game.board(), SquareSet::new())
                        );
                    }
                    TurnOutcome::Normal { .. } => {}
                }
                Ok(StepOutcome::Played {
                    color,
                    square,
                    outcome,
                })
            }
            Err(err) => {
                if player.is_interactive() {
                    debug!(%err, "Rejected move");
                } else {
                    warn!(player = player.name(), %err, "Computer player made an invalid move");
                }
                Err(err)
            }
        }
    }

    /// Saves the human's score once the game is over.
    ///
    /// An empty `name` is replaced by the configured player name. Returns
    /// whether the score beat the stored high score.
    pub fn finish(&mut self, name: &str) -> anyhow::Result<bool> {
        if !self.game.is_over() {
            bail!("The game is not over yet");
        }
        if self.score_saved {
            bail!("The score of this game was already saved");
        }
        let name = match name.trim() {
            "" => self.config.player_name.as_str(),
            name => name,
        };
        let score = self.human_score();
        let new_high_score = self.score_file.record(name, score)?;
        self.score_saved = true;
        if new_high_score {
            self.high_score = score;
        }
        info!(name, score, new_high_score, "Score saved");
        Ok(new_high_score)
    }

    pub fn score_saved(&self) -> bool {
        self.score_saved
    }

    /// One line describing whose turn it is, or how the game ended.
    pub fn status_line(&self) -> String {
        let score = self.game.board().score();
        match self.game.state() {
            GameState::AwaitingMove(color) if color == self.human_color() => {
                format!("Your move ({})", color)
            }
            GameState::AwaitingMove(color) => {
                format!("{} is thinking ({})", self.player(color).name(), color)
            }
            GameState::GameOver(result) => format!(
                "{} Black {} : {} White, your score is {}",
                result,
                score.black,
                score.white,
                self.human_score()
            ),
        }
    }
}
