use std::path::{Path, PathBuf};

use anyhow::Context;
use othello::Color;
use othello_bots::BotKind;
use serde::{Deserialize, Serialize};

/// Settings for one game session.
///
/// Can be loaded from a JSON file; missing fields get their default value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the high scores are kept.
    pub score_file: PathBuf,
    /// The computer's strategy.
    pub bot: BotKind,
    /// The human's color. Black moves first.
    pub human_color: Color,
    /// Name stored with the score when none is entered at the end of the game.
    pub player_name: String,
    /// Pause before each computer move, so the human can follow along.
    pub computer_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            score_file: PathBuf::from("./scores.txt"),
            bot: BotKind::Positional,
            human_color: Color::Black,
            player_name: String::from("player"),
            computer_delay_ms: 400,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }
}
