use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use othello::Color;
use othello_bots::BotKind;
use othello_session::{Config, Session};
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::crossterm::ExecutableCommand;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod app;
mod board_widget;

use app::App;

/// Play Othello against the computer in the terminal.
#[derive(Parser)]
struct Args {
    /// Path to a JSON config file. The flags below take precedence over it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where high scores are kept
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// The computer's strategy: "positional" or "greedy"
    #[arg(short, long)]
    bot: Option<BotKind>,

    /// Your color, "black" (moves first) or "white"
    #[arg(long)]
    human_color: Option<Color>,

    /// Name stored with your score if you don't enter one
    #[arg(short, long)]
    player_name: Option<String>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    computer_delay_ms: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(score_file) = &self.score_file {
            config.score_file = score_file.clone();
        }
        if let Some(bot) = self.bot {
            config.bot = bot;
        }
        if let Some(human_color) = self.human_color {
            config.human_color = human_color;
        }
        if let Some(player_name) = &self.player_name {
            config.player_name = player_name.clone();
        }
        if let Some(computer_delay_ms) = self.computer_delay_ms {
            config.computer_delay_ms = computer_delay_ms;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(log_file) = &args.log_file {
        initialize_logging(args.log_level, log_file)?;
    }
    let config = args.config()?;
    info!(?config, "Starting");
    let mut app = App::new(Session::new(config));

    enable_raw_mode()?;
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| app::run(&mut terminal, &mut app));

    // Restore the terminal even if the game loop failed
    disable_raw_mode()?;
    stdout()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;
    result
}

fn initialize_logging(level: LevelFilter, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Could not create log file '{}'", path.display()))?;

    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}
