use std::time::{Duration, Instant};

use othello::{Square, SquareSet, TurnOutcome, BOARD_SIZE};
use othello_session::{Session, StepOutcome};
use ratatui::backend::Backend;
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use tracing::{error, info};

use crate::board_widget::{square_at, BoardWidget, BOARD_WIDGET_HEIGHT, BOARD_WIDGET_WIDTH};

const MAX_NAME_LENGTH: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Mode {
    Playing,
    /// The game is over and the human is typing their name.
    NamePrompt(String),
    /// The score was saved or skipped, only quitting is left.
    Finished,
}

pub struct App {
    session: Session,
    mode: Mode,
    cursor: (u8, u8),
    message: String,
    /// Where the board was drawn last, for mapping mouse clicks.
    board_area: Rect,
    computer_delay: Duration,
    last_move_at: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        let computer_delay = Duration::from_millis(session.config().computer_delay_ms);
        Self {
            session,
            mode: Mode::Playing,
            cursor: (3, 3),
            message: String::new(),
            board_area: Rect::default(),
            computer_delay,
            last_move_at: Instant::now(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn computer_move_due(&self) -> bool {
        self.mode == Mode::Playing
            && self.session.is_computer_turn()
            && self.last_move_at.elapsed() >= self.computer_delay
    }

    fn play_computer_move(&mut self) {
        match self.session.step() {
            Ok(outcome) => self.after_step(outcome),
            Err(err) => {
                error!(%err, "The computer's move was rejected");
                self.message = format!("The computer tried an invalid move: {}", err);
                self.last_move_at = Instant::now();
            }
        }
    }

    fn play_human_move(&mut self, square: Square) {
        if !self.session.is_human_turn() {
            self.message = String::from("Wait for the computer's move");
            return;
        }
        match self.session.click(square) {
            Ok(outcome) => self.after_step(outcome),
            Err(err) => self.message = format!("Invalid move: {}", err),
        }
    }

    fn after_step(&mut self, outcome: StepOutcome) {
        if let StepOutcome::Played {
            color,
            square,
            outcome,
        } = outcome
        {
            self.last_move_at = Instant::now();
            self.message = match outcome {
                TurnOutcome::Passed { skipped, .. } => {
                    format!("{} has no legal move, {} plays again", skipped, color)
                }
                _ if color == self.session.human_color() => String::new(),
                _ => format!("{} played {}", self.session.player(color).name(), square),
            };
        }
        if self.mode == Mode::Playing && self.session.game().is_over() {
            self.mode = Mode::NamePrompt(String::new());
            self.message = String::from(
                "Game over! Type your name and press Enter to save your score, or Esc to skip",
            );
        }
    }

    fn save_score(&mut self, name: &str) {
        self.message = match self.session.finish(name) {
            Ok(true) => format!("New high score: {}! Press q to quit", self.session.high_score()),
            Ok(false) => String::from("Score saved. Press q to quit"),
            Err(err) => {
                error!("Could not save score: {:#}", err);
                format!("Could not save score: {:#}", err)
            }
        };
        self.mode = Mode::Finished;
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) if self.mode == Mode::Playing => {
                if let Some(square) = square_at(self.board_area, column, row) {
                    self.cursor = (square.row(), square.column());
                    self.play_human_move(square);
                }
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        let max = BOARD_SIZE - 1;
        match &mut self.mode {
            Mode::Playing => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up => self.cursor.0 = self.cursor.0.saturating_sub(1),
                KeyCode::Down => self.cursor.0 = (self.cursor.0 + 1).min(max),
                KeyCode::Left => self.cursor.1 = self.cursor.1.saturating_sub(1),
                KeyCode::Right => self.cursor.1 = (self.cursor.1 + 1).min(max),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(square) = Square::new(self.cursor.0, self.cursor.1) {
                        self.play_human_move(square);
                    }
                }
                _ => {}
            },
            Mode::NamePrompt(name) => match code {
                KeyCode::Char(c) if name.chars().count() < MAX_NAME_LENGTH => name.push(c),
                KeyCode::Backspace => {
                    name.pop();
                }
                KeyCode::Enter => {
                    let name = std::mem::take(name);
                    self.save_score(&name);
                }
                KeyCode::Esc => {
                    info!("Score not saved");
                    self.mode = Mode::Finished;
                    self.message = String::from("Score not saved. Press q to quit");
                }
                _ => {}
            },
            Mode::Finished => {
                if matches!(code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
                    self.should_quit = true;
                }
            }
        }
    }

    fn info_lines(&self) -> Vec<Line<'static>> {
        let score = self.session.game().board().score();
        let human_color = self.session.human_color();
        let mut lines = vec![
            Line::from(format!("You play {}", human_color)),
            Line::from(format!("Black {} : {} White", score.black, score.white)),
            Line::from(format!("High score: {}", self.session.high_score())),
            Line::from(""),
            Line::from(self.session.status_line()),
            Line::from(self.message.clone()),
        ];
        match &self.mode {
            Mode::Playing => {
                lines.push(Line::from(""));
                lines.push(Line::from(
                    "Click a square, or move with the arrow keys and play with Enter. q quits.",
                ));
            }
            Mode::NamePrompt(name) => lines.push(Line::from(format!("Name: {}_", name))),
            Mode::Finished => {}
        }
        lines
    }

    pub fn ui(&mut self, frame: &mut Frame) {
        let layout = Layout::new(
            Direction::Horizontal,
            [Constraint::Length(BOARD_WIDGET_WIDTH), Constraint::Min(0)],
        )
        .split(frame.size());
        self.board_area = Rect {
            height: layout[0].height.min(BOARD_WIDGET_HEIGHT),
            ..layout[0]
        };

        let playing = self.mode == Mode::Playing;
        let highlighted = if playing && self.session.is_human_turn() {
            self.session.game().legal_moves()
        } else {
            SquareSet::new()
        };
        let cursor = if playing {
            Square::new(self.cursor.0, self.cursor.1)
        } else {
            None
        };
        frame.render_widget(
            BoardWidget {
                board: self.session.game().board(),
                highlighted,
                cursor,
            },
            self.board_area,
        );
        frame.render_widget(
            Paragraph::new(self.info_lines())
                .block(Block::new().borders(Borders::ALL).title(" Info "))
                .wrap(Wrap { trim: true }),
            layout[1],
        );
    }
}

/// Draws and handles input until the user quits.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.ui(frame))?;
        if app.computer_move_due() {
            app.play_computer_move();
            continue;
        }
        if event::poll(Duration::from_millis(16))? {
            app.handle_event(event::read()?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use othello::Color;
    use othello_session::Config;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn app(test_name: &str) -> (App, std::path::PathBuf) {
        let score_file = std::env::temp_dir().join(format!(
            "othello_tui_{}_{}.txt",
            test_name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&score_file);
        let session = Session::new(Config {
            score_file: score_file.clone(),
            computer_delay_ms: 0,
            ..Config::default()
        });
        (App::new(session), score_file)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn sq(row: u8, column: u8) -> Square {
        Square::new(row, column).unwrap()
    }

    #[test]
    fn keyboard_move_then_computer_reply() {
        let (mut app, _) = app("keyboard");
        assert!(!app.computer_move_due());
        app.handle_event(key(KeyCode::Up));
        app.handle_event(key(KeyCode::Enter));
        let board = *app.session.game().board();
        assert_eq!(board.get(sq(2, 3)), Some(Color::Black));
        assert_eq!(app.message, "");

        assert!(app.computer_move_due());
        app.play_computer_move();
        assert_eq!(app.session.game().board().get(sq(2, 2)), Some(Color::White));
        assert_eq!(app.message, "positional bot played (2, 2)");
        assert!(!app.computer_move_due());
    }

    #[test]
    fn mouse_click_plays_square() {
        let (mut app, _) = app("mouse");
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| app.ui(frame)).unwrap();
        // The board sits in the top-left corner, cell (2, 3) starts at x = 3 + 3 * 3
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 13,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.session.game().board().get(sq(2, 3)), Some(Color::Black));
        assert_eq!(app.cursor, (2, 3));
    }

    #[test]
    fn invalid_move_is_reported() {
        let (mut app, _) = app("invalid");
        app.handle_event(key(KeyCode::Enter));
        assert!(app.message.starts_with("Invalid move"));
        assert!(app.session.is_human_turn());
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn name_prompt_after_game_over() {
        let (mut app, score_file) = app("prompt");
        while app.mode == Mode::Playing {
            if app.session.is_human_turn() {
                let square = app.session.game().legal_moves().first().unwrap();
                app.play_human_move(square);
            } else {
                app.play_computer_move();
            }
        }
        assert!(app.session.game().is_over());
        // 'q' is part of the name here, not a quit
        for c in "Adaq".chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
        app.handle_event(key(KeyCode::Backspace));
        assert_eq!(app.mode, Mode::NamePrompt(String::from("Ada")));
        assert!(!app.should_quit());

        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Finished);
        let saved = std::fs::read_to_string(&score_file).unwrap();
        assert_eq!(saved, format!("Ada {}\n", app.session.human_score()));
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());
        let _ = std::fs::remove_file(&score_file);
    }
}
