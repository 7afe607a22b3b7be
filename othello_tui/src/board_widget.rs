use othello::{Board, Color, Square, SquareSet, BOARD_SIZE};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color as TermColor, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

const CELL_WIDTH: u16 = 3;

const LABEL_WIDTH: u16 = 2;

/// Size of the widget including its border and the row/column labels.
pub const BOARD_WIDGET_WIDTH: u16 = 2 + LABEL_WIDTH + CELL_WIDTH * BOARD_SIZE as u16;
pub const BOARD_WIDGET_HEIGHT: u16 = 2 + 1 + BOARD_SIZE as u16;

/// Draws the board, the legal moves and the keyboard cursor.
pub struct BoardWidget<'a> {
    pub board: &'a Board,
    /// Shown as `·` on empty cells.
    pub highlighted: SquareSet,
    pub cursor: Option<Square>,
}

/// Top-left corner of the cell for square (0, 0).
fn grid_origin(area: Rect) -> (u16, u16) {
    (area.x + 1 + LABEL_WIDTH, area.y + 2)
}

fn fits(area: Rect) -> bool {
    area.width >= BOARD_WIDGET_WIDTH && area.height >= BOARD_WIDGET_HEIGHT
}

/// The square under terminal position (`x`, `y`), for a board rendered into `area`.
pub fn square_at(area: Rect, x: u16, y: u16) -> Option<Square> {
    if !fits(area) {
        return None;
    }
    let (left, top) = grid_origin(area);
    if x < left || y < top {
        return None;
    }
    let row = u8::try_from(y - top).ok()?;
    let column = u8::try_from((x - left) / CELL_WIDTH).ok()?;
    Square::new(row, column)
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !fits(area) {
            Paragraph::new("Terminal too small").render(area, buf);
            return;
        }
        Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Othello ")
            .render(
                Rect {
                    width: BOARD_WIDGET_WIDTH,
                    height: BOARD_WIDGET_HEIGHT,
                    ..area
                },
                buf,
            );

        let (left, top) = grid_origin(area);
        let label_style = Style::new().add_modifier(Modifier::DIM);
        for i in 0..BOARD_SIZE {
            let offset = u16::from(i);
            buf.set_string(left + offset * CELL_WIDTH + 1, top - 1, i.to_string(), label_style);
            buf.set_string(area.x + 1, top + offset, i.to_string(), label_style);
        }

        for square in Square::all() {
            let x = left + u16::from(square.column()) * CELL_WIDTH;
            let y = top + u16::from(square.row());
            let background = if self.cursor == Some(square) {
                TermColor::LightGreen
            } else {
                TermColor::Green
            };
            let (symbol, foreground) = match self.board.get(square) {
                Some(Color::Black) => ('●', TermColor::Black),
                Some(Color::White) => ('○', TermColor::White),
                None if self.highlighted.contains(square) => ('·', TermColor::Yellow),
                None => (' ', TermColor::Black),
            };
            buf.set_string(
                x,
                y,
                format!(" {} ", symbol),
                Style::new().fg(foreground).bg(background),
            );
        }
    }
}
