use crate::{Board, Color, Square, SquareSet};

/// Draws the board in a box with row and column numbers.
///
/// Squares in `highlighted` that are empty are drawn as `·`, e.g. to show
/// the legal moves.
pub fn visualize_board(board: &Board, highlighted: SquareSet) -> String {
    let mut result = String::from("    0 1 2 3 4 5 6 7");
    result += "\n  ╭";
    result += &"──".repeat(8);
    result += "─╮";
    for square in Square::all() {
        if square.column() == 0 {
            result += &format!("\n{:>1} │ ", square.row());
        }
        let symbol = match board.get(square) {
            Some(Color::Black) => '●',
            Some(Color::White) => '○',
            None if highlighted.contains(square) => '·',
            None => ' ',
        };
        result.push(symbol);
        result.push(' ');
        if square.column() == 7 {
            result += "│";
        }
    }
    result += "\n  ╰";
    result += &"──".repeat(8);
    result += "─╯";
    result
}
