use othello::Square;

/// Static value of owning each square, in row-major order.
///
/// Corners can never be flipped, so they are worth the most. The squares
/// next to a corner hand the corner to the opponent and are penalized,
/// the diagonal ones (X-squares) more than the edge ones (C-squares).
/// The rest of the edges are mildly good, the interior is neutral to
/// slightly negative.
#[rustfmt::skip]
pub const WEIGHTS: [[i32; 8]; 8] = [
    [100, -20,  10,   5,   5,  10, -20, 100],
    [-20, -50,  -2,  -2,  -2,  -2, -50, -20],
    [ 10,  -2,  -1,  -1,  -1,  -1,  -2,  10],
    [  5,  -2,  -1,  -1,  -1,  -1,  -2,   5],
    [  5,  -2,  -1,  -1,  -1,  -1,  -2,   5],
    [ 10,  -2,  -1,  -1,  -1,  -1,  -2,  10],
    [-20, -50,  -2,  -2,  -2,  -2, -50, -20],
    [100, -20,  10,   5,   5,  10, -20, 100],
];

/// How much each flipped disc adds to a move's score.
pub const FLIP_WEIGHT: i32 = 1;

pub fn weight(square: Square) -> i32 {
    WEIGHTS[usize::from(square.row())][usize::from(square.column())]
}
