pub use board::*;
pub use errors::*;
pub use game::*;
pub use square_set::*;
pub use types::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod game;
mod square_set;
mod types;
mod visualization;
