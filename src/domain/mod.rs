mod board;
mod color;
mod tile;

pub use board::{Board, BoardError};
pub use color::{Color, ColorError};
pub use tile::Tile;
