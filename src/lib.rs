pub mod board;

pub use board::{decode, encode, Color, FenError, Piece, Position, Square, DEFAULT_FEN};
