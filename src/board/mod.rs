//! Chess position representation and FEN encoding.
//!
//! A [`Position`] is an 8x8 grid of pieces plus the game-state fields that
//! travel with it in Forsyth-Edwards Notation. Decoding and encoding are
//! lossless: the castling and en passant fields are kept as supplied, so
//! `encode(decode(fen)) == fen` for any canonical FEN string.
//!
//! No move generation or legality checking is performed.
//!
//! # Example
//! ```
//! use chess_position::board::{Color, Piece, Position};
//!
//! let fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e3 0 2";
//! let position: Position = fen.parse().unwrap();
//! assert_eq!(position.piece_at(3, 4), Ok(Some((Color::White, Piece::Pawn))));
//! assert_eq!(position.to_fen(), fen);
//! ```

mod builder;
mod error;
mod fen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{CounterField, FenError, LayoutError, SquareError};
pub use fen::{decode, encode};
pub use state::{Position, DEFAULT_FEN};
pub use types::{CastlingRights, Color, Piece, Square};
