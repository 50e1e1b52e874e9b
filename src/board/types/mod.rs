//! Core chess types.
//!
//! This module contains the value types a position is made of:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - bounds-checked (rank, file) coordinate
//! - `CastlingRights` - typed view of the castling field

mod castling;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use piece::{Color, Piece};
pub use square::Square;
