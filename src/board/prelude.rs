//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_position::board::prelude::*;
//!
//! let position = decode(DEFAULT_FEN).unwrap();
//! assert_eq!(encode(&position), DEFAULT_FEN);
//! ```

pub use super::{
    decode, encode, CastlingRights, Color, FenError, Piece, Position, PositionBuilder, Square,
    SquareError, DEFAULT_FEN,
};
