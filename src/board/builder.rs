//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_position::board::{Color, Piece, PositionBuilder, Square};
//!
//! let e1 = Square::new(0, 4).unwrap();
//! let e8 = Square::new(7, 4).unwrap();
//! let position = PositionBuilder::new()
//!     .piece(e1, Color::White, Piece::King)
//!     .piece(e8, Color::Black, Piece::King)
//!     .side_to_move(Color::Black)
//!     .build();
//! assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 1");
//! ```

use super::state::Grid;
use super::{Color, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
///
/// Fields are stored the way the FEN decoder stores them, so a built position
/// always encodes to a FEN string that decodes back to it.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    squares: Grid,
    side_to_move: Color,
    castling: String,
    en_passant: String,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Position> for PositionBuilder {
    fn from(position: Position) -> Self {
        PositionBuilder {
            squares: position.squares,
            side_to_move: position.side_to_move,
            castling: position.castling,
            en_passant: position.en_passant,
            halfmove_clock: position.halfmove_clock,
            fullmove_number: position.fullmove_number,
        }
    }
}

impl PositionBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        Position::empty().into()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        Position::new().into()
    }

    /// Place a piece on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.squares[square.rank()][square.file()] = Some((color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.squares[square.rank()][square.file()] = None;
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the castling field, e.g. `"KQ"` or `"-"`.
    ///
    /// Whitespace is dropped so the field stays a single FEN token; a token
    /// with nothing left becomes `-`.
    #[must_use]
    pub fn castling(mut self, token: &str) -> Self {
        let token: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        self.castling = if token.is_empty() {
            "-".to_string()
        } else {
            token
        };
        self
    }

    /// Set the en passant field to a target square.
    #[must_use]
    pub fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = target.to_string();
        self
    }

    /// Clear the en passant target.
    #[must_use]
    pub fn clear_en_passant(mut self) -> Self {
        self.en_passant = "-".to_string();
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number. Zero is raised to 1.
    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number.max(1);
        self
    }

    /// Build the position.
    #[must_use]
    pub fn build(self) -> Position {
        Position {
            squares: self.squares,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }
}
