//! Error types for position encoding and board queries.

use std::fmt;

/// Structural problems with the layout of a FEN string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// FEN string does not have exactly 6 whitespace-separated fields
    FieldCount { found: usize },
    /// Piece placement does not have exactly 8 `/`-separated ranks
    RankCount { found: usize },
    /// A piece would be placed beyond the h-file
    RankOverflow { rank: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::FieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            LayoutError::RankCount { found } => {
                write!(f, "piece placement must have exactly 8 ranks, found {found}")
            }
            LayoutError::RankOverflow { rank } => {
                write!(f, "rank {} describes more than 8 files", rank + 1)
            }
        }
    }
}

/// Numeric FEN fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterField {
    HalfmoveClock,
    FullmoveNumber,
}

impl fmt::Display for CounterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterField::HalfmoveClock => write!(f, "halfmove clock"),
            CounterField::FullmoveNumber => write!(f, "fullmove number"),
        }
    }
}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Wrong number of fields or ranks
    MalformedFen(LayoutError),
    /// Unrecognized character in the piece placement (`rank` is 0-7, 0 = rank 1)
    InvalidPieceChar { char: char, rank: usize },
    /// Side to move is neither 'w' nor 'b'
    InvalidSideToken { found: String },
    /// Clock or move number is not a decimal number, or the fullmove number is 0
    InvalidNumberToken { field: CounterField, found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MalformedFen(layout) => write!(f, "Malformed FEN: {layout}"),
            FenError::InvalidPieceChar { char, rank } => {
                write!(f, "Invalid piece character '{char}' in rank {}", rank + 1)
            }
            FenError::InvalidSideToken { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidNumberToken {
                field: CounterField::FullmoveNumber,
                found,
            } if found.parse::<u32>() == Ok(0) => {
                write!(f, "Invalid fullmove number '{found}', must be at least 1")
            }
            FenError::InvalidNumberToken { field, found } => {
                write!(f, "Invalid {field} '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

impl From<LayoutError> for FenError {
    fn from(err: LayoutError) -> Self {
        FenError::MalformedFen(err)
    }
}

/// Error type for square lookups and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank or file outside 0-7
    OutOfRange { rank: usize, file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfRange { rank, file } => {
                write!(f, "Square ({rank}, {file}) out of range (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
