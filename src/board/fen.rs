use std::fmt;
use std::str::FromStr;

use super::error::{CounterField, FenError, LayoutError};
use super::state::Grid;
use super::{Color, Piece, Position};

/// Parse a position from FEN notation.
///
/// The castling and en passant fields are stored verbatim; see [`Position`].
pub fn decode(fen: &str) -> Result<Position, FenError> {
    let result = decode_fields(fen);

    #[cfg(feature = "logging")]
    match &result {
        Ok(_) => log::trace!("decoded FEN '{fen}'"),
        Err(err) => log::debug!("rejected FEN '{fen}': {err}"),
    }

    result
}

/// Convert a position to FEN notation.
#[must_use]
pub fn encode(position: &Position) -> String {
    let mut fen = String::with_capacity(90);
    write_placement(&mut fen, &position.squares);
    for field in [
        position.side_to_move.fen_token(),
        position.castling.as_str(),
        position.en_passant.as_str(),
    ] {
        fen.push(' ');
        fen.push_str(field);
    }
    fen.push(' ');
    fen.push_str(&position.halfmove_clock.to_string());
    fen.push(' ');
    fen.push_str(&position.fullmove_number.to_string());
    fen
}

fn decode_fields(fen: &str) -> Result<Position, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let [placement, side, castling, en_passant, halfmove, fullmove] = parts[..] else {
        return Err(LayoutError::FieldCount { found: parts.len() }.into());
    };

    let squares = parse_placement(placement)?;

    let side_to_move = match side {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToken {
                found: other.to_string(),
            })
        }
    };

    let halfmove_clock = parse_counter(halfmove, CounterField::HalfmoveClock)?;
    let fullmove_number = match parse_counter(fullmove, CounterField::FullmoveNumber)? {
        0 => {
            return Err(FenError::InvalidNumberToken {
                field: CounterField::FullmoveNumber,
                found: fullmove.to_string(),
            })
        }
        n => n,
    };

    Ok(Position {
        squares,
        side_to_move,
        castling: castling.to_string(),
        en_passant: en_passant.to_string(),
        halfmove_clock,
        fullmove_number,
    })
}

fn parse_placement(placement: &str) -> Result<Grid, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(LayoutError::RankCount { found: ranks.len() }.into());
    }

    let mut squares: Grid = [[None; 8]; 8];
    for (idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - idx;
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(skip @ 1..=8) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let piece =
                Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { char: c, rank })?;
            let cell = squares[rank]
                .get_mut(file)
                .ok_or(LayoutError::RankOverflow { rank })?;
            *cell = Some(piece);
            file += 1;
        }
    }

    Ok(squares)
}

/// Counters must be plain decimal digits; `str::parse` alone would accept a leading `+`.
fn parse_counter(token: &str, field: CounterField) -> Result<u32, FenError> {
    let invalid = || FenError::InvalidNumberToken {
        field,
        found: token.to_string(),
    };
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}

fn write_placement(fen: &mut String, squares: &Grid) {
    for rank in (0..8).rev() {
        let mut empty = 0;
        for cell in &squares[rank] {
            match cell {
                Some((color, piece)) => {
                    if empty > 0 {
                        fen.push_str(&empty.to_string());
                        empty = 0;
                    }
                    fen.push(piece.to_fen_char(*color));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            fen.push_str(&empty.to_string());
        }
        if rank > 0 {
            fen.push('/');
        }
    }
}

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        decode(fen)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        encode(self)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl TryFrom<String> for Position {
    type Error = FenError;

    fn try_from(fen: String) -> Result<Self, Self::Error> {
        decode(&fen)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        encode(&position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}
