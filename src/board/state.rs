use super::error::SquareError;
use super::{CastlingRights, Color, Piece, Square};

/// The standard chess starting position.
pub const DEFAULT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Contents of the 64 squares, indexed `[rank][file]` with rank 0 = White's first rank.
pub(crate) type Grid = [[Option<(Color, Piece)>; 8]; 8];

/// A chess position: piece placement plus the game-state fields carried by FEN.
///
/// The castling and en passant fields are kept exactly as they were supplied so
/// that encoding reproduces them byte-for-byte. Use [`Position::castling_rights`]
/// and [`Position::en_passant_square`] for a typed interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Position {
    pub(crate) squares: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling: String,
    pub(crate) en_passant: String,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut squares: Grid = [[None; 8]; 8];
        for color in Color::BOTH {
            for (file, &piece) in BACK_RANK.iter().enumerate() {
                squares[color.back_rank()][file] = Some((color, piece));
                squares[color.pawn_start_rank()][file] = Some((color, Piece::Pawn));
            }
        }

        Position {
            squares,
            side_to_move: Color::White,
            castling: "KQkq".to_string(),
            en_passant: "-".to_string(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// An empty board, White to move, no castling rights, no en passant target.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: "-".to_string(),
            en_passant: "-".to_string(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Look up the piece at `(rank, file)`.
    ///
    /// Returns `Ok(None)` for an empty square and `SquareError::OutOfRange`
    /// when either coordinate is outside 0-7.
    pub fn piece_at(
        &self,
        rank: usize,
        file: usize,
    ) -> Result<Option<(Color, Piece)>, SquareError> {
        let square = Square::try_from((rank, file))?;
        Ok(self.piece_on(square))
    }

    /// Look up the piece on an already validated square.
    #[inline]
    #[must_use]
    pub fn piece_on(&self, square: Square) -> Option<(Color, Piece)> {
        self.squares[square.rank()][square.file()]
    }

    /// Iterate occupied squares, a1 first and h8 last.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|(color, piece)| (sq, color, piece)))
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// Raw castling field, e.g. `KQkq` or `-`.
    #[must_use]
    pub fn castling(&self) -> &str {
        &self.castling
    }

    /// Raw en passant field, e.g. `e3` or `-`.
    #[must_use]
    pub fn en_passant(&self) -> &str {
        &self.en_passant
    }

    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Castling rights named by the castling field. Unknown letters are ignored.
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        CastlingRights::from_fen_token(&self.castling)
    }

    /// En passant target square, or `None` for `-` and anything that is not a square.
    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant.parse().ok()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
