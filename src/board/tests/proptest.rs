//! Property-based tests using proptest.

use crate::board::{decode, encode, Color, Piece, Position, PositionBuilder, Square};
use proptest::prelude::*;

fn piece_strategy() -> impl Strategy<Value = (Color, Piece)> {
    (
        prop::sample::select(Color::BOTH.to_vec()),
        prop::sample::select(Piece::ALL.to_vec()),
    )
}

/// Mostly empty squares, like real positions
fn grid_strategy() -> impl Strategy<Value = Vec<Option<(Color, Piece)>>> {
    prop::collection::vec(prop::option::weighted(0.4, piece_strategy()), 64)
}

fn castling_strategy() -> impl Strategy<Value = String> {
    prop::sample::subsequence(vec!['K', 'Q', 'k', 'q'], 0..=4).prop_map(|rights| {
        if rights.is_empty() {
            "-".to_string()
        } else {
            rights.into_iter().collect()
        }
    })
}

fn en_passant_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("-".to_string()), "[a-h][36]"]
}

fn position_strategy() -> impl Strategy<Value = Position> {
    (
        grid_strategy(),
        prop::bool::ANY,
        castling_strategy(),
        en_passant_strategy(),
        0..=150u32,
        1..=500u32,
    )
        .prop_map(|(grid, white, castling, en_passant, halfmove, fullmove)| {
            let builder = Square::all()
                .zip(grid)
                .fold(PositionBuilder::new(), |builder, (sq, cell)| match cell {
                    Some((color, piece)) => builder.piece(sq, color, piece),
                    None => builder,
                });
            let side = if white { Color::White } else { Color::Black };
            let builder = builder
                .side_to_move(side)
                .castling(&castling)
                .halfmove_clock(halfmove)
                .fullmove_number(fullmove);
            let builder = match en_passant.parse() {
                Ok(target) => builder.en_passant(target),
                Err(_) => builder.clear_en_passant(),
            };
            builder.build()
        })
}

proptest! {
    /// Property: decoding an encoded position restores it exactly
    #[test]
    fn prop_decode_inverts_encode(position in position_strategy()) {
        let fen = encode(&position);
        let restored = decode(&fen).unwrap();
        prop_assert_eq!(&restored, &position);
    }

    /// Property: encode(decode(f)) == f for canonical FEN strings
    #[test]
    fn prop_encode_inverts_decode(position in position_strategy()) {
        let fen = encode(&position);
        prop_assert_eq!(encode(&decode(&fen).unwrap()), fen);
    }

    /// Property: every encoded rank describes exactly 8 files with no adjacent digits
    #[test]
    fn prop_placement_is_canonical(position in position_strategy()) {
        let fen = position.to_fen();
        let placement = fen.split(' ').next().unwrap();
        let ranks: Vec<&str> = placement.split('/').collect();
        prop_assert_eq!(ranks.len(), 8);
        for rank in ranks {
            let files: u32 = rank.chars().map(|c| c.to_digit(10).unwrap_or(1)).sum();
            prop_assert_eq!(files, 8);
            let digits: Vec<bool> = rank.chars().map(|c| c.is_ascii_digit()).collect();
            prop_assert!(!digits.windows(2).any(|w| w[0] && w[1]));
        }
    }

    /// Property: piece_at agrees with the grid the position was built from
    #[test]
    fn prop_piece_at_matches_pieces(position in position_strategy()) {
        let restored = decode(&position.to_fen()).unwrap();
        for sq in Square::all() {
            prop_assert_eq!(restored.piece_at(sq.rank(), sq.file()), Ok(position.piece_on(sq)));
        }
    }

    /// Property: piece_at never panics, whatever the coordinates
    #[test]
    fn prop_piece_at_out_of_range(rank in 0usize..64, file in 0usize..64) {
        let result = Position::new().piece_at(rank, file);
        prop_assert_eq!(result.is_ok(), rank < 8 && file < 8);
    }

    /// Property: decode never panics on arbitrary input
    #[test]
    fn prop_decode_never_panics(input in "\\PC{0,80}") {
        let _ = decode(&input);
    }
}
