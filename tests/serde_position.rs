//! Serde integration, enabled with the `serde` feature.
#![cfg(feature = "serde")]

use chess_position::board::{CastlingRights, Color, Piece, Position, Square, DEFAULT_FEN};

#[test]
fn position_serializes_as_fen_string() {
    let json = serde_json::to_string(&Position::new()).unwrap();
    assert_eq!(json, format!("\"{DEFAULT_FEN}\""));
}

#[test]
fn position_deserializes_through_decoder() {
    let fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e3 0 2";
    let position: Position = serde_json::from_str(&format!("\"{fen}\"")).unwrap();
    assert_eq!(position.to_fen(), fen);
}

#[test]
fn invalid_fen_is_a_deserialization_error() {
    let result: Result<Position, _> = serde_json::from_str("\"not a fen\"");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Malformed FEN"));
}

#[test]
fn value_types_round_trip() {
    let c6: Square = "c6".parse().unwrap();
    assert_eq!(serde_json::to_string(&c6).unwrap(), "\"c6\"");
    let value = (Color::Black, Piece::Knight, c6, CastlingRights::all());
    let json = serde_json::to_string(&value).unwrap();
    let back: (Color, Piece, Square, CastlingRights) = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn out_of_range_square_is_rejected() {
    let result: Result<Square, _> = serde_json::from_str("\"i9\"");
    assert!(result.is_err());
}
