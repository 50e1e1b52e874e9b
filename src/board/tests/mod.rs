//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `roundtrip.rs` - FEN decode/encode round trips on known positions
//! - `edge_cases.rs` - Unusual but accepted inputs and error reporting
//! - `proptest.rs` - Property-based tests

mod proptest;
