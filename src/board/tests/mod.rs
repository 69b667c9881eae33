//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Performance tests for move generation
//! - `draw.rs` - Game adjudication (mate, repetition, material, fifty moves)
//! - `edge_cases.rs` - Special positions and edge cases
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Minimax, alpha-beta and capture extensions
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod eval;
mod proptest;
