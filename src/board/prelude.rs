//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//!
//! let pos = Position::new().play("e2e4").unwrap();
//! assert_eq!(pos.side_to_move(), Color::Black);
//! ```

pub use super::{
    adjudicate, choose_best_move, Color, FenError, GameOutcome, Move, MoveList, MoveParseError,
    Piece, Position, SearchLimits, Square, SquareError,
};
