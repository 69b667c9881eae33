//! Core chess types.
//!
//! This module contains the value types used throughout the engine:
//! - `Piece`, `Color` and `Occupant` - piece kinds, sides and mailbox cells
//! - `Square` - index into the 120-cell mailbox
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `Castling` and `CastlingRights` - castling moves and state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{Castling, CastlingRights};
pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Color, Occupant, Piece};
pub use square::{Square, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH};

pub(crate) use piece::PROMOTION_PIECES;
