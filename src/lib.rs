pub mod board;

pub use board::{choose_best_move, Color, Move, Piece, Position, SearchLimits, Square};
