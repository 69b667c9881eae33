//! Chess rules and search on a 10x12 mailbox board.
//!
//! The 64 playable squares sit inside a border of off-board sentinel cells,
//! so piece movement is plain index arithmetic and running off the edge is
//! detected by reading the sentinel. Supports full chess rules including
//! castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{choose_best_move, Position, SearchLimits};
//!
//! let pos = Position::new();
//! let moves = pos.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let best = choose_best_move(&pos, SearchLimits::new(2, 0)).unwrap();
//! println!("best {} score {}", best.best_move, best.score);
//! ```

mod attack_tables;
mod attacks;
mod draw;
mod error;
mod eval;
mod fen;
mod make_move;
mod movegen;
pub mod prelude;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError, SquareError};
pub use state::Position;
pub use types::{
    Castling, CastlingRights, Color, Move, MoveKind, MoveList, Occupant, Piece, Square,
    BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH,
};

// Public API - game adjudication
pub use draw::{
    adjudicate, is_threefold_repetition, plies_since_progress, GameOutcome, FIFTY_MOVE_PLIES,
};

// Public API - search functions and configuration
pub use search::{
    choose_best_move, evaluate_move, minimax, SearchLimits, SearchResult, SearchStats, Searcher,
    INFINITY, MATE_SCORE,
};

pub(crate) use types::PROMOTION_PIECES;
