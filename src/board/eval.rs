//! Static evaluation: material plus piece-square bonuses.

use super::pst::PIECE_SQUARE_VALUES;
use super::{Occupant, Position, Square};

impl Position {
    /// Static score in centipawns, positive when White is better.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let table = &*PIECE_SQUARE_VALUES;
        Square::all()
            .map(|sq| match self.piece_at(sq) {
                Occupant::Occupied(color, piece) => {
                    table[color.index()][piece.index()][sq.index()]
                }
                _ => 0,
            })
            .sum()
    }
}
