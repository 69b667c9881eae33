//! Square attack detection.
//!
//! Attacks are found by looking outward from the target square with each
//! piece type's own movement pattern and checking whether a matching enemy
//! piece sits at the end of it. Pins are irrelevant here: a pinned piece
//! still gives check.

use super::attack_tables::{
    pawn_capture_offsets, DIAGONAL_OFFSETS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_OFFSETS,
};
use super::{Color, Occupant, Piece, Position, Square};

impl Position {
    /// True if any piece of `attacker` attacks `sq`.
    #[must_use]
    pub fn is_attacked_by(&self, sq: Square, attacker: Color) -> bool {
        debug_assert!(sq.is_playable(), "attack query on border index {}", sq.index());
        // A pawn attacks diagonally forward, so it sits diagonally behind
        // the target from its own side's point of view.
        for delta in pawn_capture_offsets(attacker == Color::White) {
            if self.piece_at(sq.offset(-delta)).is(attacker, Piece::Pawn) {
                return true;
            }
        }

        if self.any_at_offsets(sq, &KNIGHT_OFFSETS, attacker, Piece::Knight)
            || self.any_at_offsets(sq, &KING_OFFSETS, attacker, Piece::King)
        {
            return true;
        }

        self.slider_attacks(sq, &DIAGONAL_OFFSETS, attacker, Piece::attacks_diagonally)
            || self.slider_attacks(sq, &ORTHOGONAL_OFFSETS, attacker, Piece::attacks_straight)
    }

    /// True if `color`'s king is attacked. A side without a king is never in
    /// check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_attacked_by(king, color.opponent()))
    }

    fn any_at_offsets(&self, sq: Square, offsets: &[isize], color: Color, piece: Piece) -> bool {
        offsets
            .iter()
            .any(|&delta| self.piece_at(sq.offset(delta)).is(color, piece))
    }

    /// Walk each ray until the first non-empty cell; an attack exists when
    /// that cell holds an `attacker` piece accepted by `slides`.
    fn slider_attacks(
        &self,
        sq: Square,
        offsets: &[isize],
        attacker: Color,
        slides: fn(Piece) -> bool,
    ) -> bool {
        for &delta in offsets {
            let mut cur = sq.offset(delta);
            loop {
                match self.piece_at(cur) {
                    Occupant::Empty => cur = cur.offset(delta),
                    Occupant::Occupied(color, piece) => {
                        if color == attacker && slides(piece) {
                            return true;
                        }
                        break;
                    }
                    Occupant::OffBoard => break,
                }
            }
        }
        false
    }
}
