//! Position transition: apply a move and return the resulting position.

use super::{Castling, Color, Move, MoveKind, Occupant, Piece, Position, Square};

impl Position {
    /// Apply `mv` and return the new position. `self` is left untouched.
    ///
    /// No legality checking happens here; the caller supplies a legal or
    /// pseudo-legal move.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Position {
        let mut next = *self;
        let color = self.side_to_move;
        let moving = self.piece_at(mv.from);

        next.last_move_was_capture = !self.is_empty(mv.to);
        // A rook captured (or otherwise displaced) on its home corner takes
        // the matching castling right with it.
        if let Some(corner) = Castling::for_rook_corner(mv.to) {
            next.castling_rights.remove(corner);
        }

        next.squares[mv.to.index()] = moving;
        next.clear(mv.from);

        match mv.kind {
            MoveKind::Promotion(promo_color, piece) => {
                next.set_piece(mv.to, promo_color, piece);
            }
            MoveKind::EnPassant(target) => {
                next.clear(target.offset(-color.pawn_push()));
            }
            MoveKind::Castle(castling) => {
                next.clear(castling.rook_from());
                next.set_piece(castling.rook_to(), color, Piece::Rook);
                next.castling_rights.remove_color(color);
            }
            MoveKind::Normal => {
                if moving.is(color, Piece::King) {
                    next.castling_rights.remove_color(color);
                } else if moving.is(color, Piece::Rook) {
                    if let Some(corner) = Castling::for_rook_corner(mv.from) {
                        if corner.color() == color {
                            next.castling_rights.remove(corner);
                        }
                    }
                }
            }
        }

        next.en_passant_target = next.en_passant_after(mv, moving, color);
        next.side_to_move = color.opponent();
        next
    }

    /// The square behind a pawn that just advanced two squares, provided an
    /// enemy pawn stands beside it and could capture en passant.
    fn en_passant_after(&self, mv: Move, moving: Occupant, color: Color) -> Option<Square> {
        if !moving.is(color, Piece::Pawn) || mv.from.index().abs_diff(mv.to.index()) != 20 {
            return None;
        }
        let enemy = color.opponent();
        let capturable = [-1, 1]
            .iter()
            .any(|&side| self.piece_at(mv.to.offset(side)).is(enemy, Piece::Pawn));
        capturable.then(|| mv.from.offset(color.pawn_push()))
    }
}
