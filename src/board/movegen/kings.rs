use super::super::attack_tables::KING_OFFSETS;
use super::super::{Castling, Move, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        self.generate_step_moves(from, &KING_OFFSETS, moves);

        let color = self.side_to_move;
        for kingside in [true, false] {
            let castling = Castling::new(color, kingside);
            if from == castling.king_from() && self.can_castle(castling) {
                moves.push(Move::castle(castling));
            }
        }
    }

    /// Castling is allowed when the right is still held, the rook is home,
    /// every square between king and rook is empty, and the king neither
    /// starts on, crosses, nor lands on an attacked square.
    fn can_castle(&self, castling: Castling) -> bool {
        let color = castling.color();
        if !self.castling_rights.has(castling)
            || !self.piece_at(castling.rook_from()).is(color, Piece::Rook)
        {
            return false;
        }

        if !castling.between().iter().all(|&sq| self.is_empty(sq)) {
            return false;
        }

        let enemy = color.opponent();
        [castling.king_from(), castling.king_transit(), castling.king_to()]
            .iter()
            .all(|&sq| !self.is_attacked_by(sq, enemy))
    }
}
