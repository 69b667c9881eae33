use super::super::attack_tables::pawn_capture_offsets;
use super::super::{Color, Move, MoveList, Occupant, Position, Square, PROMOTION_PIECES};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let push = color.pawn_push();

        let forward = from.offset(push);
        if self.is_empty(forward) {
            if forward.rank() == color.pawn_promotion_rank() {
                push_promotions(from, forward, color, moves);
            } else {
                moves.push(Move::new(from, forward));
                if from.rank() == color.pawn_start_rank() {
                    let double_forward = forward.offset(push);
                    if self.is_empty(double_forward) {
                        moves.push(Move::new(from, double_forward));
                    }
                }
            }
        }

        for delta in pawn_capture_offsets(color == Color::White) {
            let target = from.offset(delta);
            match self.piece_at(target) {
                Occupant::Occupied(target_color, _) if target_color != color => {
                    if target.rank() == color.pawn_promotion_rank() {
                        push_promotions(from, target, color, moves);
                    } else {
                        moves.push(Move::new(from, target));
                    }
                }
                Occupant::Empty if self.en_passant_target == Some(target) => {
                    moves.push(Move::en_passant(from, target));
                }
                _ => {}
            }
        }
    }
}

fn push_promotions(from: Square, to: Square, color: Color, moves: &mut MoveList) {
    for piece in PROMOTION_PIECES {
        moves.push(Move::promotion(from, to, color, piece));
    }
}
