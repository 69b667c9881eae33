use super::super::attack_tables::KNIGHT_OFFSETS;
use super::super::{Move, MoveList, Occupant, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        self.generate_step_moves(from, &KNIGHT_OFFSETS, moves);
    }

    /// One move per offset whose destination is empty or holds an enemy.
    pub(crate) fn generate_step_moves(&self, from: Square, offsets: &[isize], moves: &mut MoveList) {
        let color = self.side_to_move;
        for &delta in offsets {
            let to = from.offset(delta);
            match self.piece_at(to) {
                Occupant::Empty => moves.push(Move::new(from, to)),
                Occupant::Occupied(target_color, _) if target_color != color => {
                    moves.push(Move::new(from, to));
                }
                _ => {}
            }
        }
    }
}
