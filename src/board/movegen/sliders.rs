use super::super::{Move, MoveList, Occupant, Position, Square};

impl Position {
    /// Slide along each direction: every empty square, then at most one
    /// capture, stopping at the board edge or the first piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        offsets: &[isize],
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move;
        for &delta in offsets {
            let mut to = from.offset(delta);
            loop {
                match self.piece_at(to) {
                    Occupant::Empty => {
                        moves.push(Move::new(from, to));
                        to = to.offset(delta);
                    }
                    Occupant::Occupied(target_color, _) => {
                        if target_color != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                    Occupant::OffBoard => break,
                }
            }
        }
    }
}
