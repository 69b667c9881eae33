//! Legal move generation.
//!
//! Moves are produced in two phases: piece-by-piece pseudo-legal
//! generation, then a filter that plays each move and discards it if the
//! mover's king is left attacked. The filter is the only place pins and
//! checks are handled.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{DIAGONAL_OFFSETS, ORTHOGONAL_OFFSETS, QUEEN_OFFSETS};
use super::{Move, MoveList, Occupant, Piece, Position, Square};

impl Position {
    /// Moves obeying piece movement rules, ignoring self-check. Ordered by
    /// ascending origin square.
    pub(crate) fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for from in Square::all() {
            let Occupant::Occupied(piece_color, piece) = self.piece_at(from) else {
                continue;
            };
            if piece_color != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, &mut moves),
                Piece::Bishop => self.generate_sliding_moves(from, &DIAGONAL_OFFSETS, &mut moves),
                Piece::Rook => self.generate_sliding_moves(from, &ORTHOGONAL_OFFSETS, &mut moves),
                Piece::Queen => self.generate_sliding_moves(from, &QUEEN_OFFSETS, &mut moves),
                Piece::King => self.generate_king_moves(from, &mut moves),
            }
        }
        moves
    }

    /// All legal moves for the side to move, in generation order.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let color = self.side_to_move;
        let enemy = color.opponent();
        let king = self.king_square(color);

        self.generate_pseudo_moves()
            .into_iter()
            .filter(|&mv| {
                let king_after = if self.piece_at(mv.from).is(color, Piece::King) {
                    Some(mv.to)
                } else {
                    king
                };
                let child = self.apply_move(mv);
                king_after.map_or(true, |k| !child.is_attacked_by(k, enemy))
            })
            .collect()
    }

    /// Side to move is in check and has no legal move.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && self.generate_moves().is_empty()
    }

    /// Side to move is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && self.generate_moves().is_empty()
    }

    /// Count leaf positions reachable in exactly `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| self.apply_move(mv).perft(depth - 1))
            .sum()
    }

    /// Perft split by root move, in generation order.
    #[must_use]
    pub fn perft_divide(&self, depth: usize) -> Vec<(Move, u64)> {
        let child_depth = depth.saturating_sub(1);
        self.generate_moves()
            .into_iter()
            .map(|mv| {
                let nodes = self.apply_move(mv).perft(child_depth);
                log::trace!("{mv}: {nodes}");
                (mv, nodes)
            })
            .collect()
    }
}
