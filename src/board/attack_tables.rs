//! Fixed mailbox offsets for each piece's movement pattern.
//!
//! On the 10-wide mailbox one rank is 10 cells and one file is 1 cell, so a
//! direction is a single signed offset. Negative offsets move toward rank 8.

pub(crate) const KNIGHT_OFFSETS: [isize; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];

pub(crate) const KING_OFFSETS: [isize; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

pub(crate) const DIAGONAL_OFFSETS: [isize; 4] = [-11, -9, 9, 11];

pub(crate) const ORTHOGONAL_OFFSETS: [isize; 4] = [-10, -1, 1, 10];

pub(crate) const QUEEN_OFFSETS: [isize; 8] = KING_OFFSETS;

/// Offsets a pawn of the given color captures along (forward-left, forward-right)
pub(crate) const fn pawn_capture_offsets(white: bool) -> [isize; 2] {
    if white {
        [-11, -9]
    } else {
        [9, 11]
    }
}
