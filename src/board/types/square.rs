//! Mailbox square index and algebraic notation helpers.
//!
//! The board is a 10x12 grid. The playable 8x8 area occupies rows 2-9 and
//! columns 1-8; everything else is a border of off-board sentinels, so a
//! fixed offset added to a playable index never wraps onto the far edge.
//! Row 2 holds rank 8, row 9 holds rank 1.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of cells in the mailbox
pub const BOARD_SIZE: usize = 120;
/// Cells per mailbox row
pub const BOARD_WIDTH: usize = 10;
/// Mailbox rows
pub const BOARD_HEIGHT: usize = 12;
const LEFT_PADDING: usize = 1;
const TOP_PADDING: usize = 2;

/// A square on the chess board, stored as its index into the 120-cell
/// mailbox (`index = row * 10 + col`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize);

impl Square {
    pub const A8: Square = Square(21);
    pub const B8: Square = Square(22);
    pub const C8: Square = Square(23);
    pub const D8: Square = Square(24);
    pub const E8: Square = Square(25);
    pub const F8: Square = Square(26);
    pub const G8: Square = Square(27);
    pub const H8: Square = Square(28);
    pub const A1: Square = Square(91);
    pub const B1: Square = Square(92);
    pub const C1: Square = Square(93);
    pub const D1: Square = Square(94);
    pub const E1: Square = Square(95);
    pub const F1: Square = Square(96);
    pub const G1: Square = Square(97);
    pub const H1: Square = Square(98);

    /// Square for a 1-based file (a=1) and rank, or `None` when either is
    /// outside 1..=8.
    #[must_use]
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Self::from_file_rank(file, rank))
        } else {
            None
        }
    }

    /// Inverse of `file()`/`rank()`. No validation.
    #[inline]
    #[must_use]
    pub const fn from_file_rank(file: usize, rank: usize) -> Self {
        Square((8 + TOP_PADDING - rank) * BOARD_WIDTH + file + (LEFT_PADDING - 1))
    }

    /// Square from a file letter and rank digit, e.g. `('e', '4')`.
    ///
    /// Performs no validation; callers check the characters first.
    #[inline]
    #[must_use]
    pub fn from_chars(file: char, rank: char) -> Self {
        let f = (file as usize).wrapping_sub('a' as usize) + 1;
        let r = (rank as usize).wrapping_sub('0' as usize);
        Self::from_file_rank(f, r)
    }

    /// File 1-8 (a=1)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        debug_assert!(self.is_playable(), "file of a border square");
        (self.0 % BOARD_WIDTH) - (LEFT_PADDING - 1)
    }

    /// Rank 1-8
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        debug_assert!(self.is_playable(), "rank of a border square");
        (8 + TOP_PADDING) - (self.0 / BOARD_WIDTH)
    }

    /// Raw mailbox index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// True if this index lies inside the 8x8 interior
    #[inline]
    #[must_use]
    pub const fn is_playable(self) -> bool {
        let row = self.0 / BOARD_WIDTH;
        let col = self.0 % BOARD_WIDTH;
        self.0 < BOARD_SIZE && row >= TOP_PADDING && row < TOP_PADDING + 8 && col >= 1 && col <= 8
    }

    /// Index shifted by a mailbox offset. Any offset used by the move tables
    /// keeps a playable square inside the 120-cell array.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: isize) -> Square {
        Square((self.0 as isize + delta) as usize)
    }

    /// The 64 playable squares in ascending index order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (TOP_PADDING..TOP_PADDING + 8).flat_map(|row| {
            (LEFT_PADDING..LEFT_PADDING + 8).map(move |col| Square(row * BOARD_WIDTH + col))
        })
    }

    /// True for light squares (h1 and a8 are light)
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.file() + self.rank()) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + (self.file() as u8) - 1) as char;
        write!(f, "{}{}", file, self.rank())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2
            || !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
        {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        Ok(Square::from_chars(chars[0], chars[1]))
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        let sq = Square(index);
        if sq.is_playable() {
            Ok(sq)
        } else {
            Err(SquareError::OffBoard { index })
        }
    }
}
