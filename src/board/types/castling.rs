//! Castling move kinds and the castling-rights bitmask.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// One of the four castling moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Castling {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl Castling {
    /// In KQkq order
    pub const ALL: [Castling; 4] = [
        Castling::WhiteKingside,
        Castling::WhiteQueenside,
        Castling::BlackKingside,
        Castling::BlackQueenside,
    ];

    #[must_use]
    pub const fn new(color: Color, kingside: bool) -> Self {
        match (color, kingside) {
            (Color::White, true) => Castling::WhiteKingside,
            (Color::White, false) => Castling::WhiteQueenside,
            (Color::Black, true) => Castling::BlackKingside,
            (Color::Black, false) => Castling::BlackQueenside,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Castling::WhiteKingside | Castling::WhiteQueenside => Color::White,
            Castling::BlackKingside | Castling::BlackQueenside => Color::Black,
        }
    }

    #[inline]
    pub(crate) const fn bit(self) -> u8 {
        match self {
            Castling::WhiteKingside => CASTLE_WHITE_K,
            Castling::WhiteQueenside => CASTLE_WHITE_Q,
            Castling::BlackKingside => CASTLE_BLACK_K,
            Castling::BlackQueenside => CASTLE_BLACK_Q,
        }
    }

    /// FEN letter (K, Q, k, q)
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Castling::WhiteKingside => 'K',
            Castling::WhiteQueenside => 'Q',
            Castling::BlackKingside => 'k',
            Castling::BlackQueenside => 'q',
        }
    }

    #[must_use]
    pub const fn king_from(self) -> Square {
        match self.color() {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    #[must_use]
    pub const fn king_to(self) -> Square {
        match self {
            Castling::WhiteKingside => Square::G1,
            Castling::WhiteQueenside => Square::C1,
            Castling::BlackKingside => Square::G8,
            Castling::BlackQueenside => Square::C8,
        }
    }

    /// The square the king crosses on its way to `king_to`
    #[must_use]
    pub const fn king_transit(self) -> Square {
        match self {
            Castling::WhiteKingside => Square::F1,
            Castling::WhiteQueenside => Square::D1,
            Castling::BlackKingside => Square::F8,
            Castling::BlackQueenside => Square::D8,
        }
    }

    #[must_use]
    pub const fn rook_from(self) -> Square {
        match self {
            Castling::WhiteKingside => Square::H1,
            Castling::WhiteQueenside => Square::A1,
            Castling::BlackKingside => Square::H8,
            Castling::BlackQueenside => Square::A8,
        }
    }

    #[must_use]
    pub const fn rook_to(self) -> Square {
        self.king_transit()
    }

    /// Squares strictly between king and rook; all must be empty.
    #[must_use]
    pub const fn between(self) -> &'static [Square] {
        match self {
            Castling::WhiteKingside => &[Square::F1, Square::G1],
            Castling::WhiteQueenside => &[Square::D1, Square::C1, Square::B1],
            Castling::BlackKingside => &[Square::F8, Square::G8],
            Castling::BlackQueenside => &[Square::D8, Square::C8, Square::B8],
        }
    }

    /// The castling right lost when the rook leaves (or is captured on) `sq`
    #[must_use]
    pub fn for_rook_corner(sq: Square) -> Option<Castling> {
        Castling::ALL.into_iter().find(|c| c.rook_from() == sq)
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, castling: Castling) -> bool {
        self.0 & castling.bit() != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, castling: Castling) {
        self.0 |= castling.bit();
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, castling: Castling) {
        self.0 &= !castling.bit();
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(Castling::new(color, true));
        self.remove(Castling::new(color, false));
    }

    /// True if every right held by `self` is also held by `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: CastlingRights) -> bool {
        self.0 & !other.0 == 0
    }
}

impl fmt::Display for CastlingRights {
    /// Fixed four-character KQkq form with a dash for each absent right.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for castling in Castling::ALL {
            let c = if self.has(castling) {
                castling.to_char()
            } else {
                '-'
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
