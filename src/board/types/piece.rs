//! Piece, color and board-cell types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// Parse a piece from a character of either case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Material value in centipawns.
    ///
    /// Pawn=100, Knight=300, Bishop=320, Rook=500, Queen=950. The king is
    /// never traded, so it carries no material value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Pawn => 100,
            Piece::Knight => 300,
            Piece::Bishop => 320,
            Piece::Rook => 500,
            Piece::Queen => 950,
            Piece::King => 0,
        }
    }

    /// Returns true if this piece attacks along diagonals (Bishop, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_diagonally(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Queen)
    }

    /// Returns true if this piece attacks along ranks and files (Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_straight(self) -> bool {
        matches!(self, Piece::Rook | Piece::Queen)
    }
}

/// Promotion choices, emitted in this order by the move generator
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Mailbox offset of a single pawn step. White moves toward rank 8,
    /// which sits at the low end of the array.
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_push(self) -> isize {
        match self {
            Color::White => -10,
            Color::Black => 10,
        }
    }

    /// Rank (1-8) pawns of this color start on
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank (1-8) pawns of this color promote on
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_rank(self) -> usize {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Contents of one cell of the 120-cell mailbox.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Occupant {
    #[default]
    Empty,
    /// Border cell surrounding the playable 8x8 area
    OffBoard,
    Occupied(Color, Piece),
}

impl Occupant {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_off_board(self) -> bool {
        matches!(self, Occupant::OffBoard)
    }

    /// Color of the piece standing here, if any
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Occupant::Occupied(color, _) => Some(color),
            _ => None,
        }
    }

    /// True if this cell holds `piece` of `color`
    #[inline]
    #[must_use]
    pub fn is(self, color: Color, piece: Piece) -> bool {
        self == Occupant::Occupied(color, piece)
    }

    /// True if this cell holds a piece of the given color
    #[inline]
    #[must_use]
    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Display character: FEN letter for pieces, space for empty squares,
    /// `None` for border cells.
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        match self {
            Occupant::Empty => Some(' '),
            Occupant::OffBoard => None,
            Occupant::Occupied(color, piece) => Some(piece.to_fen_char(color)),
        }
    }

    /// Inverse of [`Occupant::to_char`] for piece letters and space.
    #[must_use]
    pub fn from_char(c: char) -> Option<Occupant> {
        if c == ' ' {
            return Some(Occupant::Empty);
        }
        let piece = Piece::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Occupant::Occupied(color, piece))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupant_char_roundtrip() {
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let occ = Occupant::Occupied(color, piece);
                let c = occ.to_char().unwrap();
                assert_eq!(Occupant::from_char(c), Some(occ));
            }
        }
        assert_eq!(Occupant::from_char(' '), Some(Occupant::Empty));
        assert_eq!(Occupant::OffBoard.to_char(), None);
    }

    #[test]
    fn test_display_letters() {
        assert_eq!(Occupant::Occupied(Color::White, Piece::Knight).to_char(), Some('N'));
        assert_eq!(Occupant::Occupied(Color::Black, Piece::Queen).to_char(), Some('q'));
    }

    #[test]
    fn test_material_values() {
        let values: Vec<i32> = Piece::ALL.iter().map(|p| p.value()).collect();
        assert_eq!(values, vec![100, 300, 320, 500, 950, 0]);
    }
}
