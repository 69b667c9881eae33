//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::Castling;
use super::piece::{Color, Piece};
use super::square::Square;

/// What, beyond relocating a piece, a move does.
///
/// Castling, en passant and promotion are mutually exclusive, so each is a
/// separate variant rather than an independent field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    Castle(Castling),
    /// Pawn capture onto the en passant target, which is also `Move::to`
    EnPassant(Square),
    /// The promoted piece and its color
    Promotion(Color, Piece),
}

/// A move from one square to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Create a plain move (quiet move, capture or double push)
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Normal,
        }
    }

    /// Create a castling move; the king travels from `king_from` to `king_to`
    #[inline]
    #[must_use]
    pub const fn castle(castling: Castling) -> Self {
        Move {
            from: castling.king_from(),
            to: castling.king_to(),
            kind: MoveKind::Castle(castling),
        }
    }

    /// Create an en passant capture landing on `to`
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::EnPassant(to),
        }
    }

    /// Create a promotion move (with or without capture)
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, color: Color, piece: Piece) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Promotion(color, piece),
        }
    }

    #[inline]
    #[must_use]
    pub const fn castling(self) -> Option<Castling> {
        match self.kind {
            MoveKind::Castle(c) => Some(c),
            _ => None,
        }
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant(_))
    }

    /// Returns true if this move is castling
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Option<Piece> {
        match self.kind {
            MoveKind::Promotion(_, piece) => Some(piece),
            _ => None,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}")?;
        match self.kind {
            MoveKind::Normal | MoveKind::Promotion(..) => {}
            MoveKind::Castle(c) => write!(f, " castle {}", c.to_char())?,
            MoveKind::EnPassant(_) => write!(f, " ep")?,
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    /// Long algebraic form: "e2e4", or "e7e8Q" / "e2e1q" for promotions,
    /// the letter cased by the promoting side.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let MoveKind::Promotion(color, piece) = self.kind {
            write!(f, "{}", piece.to_fen_char(color))?;
        }
        Ok(())
    }
}

/// Growable list of moves in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(48),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.moves.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.moves.len()
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain_and_promotion() {
        let e2 = "e2".parse().unwrap();
        let e4 = "e4".parse().unwrap();
        assert_eq!(Move::new(e2, e4).to_string(), "e2e4");

        let e7 = "e7".parse().unwrap();
        let e8 = "e8".parse().unwrap();
        let promo = Move::promotion(e7, e8, Color::White, Piece::Queen);
        assert_eq!(promo.to_string(), "e7e8Q");

        let d2 = "d2".parse().unwrap();
        let c1 = "c1".parse().unwrap();
        let promo = Move::promotion(d2, c1, Color::Black, Piece::Knight);
        assert_eq!(promo.to_string(), "d2c1n");
    }

    #[test]
    fn test_castle_squares() {
        let mv = Move::castle(Castling::BlackQueenside);
        assert_eq!(mv.to_string(), "e8c8");
        assert!(mv.is_castling());
        assert_eq!(mv.promotion_piece(), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_past_end_panics() {
        let list = MoveList::new();
        let _ = list[0];
    }

    #[test]
    fn test_get_past_end_is_none() {
        let list: MoveList = std::iter::once(Move::new(Square::E1, Square::E8)).collect();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(1), None);
        assert_eq!(list.first(), Some(Move::new(Square::E1, Square::E8)));
    }
}
