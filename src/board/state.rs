use std::fmt;

use super::{CastlingRights, Color, Occupant, Piece, Square, BOARD_SIZE};

/// A chess position stored as a 120-cell mailbox.
///
/// Positions are value snapshots: `apply_move` returns a new `Position` and
/// never touches its input, so a search can backtrack by simply keeping the
/// parent around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) squares: [Occupant; BOARD_SIZE],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) side_to_move: Color,
    pub(crate) last_move_was_capture: bool,
}

impl Position {
    /// The standard initial position: full castling rights, no en passant,
    /// White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            let file = i + 1;
            position.set_piece(Square::from_file_rank(file, 1), Color::White, *piece);
            position.set_piece(Square::from_file_rank(file, 8), Color::Black, *piece);
            position.set_piece(Square::from_file_rank(file, 2), Color::White, Piece::Pawn);
            position.set_piece(Square::from_file_rank(file, 7), Color::Black, Piece::Pawn);
        }

        position.castling_rights = CastlingRights::all();
        position
    }

    /// An empty board: border cells hold the off-board sentinel, the 64
    /// playable squares are empty. No castling rights, White to move.
    #[must_use]
    pub fn empty() -> Self {
        let mut squares = [Occupant::OffBoard; BOARD_SIZE];
        for sq in Square::all() {
            squares[sq.index()] = Occupant::Empty;
        }
        Position {
            squares,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            side_to_move: Color::White,
            last_move_was_capture: false,
        }
    }

    /// Assemble a position from raw parts.
    ///
    /// Border cells are forced to the off-board sentinel whatever `squares`
    /// holds there.
    #[must_use]
    pub fn from_parts(
        mut squares: [Occupant; BOARD_SIZE],
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        side_to_move: Color,
    ) -> Self {
        for (idx, cell) in squares.iter_mut().enumerate() {
            if !Square(idx).is_playable() {
                *cell = Occupant::OffBoard;
            }
        }
        Position {
            squares,
            castling_rights,
            en_passant_target,
            side_to_move,
            last_move_was_capture: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Occupant {
        self.squares[sq.index()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_empty()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Occupant::Occupied(color, piece);
    }

    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) {
        self.squares[sq.index()] = Occupant::Empty;
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Whether the move that produced this position landed on an occupied
    /// square.
    #[inline]
    #[must_use]
    pub fn last_move_was_capture(&self) -> bool {
        self.last_move_was_capture
    }

    /// The square of `color`'s king, if it has one.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq).is(color, Piece::King))
    }

    /// Iterate over every occupied playable square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Occupant::Occupied(color, piece) => Some((sq, color, piece)),
            _ => None,
        })
    }

    /// Number of `piece`s of `color` on the board.
    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces()
            .filter(|&(_, c, p)| c == color && p == piece)
            .count()
    }

    /// Equality for repetition purposes: piece placement, side to move,
    /// castling rights and en passant target. The capture flag is ignored.
    #[must_use]
    pub fn is_same_position(&self, other: &Position) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    /// Text diagram: rank 8 first, rank labels on the right, file labels
    /// below followed by the side-to-move marker, the KQkq castling string
    /// and the en passant square when one is set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1..=8).rev() {
            for file in 1..=8 {
                let sq = Square::from_file_rank(file, rank);
                let c = self.piece_at(sq).to_char().unwrap_or('?');
                write!(f, "{c}|")?;
            }
            writeln!(f, "{rank}|")?;
        }
        write!(f, "a|b|c|d|e|f|g|h|")?;
        let marker = if self.white_to_move() { 'W' } else { 'b' };
        write!(f, "{marker}|{}", self.castling_rights)?;
        if let Some(ep) = self.en_passant_target {
            write!(f, " ep: {ep}")?;
        }
        writeln!(f)
    }
}
