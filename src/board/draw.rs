//! Terminal-state and draw detection over a game history.
//!
//! The history is the sequence of positions a game passed through, oldest
//! first; the last entry is the current position.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Position, Square};

/// Plies without a capture or pawn move after which the game is drawn
pub const FIFTY_MOVE_PLIES: usize = 100;

/// Result of adjudicating a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    ThreefoldRepetition,
    InsufficientMaterial,
    FiftyMoveRule,
    /// The caller's ply limit was reached
    PlyLimit,
    Unfinished,
}

impl GameOutcome {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameOutcome::Unfinished)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::WhiteWins => Some(Color::White),
            GameOutcome::BlackWins => Some(Color::Black),
            _ => None,
        }
    }

    /// The outcome when `color` delivers checkmate
    #[must_use]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameOutcome::WhiteWins,
            Color::Black => GameOutcome::BlackWins,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameOutcome::WhiteWins => "White wins",
            GameOutcome::BlackWins => "Black wins",
            GameOutcome::Stalemate => "Draw by stalemate",
            GameOutcome::ThreefoldRepetition => "Draw by threefold repetition",
            GameOutcome::InsufficientMaterial => "Draw by insufficient material",
            GameOutcome::FiftyMoveRule => "Draw by fifty-move rule",
            GameOutcome::PlyLimit => "Ply limit reached",
            GameOutcome::Unfinished => "Unfinished",
        };
        f.write_str(text)
    }
}

impl Position {
    /// Neither side can possibly mate: no queens, rooks or pawns, at most one
    /// bishop and two knights per side, and no side with both a bishop and a
    /// knight. Opposite-colored lone bishops are not special-cased.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut counts = [[0usize; 6]; 2];
        for (_, color, piece) in self.pieces() {
            counts[color.index()][piece.index()] += 1;
        }

        counts.iter().all(|side| {
            let bishops = side[Piece::Bishop.index()];
            let knights = side[Piece::Knight.index()];
            side[Piece::Queen.index()] == 0
                && side[Piece::Rook.index()] == 0
                && side[Piece::Pawn.index()] == 0
                && bishops <= 1
                && knights <= 2
                && !(bishops > 0 && knights > 0)
        })
    }

    /// Classify a position with no legal moves: checkmate is a win for the
    /// side that just moved, otherwise stalemate. `None` while moves remain.
    #[must_use]
    pub fn terminal_outcome(&self) -> Option<GameOutcome> {
        if !self.generate_moves().is_empty() {
            return None;
        }
        if self.is_in_check(self.side_to_move) {
            Some(GameOutcome::win_for(self.side_to_move.opponent()))
        } else {
            Some(GameOutcome::Stalemate)
        }
    }
}

/// True if the current (last) position occurred at least twice before.
#[must_use]
pub fn is_threefold_repetition(history: &[Position]) -> bool {
    let Some((current, earlier)) = history.split_last() else {
        return false;
    };
    earlier
        .iter()
        .filter(|pos| pos.is_same_position(current))
        .count()
        >= 2
}

/// Plies played since the last capture or pawn move.
#[must_use]
pub fn plies_since_progress(history: &[Position]) -> usize {
    history
        .windows(2)
        .rev()
        .take_while(|pair| !is_irreversible(&pair[0], &pair[1]))
        .count()
}

fn is_irreversible(before: &Position, after: &Position) -> bool {
    if after.last_move_was_capture() {
        return true;
    }
    let mover = before.side_to_move();
    Square::all().any(|sq| {
        before.piece_at(sq).is(mover, Piece::Pawn) != after.piece_at(sq).is(mover, Piece::Pawn)
    })
}

/// Decide whether the game in `history` is over.
///
/// Checks, in order: checkmate/stalemate, threefold repetition,
/// insufficient material, the fifty-move rule, then the optional
/// `ply_limit` on moves played.
#[must_use]
pub fn adjudicate(history: &[Position], ply_limit: Option<usize>) -> GameOutcome {
    let Some(current) = history.last() else {
        return GameOutcome::Unfinished;
    };

    if let Some(outcome) = current.terminal_outcome() {
        return outcome;
    }
    if is_threefold_repetition(history) {
        return GameOutcome::ThreefoldRepetition;
    }
    if current.is_insufficient_material() {
        return GameOutcome::InsufficientMaterial;
    }
    if plies_since_progress(history) >= FIFTY_MOVE_PLIES {
        return GameOutcome::FiftyMoveRule;
    }
    if ply_limit.is_some_and(|limit| history.len() - 1 >= limit) {
        return GameOutcome::PlyLimit;
    }
    GameOutcome::Unfinished
}
