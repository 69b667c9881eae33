//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Scores are always from White's point of view: White maximizes, Black
//! minimizes. Leaves are scored by the static evaluator. A capture that
//! lands on the last ply can extend the search by one more ply while the
//! extension budget lasts.
//!
//! The budget is handled differently for the two sides. A White node
//! passes a zero budget to children it does not extend, while a Black node
//! passes its budget through unchanged. Search results depend on this, so
//! it is kept exactly.

mod constants;
mod params;

use std::time::Instant;

use super::{Move, Position};
pub use constants::{INFINITY, MATE_SCORE};
pub use params::SearchLimits;

/// Best root move and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
    /// Positions visited, root children included
    pub nodes: u64,
}

/// Statistics tracked during search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    /// Number of times a capture on the horizon was extended
    pub extensions: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Searcher carrying statistics across calls.
#[derive(Debug, Default)]
pub struct Searcher {
    pub stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Searcher::default()
    }

    /// Alpha-beta minimax score of `position`, searched `depth` plies deep.
    pub fn minimax(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        extensions: u32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return position.evaluate();
        }

        let moves = position.generate_moves();
        if moves.is_empty() {
            return terminal_score(position);
        }

        if position.white_to_move() {
            let mut best = -INFINITY;
            for &mv in &moves {
                let child = position.apply_move(mv);
                let score = if extends(&child, depth, extensions) {
                    self.stats.extensions += 1;
                    self.minimax(&child, depth, alpha, beta, extensions - 1)
                } else {
                    self.minimax(&child, depth - 1, alpha, beta, 0)
                };
                best = best.max(score);
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for &mv in &moves {
                let child = position.apply_move(mv);
                let score = if extends(&child, depth, extensions) {
                    self.stats.extensions += 1;
                    self.minimax(&child, depth, alpha, beta, extensions - 1)
                } else {
                    self.minimax(&child, depth - 1, alpha, beta, extensions)
                };
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Score of playing `mv` from `position` with a full window, searching
    /// `depth - 1` plies below the move.
    pub fn evaluate_move(
        &mut self,
        position: &Position,
        mv: Move,
        depth: u32,
        extensions: u32,
    ) -> i32 {
        let child = position.apply_move(mv);
        self.minimax(
            &child,
            depth.saturating_sub(1),
            -INFINITY,
            INFINITY,
            extensions,
        )
    }

    /// Score every legal root move and return the best one for the side to
    /// move. Ties go to the move generated first. `None` when the side to
    /// move has no legal moves.
    pub fn choose_best_move(
        &mut self,
        position: &Position,
        limits: SearchLimits,
    ) -> Option<SearchResult> {
        let depth = limits.depth.max(constants::MIN_ROOT_DEPTH);
        let white = position.white_to_move();
        let start = Instant::now();
        self.stats.reset();

        let mut best: Option<(Move, i32)> = None;
        for mv in position.generate_moves() {
            let score = self.evaluate_move(position, mv, depth, limits.extensions);
            if limits.verbose {
                log::info!("{mv} {score}");
            } else {
                log::debug!("{mv} {score}");
            }

            let improves = best.map_or(true, |(_, current)| {
                if white {
                    score > current
                } else {
                    score < current
                }
            });
            if improves {
                best = Some((mv, score));
            }
        }

        let (best_move, score) = best?;
        log::info!(
            "depth {} best {} score {} nodes {} extensions {} time {}ms",
            depth,
            best_move,
            score,
            self.stats.nodes,
            self.stats.extensions,
            start.elapsed().as_millis()
        );

        Some(SearchResult {
            best_move,
            score,
            nodes: self.stats.nodes,
        })
    }
}

/// A child reached by a capture on the last ply is searched at the same
/// depth while extensions remain.
#[inline]
fn extends(child: &Position, depth: u32, extensions: u32) -> bool {
    child.last_move_was_capture() && extensions > 0 && depth == 1
}

/// Score of a position with no legal moves.
fn terminal_score(position: &Position) -> i32 {
    if !position.is_in_check(position.side_to_move()) {
        0
    } else if position.white_to_move() {
        -MATE_SCORE
    } else {
        MATE_SCORE
    }
}

/// Alpha-beta minimax score of `position` from White's point of view.
///
/// # Example
/// ```
/// use mailbox_chess::board::{minimax, Position, INFINITY};
///
/// let score = minimax(&Position::new(), 1, -INFINITY, INFINITY, 0);
/// assert!(score > 0);
/// ```
#[must_use]
pub fn minimax(position: &Position, depth: u32, alpha: i32, beta: i32, extensions: u32) -> i32 {
    Searcher::new().minimax(position, depth, alpha, beta, extensions)
}

/// Score of `mv` played from `position`, see [`Searcher::evaluate_move`].
#[must_use]
pub fn evaluate_move(position: &Position, mv: Move, depth: u32, extensions: u32) -> i32 {
    Searcher::new().evaluate_move(position, mv, depth, extensions)
}

/// Pick the best move for the side to move.
///
/// # Example
/// ```
/// use mailbox_chess::board::{choose_best_move, Position, SearchLimits};
///
/// let result = choose_best_move(&Position::new(), SearchLimits::new(2, 0)).unwrap();
/// assert!(Position::new().generate_moves().contains(&result.best_move));
/// ```
#[must_use]
pub fn choose_best_move(position: &Position, limits: SearchLimits) -> Option<SearchResult> {
    Searcher::new().choose_best_move(position, limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_is_static_eval() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
        assert_eq!(minimax(&pos, 0, -INFINITY, INFINITY, 3), pos.evaluate());
    }

    #[test]
    fn test_terminal_scores() {
        // Black mated by the queen on g7
        let mated = Position::from_fen("6k1/6Q1/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(minimax(&mated, 3, -INFINITY, INFINITY, 0), MATE_SCORE);

        let white_mated = Position::from_fen("8/8/8/8/8/6k1/6q1/6K1 w - - 0 1");
        assert_eq!(minimax(&white_mated, 3, -INFINITY, INFINITY, 0), -MATE_SCORE);

        let stalemate = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(minimax(&stalemate, 2, -INFINITY, INFINITY, 0), 0);
    }

    #[test]
    fn test_no_moves_returns_none() {
        let stalemate = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(choose_best_move(&stalemate, SearchLimits::default()), None);
    }

    #[test]
    fn test_depth_zero_searches_one_ply() {
        let pos = Position::new();
        let zero = choose_best_move(&pos, SearchLimits::new(0, 0)).unwrap();
        let one = choose_best_move(&pos, SearchLimits::new(1, 0)).unwrap();
        assert_eq!(zero, one);
    }

    #[test]
    fn test_extension_counted_on_horizon_capture() {
        // White to move can take the undefended knight on d5
        let pos = Position::from_fen("4k3/8/8/3n4/8/8/8/3RK3 w - - 0 1");
        let mut searcher = Searcher::new();
        searcher.minimax(&pos, 1, -INFINITY, INFINITY, 1);
        assert!(searcher.stats.extensions >= 1);

        let mut plain = Searcher::new();
        plain.minimax(&pos, 1, -INFINITY, INFINITY, 0);
        assert_eq!(plain.stats.extensions, 0);
        assert!(searcher.stats.nodes > plain.stats.nodes);
    }
}
