//! Property-based tests using proptest.

use super::search::reference_minimax;
use crate::board::{minimax, Color, Position, Square, BOARD_SIZE, INFINITY, MATE_SCORE};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the initial position and
/// return every position visited, the initial one included.
fn random_walk(seed: u64, num_moves: usize) -> Vec<Position> {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut line = vec![Position::new()];
    for _ in 0..num_moves {
        let current = line[line.len() - 1];
        let moves = current.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        line.push(current.apply_move(mv));
    }
    line
}

proptest! {
    /// Property: every playable square survives a trip through its notation
    #[test]
    fn prop_square_notation_roundtrip(idx in 0..BOARD_SIZE) {
        let sq = Square(idx);
        if sq.is_playable() {
            let parsed: Square = sq.to_string().parse().unwrap();
            prop_assert_eq!(parsed, sq);
            prop_assert_eq!(Square::try_from(idx), Ok(sq));
        } else {
            prop_assert!(Square::try_from(idx).is_err());
        }
    }

    /// Property: FEN output parses back to the same position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pos in random_walk(seed, num_moves) {
            let fen = pos.to_fen();
            let restored = Position::from_fen(&fen);
            prop_assert!(restored.is_same_position(&pos), "{}", fen);
        }
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pos in random_walk(seed, num_moves) {
            let mover = pos.side_to_move();
            for mv in pos.generate_moves() {
                let child = pos.apply_move(mv);
                prop_assert!(!child.is_in_check(mover),
                    "{} leaves king in check in {}", mv, pos.to_fen());
                prop_assert_eq!(child.side_to_move(), mover.opponent());
            }
        }
    }

    /// Property: castling rights only ever shrink
    #[test]
    fn prop_castling_rights_monotone(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let line = random_walk(seed, num_moves);
        for pair in line.windows(2) {
            prop_assert!(pair[1].castling_rights().is_subset_of(pair[0].castling_rights()));
        }
    }

    /// Property: a move's text parses back to the same move
    #[test]
    fn prop_move_notation_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pos in random_walk(seed, num_moves) {
            for mv in pos.generate_moves() {
                prop_assert_eq!(pos.parse_move(&mv.to_string()), Ok(mv));
            }
        }
    }

    /// Property: pieces disappear only through captures
    #[test]
    fn prop_capture_flag_matches_material(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let line = random_walk(seed, num_moves);
        for pair in line.windows(2) {
            let before = pair[0].pieces().count();
            let after = pair[1].pieces().count();
            if pair[1].last_move_was_capture() {
                prop_assert_eq!(after, before - 1);
            } else {
                prop_assert!(after == before || after == before - 1);
            }
            prop_assert!(pair[1].king_square(Color::White).is_some());
            prop_assert!(pair[1].king_square(Color::Black).is_some());
        }
    }

    /// Property: static evaluation stays well inside the mate score
    #[test]
    fn prop_eval_bounded(seed in seed_strategy(), num_moves in 0..40usize) {
        for pos in random_walk(seed, num_moves) {
            let eval = pos.evaluate();
            prop_assert!(eval.abs() < MATE_SCORE, "Eval {} out of bounds", eval);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: pruning never changes the root score
    #[test]
    fn prop_alphabeta_matches_full_minimax(
        seed in seed_strategy(),
        num_moves in 0..12usize,
        extensions in 0..=2u32,
    ) {
        let line = random_walk(seed, num_moves);
        let pos = line[line.len() - 1];
        prop_assert_eq!(
            minimax(&pos, 2, -INFINITY, INFINITY, extensions),
            reference_minimax(&pos, 2, extensions),
            "{}", pos.to_fen()
        );
    }
}
