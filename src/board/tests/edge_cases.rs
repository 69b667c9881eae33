//! Edge case tests for special chess positions and moves.

use crate::board::{Castling, Color, Move, MoveList, Occupant, Piece, Position, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn notations(moves: &MoveList) -> Vec<String> {
    moves.iter().map(ToString::to_string).collect()
}

#[test]
fn test_open_game_development_moves() {
    let pos = Position::new()
        .play("e2e4")
        .and_then(|p| p.play("e7e5"))
        .and_then(|p| p.play("g1f3"))
        .and_then(|p| p.play("b8c6"))
        .unwrap();
    let moves = notations(&pos.generate_moves());

    for expected in ["b1c3", "f1b5", "f1c4", "e1e2", "f3g5", "d2d4"] {
        assert!(moves.contains(&expected.to_string()), "missing {expected}");
    }
    assert!(moves.iter().all(|m| !m.starts_with("a1")));
    assert!(!moves.contains(&"e1g1".to_string()));
    assert!(pos.generate_moves().iter().all(|m| !m.is_castling()));
}

#[test]
fn test_stalemate_position() {
    let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!pos.is_checkmate());
    assert!(pos.is_stalemate());
    assert!(pos.generate_moves().is_empty());
}

#[test]
fn test_checkmate_back_rank() {
    let pos = Position::from_fen("3R2k1/5ppp/8/8/8/8/8/7K b - - 0 1");
    assert!(pos.is_in_check(Color::Black));
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
}

#[test]
fn test_underpromotion_choices() {
    let pos = Position::from_fen("1n6/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promotions: Vec<Move> = pos
        .generate_moves()
        .into_iter()
        .filter(|m| m.promotion_piece().is_some())
        .collect();
    // Four pieces for the push and four for the capture on b8
    assert_eq!(promotions.len(), 8);

    let knight = promotions
        .iter()
        .find(|m| m.to == sq("b8") && m.promotion_piece() == Some(Piece::Knight))
        .copied()
        .expect("knight promotion should be available");
    let next = pos.apply_move(knight);
    assert!(next.piece_at(sq("b8")).is(Color::White, Piece::Knight));
    assert!(next.piece_at(sq("a7")).is_empty());
    assert!(next.last_move_was_capture());
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let pos = Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let ep = pos
        .generate_moves()
        .into_iter()
        .find(|m| m.is_en_passant())
        .expect("en passant should be available");
    assert_eq!(ep.to_string(), "e5d6");

    let next = pos.apply_move(ep);
    assert!(next.piece_at(sq("d6")).is(Color::White, Piece::Pawn));
    assert_eq!(next.piece_at(sq("d5")), Occupant::Empty);
    assert_eq!(next.piece_at(sq("e5")), Occupant::Empty);
    assert_eq!(next.count(Color::Black, Piece::Pawn), 7);
    assert_eq!(next.en_passant_target(), None);
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    let pinned = Position::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 1");
    assert!(pinned.generate_moves().iter().all(|m| !m.is_en_passant()));

    let free = Position::from_fen("8/8/8/KPp5/8/8/8/7k w - c6 0 1");
    assert!(free.generate_moves().iter().any(|m| m.is_en_passant()));
}

#[test]
fn test_castling_blocked_by_check() {
    let pos = Position::from_fen("4k3/4r3/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(pos.is_in_check(Color::White));
    assert!(pos.generate_moves().iter().all(|m| !m.is_castling()));
}

#[test]
fn test_castling_through_attacked_square() {
    let pos = Position::from_fen("4k3/5r2/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = pos.generate_moves();
    assert!(!moves.contains(&Move::castle(Castling::WhiteKingside)));
    assert!(moves.contains(&Move::castle(Castling::WhiteQueenside)));

    // b1 is attacked but the king never crosses it
    let pos = Position::from_fen("4k3/1r6/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(pos
        .generate_moves()
        .contains(&Move::castle(Castling::WhiteQueenside)));
}

#[test]
fn test_castling_needs_rook_and_empty_path() {
    let no_rook = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w KQ - 0 1");
    let moves = no_rook.generate_moves();
    assert!(!moves.contains(&Move::castle(Castling::WhiteKingside)));
    assert!(moves.contains(&Move::castle(Castling::WhiteQueenside)));

    let blocked = Position::from_fen("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
    let moves = blocked.generate_moves();
    assert!(!moves.contains(&Move::castle(Castling::WhiteQueenside)));
    assert!(moves.contains(&Move::castle(Castling::WhiteKingside)));
}

#[test]
fn test_castling_moves_both_pieces() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let next = pos.play("e8c8").unwrap();
    assert!(next.piece_at(Square::C8).is(Color::Black, Piece::King));
    assert!(next.piece_at(Square::D8).is(Color::Black, Piece::Rook));
    assert!(next.piece_at(Square::A8).is_empty());
    assert!(next.piece_at(Square::E8).is_empty());
    assert_eq!(next.castling_rights().to_string(), "KQ--");
}

#[test]
fn test_pinned_piece_cannot_move() {
    let pos = Position::from_fen("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
    assert!(pos.generate_moves().iter().all(|m| m.from != sq("e2")));
}

#[test]
fn test_double_check_only_king_can_move() {
    let pos = Position::from_fen("k7/8/8/8/4r3/3n4/8/R3K3 w - - 0 1");
    let moves = pos.generate_moves();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.from == Square::E1));
}

#[test]
fn test_king_cannot_step_into_check() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/5r2/4K3 w - - 0 1");
    let moves = notations(&pos.generate_moves());
    assert!(moves.contains(&"e1f2".to_string()));
    assert!(!moves.contains(&"e1e2".to_string()));
    assert!(!moves.contains(&"e1f1".to_string()));
    assert!(moves.contains(&"e1d1".to_string()));
}

#[test]
fn test_board_from_str() {
    let pos: Position = "8/8/8/8/8/8/8/K1k5 b - - 0 1".parse().unwrap();
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.pieces().count(), 2);
    assert!("not a fen".parse::<Position>().is_err());
}
