//! Static evaluation tests.

use crate::board::{Color, Piece, Position};

/// Mirror a FEN's piece placement top to bottom, swap colors, and hand the
/// move to the other side.
fn mirror_fen(fen: &str) -> String {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let placement: Vec<String> = parts[0]
        .split('/')
        .rev()
        .map(|rank| {
            rank.chars()
                .map(|c| {
                    if c.is_ascii_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                })
                .collect()
        })
        .collect();
    let side = if parts[1] == "w" { "b" } else { "w" };
    format!("{} {} - - 0 1", placement.join("/"), side)
}

#[test]
fn test_starting_position_is_balanced() {
    assert_eq!(Position::new().evaluate(), 0);
}

#[test]
fn test_evaluation_is_color_symmetric() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ];
    for fen in fens {
        let pos = Position::from_fen(fen);
        let mirrored = Position::from_fen(&mirror_fen(fen));
        assert_eq!(pos.evaluate(), -mirrored.evaluate(), "{fen}");
    }
}

#[test]
fn test_material_dominates() {
    // Black is missing the queen
    let pos = Position::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert!(pos.evaluate() >= 900, "got {}", pos.evaluate());
    assert_eq!(Piece::Queen.value(), 950);
    assert_eq!(Piece::King.value(), 0);
}

#[test]
fn test_evaluation_ignores_side_to_move() {
    let white = Position::from_fen("4k3/8/8/3N4/8/8/8/4K3 w - - 0 1");
    let black = Position::from_fen("4k3/8/8/3N4/8/8/8/4K3 b - - 0 1");
    assert_eq!(white.evaluate(), black.evaluate());
    assert_eq!(white.evaluate(), 300 + 20);
}

#[test]
fn test_castled_king_bonus() {
    let castled = Position::from_fen("4k3/8/8/8/8/8/8/6K1 w - - 0 1");
    let central = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(castled.evaluate() - central.evaluate(), 15);
    assert_eq!(central.count(Color::White, Piece::King), 1);
}
