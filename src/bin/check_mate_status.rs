use std::env;
use std::process;

use mailbox_chess::board::{adjudicate, Position};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return;
    }

    let mut history = vec![Position::new()];
    for text in args.iter().skip(1) {
        let current = history[history.len() - 1];
        match current.play(text) {
            Ok(next) => history.push(next),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    }

    let board = history[history.len() - 1];
    let legal_moves = board.generate_moves();
    print!("{board}");
    println!(
        "side_to_move: {}",
        if board.white_to_move() { "white" } else { "black" }
    );
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", board.is_checkmate());
    println!("stalemate: {}", board.is_stalemate());
    println!("outcome: {}", adjudicate(&history, None));
    for mv in legal_moves.iter() {
        println!("{mv}");
    }
}
