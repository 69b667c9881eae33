//! Perft binary for verifying move generation.
//!
//! Usage: perft <depth> [fen]

use std::env;
use std::process;
use std::time::Instant;

use mailbox_chess::board::Position;

fn main() {
    let args: Vec<String> = env::args().collect();
    let Some(depth) = args.get(1).and_then(|d| d.parse::<usize>().ok()) else {
        eprintln!("usage: perft <depth> [fen]");
        process::exit(2);
    };

    let position = match args.get(2..).filter(|rest| !rest.is_empty()) {
        Some(rest) => match Position::try_from_fen(&rest.join(" ")) {
            Ok(pos) => pos,
            Err(err) => {
                eprintln!("invalid fen: {err}");
                process::exit(2);
            }
        },
        None => Position::new(),
    };

    print!("{position}");
    let start = Instant::now();
    let mut total = 0;
    for (mv, nodes) in position.perft_divide(depth) {
        println!("{mv}: {nodes}");
        total += nodes;
    }
    let elapsed = start.elapsed();

    println!();
    println!("perft({depth}) = {total}");
    println!("time: {:.3}s", elapsed.as_secs_f64());
    if elapsed.as_secs_f64() > 0.0 {
        println!("nps: {:.0}", total as f64 / elapsed.as_secs_f64());
    }
}
