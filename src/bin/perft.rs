use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_core::board::{Position, START_FEN};

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let depth: usize = match args.next().map(|d| d.parse()) {
        Some(Ok(depth)) => depth,
        _ => {
            eprintln!("usage: perft <depth> [position]");
            return ExitCode::FAILURE;
        }
    };
    let rest: Vec<String> = args.collect();
    let fen = if rest.is_empty() {
        START_FEN.to_string()
    } else {
        rest.join(" ")
    };

    let mut position = match Position::try_from_fen(&fen) {
        Ok(position) => position,
        Err(err) => {
            eprintln!("bad position: {err}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let divide = position.divide(depth);
    let total: u64 = divide.iter().map(|&(_, nodes)| nodes).sum();
    for (mv, nodes) in &divide {
        println!("{mv}: {nodes}");
    }
    println!();
    println!("Nodes searched: {total}");
    println!("Time: {:?}", start.elapsed());
    ExitCode::SUCCESS
}
