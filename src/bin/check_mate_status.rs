use std::env;
use std::process::ExitCode;

use chess_core::board::Position;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_mate_status [--fen \"<position>\"] <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let (mut position, moves) = match args.first().map(String::as_str) {
        Some("--fen") => {
            let Some(fen) = args.get(1) else {
                eprintln!("--fen needs a position string");
                return ExitCode::FAILURE;
            };
            match Position::try_from_fen(fen) {
                Ok(position) => (position, &args[2..]),
                Err(err) => {
                    eprintln!("bad position: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => (Position::new(), &args[..]),
    };

    for notation in moves {
        if let Err(err) = position.play_str(notation) {
            eprintln!("{notation}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = position.legal_moves();
    print!("{}", position.board_text());
    println!("side_to_move: {}", position.side_to_move());
    println!("status: {:?}", position.status());
    println!("checkmate: {}", position.is_checkmate());
    println!("stalemate: {}", position.is_stalemate());
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
