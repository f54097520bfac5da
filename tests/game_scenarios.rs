use serde::Deserialize;

use chess_core::board::{MoveParseError, Position, START_FEN};
use chess_core::{Color, Game, GameError, GameStatus, MoveRequest};

#[derive(Deserialize)]
struct Scenarios {
    games: Vec<GameCase>,
    rejections: Vec<Rejection>,
    mate_in_one: Vec<MateInOne>,
}

#[derive(Deserialize)]
struct GameCase {
    name: String,
    #[serde(default)]
    fen: Option<String>,
    moves: Vec<String>,
    result: String,
    #[serde(default)]
    winner: Option<String>,
}

#[derive(Deserialize)]
struct Rejection {
    #[serde(rename = "move")]
    notation: String,
    error: String,
}

#[derive(Deserialize)]
struct MateInOne {
    fen: String,
    #[serde(rename = "move")]
    notation: String,
}

fn load() -> Scenarios {
    let data = include_str!("data/scenarios.json");
    serde_json::from_str(data).expect("invalid scenarios.json")
}

fn color_named(name: &str) -> Color {
    match name {
        "white" => Color::White,
        "black" => Color::Black,
        other => panic!("unknown color {other}"),
    }
}

#[test]
fn scripted_games_reach_expected_result() {
    for case in load().games {
        let mut game = match &case.fen {
            Some(fen) => Game::from_fen(fen).expect("valid fen"),
            None => Game::new(),
        };

        for notation in &case.moves {
            let request: MoveRequest = notation.parse().expect("valid notation");
            let mover = game.side_to_move();
            game.play_as(mover, request)
                .unwrap_or_else(|err| panic!("{}: {} rejected: {}", case.name, notation, err));
        }

        let status = game.status();
        let expected = match case.result.as_str() {
            "checkmate" => GameStatus::Checkmate {
                winner: color_named(case.winner.as_deref().expect("winner given")),
            },
            "stalemate" => GameStatus::Stalemate,
            "check" => GameStatus::Check,
            "ongoing" => GameStatus::Ongoing,
            other => panic!("unknown result {other}"),
        };
        assert_eq!(status, expected, "{}", case.name);
        assert_eq!(game.moves().len(), case.moves.len());

        if status.is_over() {
            let any = game.legal_moves();
            assert!(any.is_empty(), "{}", case.name);
            assert!(matches!(
                game.play("a2a3".parse().expect("valid notation")),
                Err(GameError::GameOver { .. })
            ));
        }

        while game.undo().is_some() {}
        let start = match &case.fen {
            Some(fen) => Position::try_from_fen(fen).expect("valid fen"),
            None => Position::new(),
        };
        assert_eq!(game.position().snapshot(), start.snapshot(), "{}", case.name);
    }
}

#[test]
fn rejected_requests_leave_start_position_unchanged() {
    for case in load().rejections {
        let mut position = Position::new();
        let err = position.play_str(&case.notation).unwrap_err();
        let kind = match err {
            MoveParseError::IllegalMove { .. } => "illegal",
            MoveParseError::InvalidLength { .. } => "length",
            MoveParseError::InvalidSquare(_) => "square",
            MoveParseError::InvalidPromotion { .. } => "promotion",
            MoveParseError::InvalidEncoding { .. } => "encoding",
        };
        assert_eq!(kind, case.error, "{}", case.notation);
        assert_eq!(position.to_fen(), START_FEN);
        assert_eq!(position.history_len(), 0);
    }
}

#[test]
fn mate_in_one_suite() {
    for problem in load().mate_in_one {
        let mut position = Position::try_from_fen(&problem.fen).expect("valid fen");
        assert!(!position.is_checkmate());
        position
            .play_str(&problem.notation)
            .unwrap_or_else(|err| panic!("{}: {}", problem.fen, err));
        assert!(
            position.is_checkmate(),
            "mate in one failed for fen: {} move: {}",
            problem.fen,
            problem.notation
        );
    }
}

#[test]
fn opening_exchange_and_rejected_king_jump() {
    let mut position = Position::new();
    position.play_str("e2e4").expect("legal");
    position.play_str("e7e5").expect("legal");

    let before = position.board_text();
    assert_eq!(
        position.play_str("e1e8"),
        Err(MoveParseError::IllegalMove {
            notation: "e1e8".to_string()
        })
    );
    assert_eq!(position.board_text(), before);
    assert_eq!(
        before,
        "\
r n b q k b n r
p p p p . p p p
. . . . . . . .
. . . . p . . .
. . . . P . . .
. . . . . . . .
P P P P . P P P
R N B Q K B N R
"
    );
}
