//! Edge case tests for special chess positions and moves.

use crate::board::{Color, GameStatus, Move, MoveKind, Piece, Position, PromotionPiece, Square};

fn position(fen: &str) -> Position {
    Position::try_from_fen(fen).expect("valid fen")
}

#[test]
fn test_stalemate_position() {
    let mut board = position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_checkmate());
    assert!(board.is_stalemate());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_back_rank_mate() {
    let mut board = position("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(board.is_checkmate());
    assert_eq!(
        board.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_underpromotions_available() {
    let mut board = position("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.legal_moves();

    for piece in PromotionPiece::ALL {
        assert!(
            moves.contains(&Move::promotion(Square::A7, Square::A8, piece)),
            "{piece:?} promotion should be available"
        );
    }

    board.apply_move(Move::promotion(Square::A7, Square::A8, PromotionPiece::Knight));
    assert_eq!(board.piece_kind_at(Square::A8), Some(Piece::Knight));
}

#[test]
fn test_en_passant_window_is_one_ply() {
    let mut board = position("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    board.play_str("d7d5").expect("legal");
    assert!(board.legal_moves().contains(&Move::en_passant(Square::E5, Square::D6)));

    board.play_str("e1d1").expect("legal");
    board.play_str("e8d8").expect("legal");
    assert_eq!(board.en_passant_square(), None);
    assert!(board.legal_moves().iter().all(|m| !m.is_en_passant()));
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    // Capturing en passant would clear both pawns off the fifth rank.
    let mut board = position("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    assert!(board
        .pseudo_legal_moves()
        .contains(&Move::en_passant(Square::E5, Square::D6)));
    assert!(!board.legal_moves().contains(&Move::en_passant(Square::E5, Square::D6)));
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut board = position("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
    let moves = board.legal_moves();
    assert!(moves.iter().all(|m| m.to().rank() == 0));
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_double_check_only_king_moves() {
    let mut board = position("4k3/8/8/8/1b6/5N2/8/r3K3 w - - 0 1");
    assert!(board.in_check());
    let moves = board.legal_moves();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.from() == Square::E1));
}

#[test]
fn test_castle_rights_from_string_without_rooks() {
    let mut board = position("4k3/8/8/8/8/8/8/4K3 w KQkq - 0 1");
    assert!(board.legal_moves().iter().all(|m| !m.is_castling()));
}

#[test]
fn test_kingless_position_still_generates() {
    let mut board = position("8/8/8/8/8/8/4P3/8 w - - 0 1");
    assert!(!board.in_check());
    let kinds: Vec<MoveKind> = board.legal_moves().iter().map(|m| m.kind()).collect();
    assert_eq!(kinds, vec![MoveKind::Quiet, MoveKind::DoublePawnPush]);
}
