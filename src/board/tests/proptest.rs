//! Property-based tests using proptest.

use crate::board::{Move, MoveKind, Position};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play `num_moves` random legal moves, stopping early if the game ends.
fn random_playout(seed: u64, num_moves: usize) -> (Position, Vec<Move>) {
    let mut board = Position::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played = Vec::new();

    for _ in 0..num_moves {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.apply_move(mv);
        played.push(mv);
    }
    (board, played)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: apply followed by revert restores the position exactly
    #[test]
    fn prop_apply_revert_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut board, played) = random_playout(seed, num_moves);
        prop_assert_eq!(board.history_len(), played.len());

        for mv in board.legal_moves() {
            let before = board.snapshot();
            board.apply_move(mv);
            board.revert_move();
            prop_assert_eq!(board.snapshot(), before);
        }

        for _ in 0..played.len() {
            board.revert_move();
        }
        prop_assert_eq!(board.snapshot(), Position::new().snapshot());
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut board, _) = random_playout(seed, num_moves);
        let white = board.side_to_move() == crate::board::Color::White;

        for mv in board.legal_moves() {
            board.apply_move(mv);
            prop_assert!(!board.king_in_check(white), "{:?} leaves king in check", mv);
            board.revert_move();
        }
    }

    /// Property: the en passant square is set exactly after a double push
    #[test]
    fn prop_en_passant_follows_double_push(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, played) = random_playout(seed, num_moves);
        if let Some(&last) = played.last() {
            if last.kind() == MoveKind::DoublePawnPush {
                let passed = (last.from().index() + last.to().index()) / 2;
                prop_assert_eq!(board.en_passant_square().map(|sq| sq.index()), Some(passed));
            } else {
                prop_assert_eq!(board.en_passant_square(), None);
            }
        }
    }

    /// Property: position strings round-trip
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_playout(seed, num_moves);
        let fen = board.to_fen();
        let reparsed = Position::try_from_fen(&fen).expect("own output parses");
        prop_assert_eq!(reparsed.snapshot(), board.snapshot());
        prop_assert_eq!(reparsed.to_fen(), fen);
    }

    /// Property: checkmate and stalemate are exclusive and both mean no moves
    #[test]
    fn prop_terminal_status_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut board, _) = random_playout(seed, num_moves);
        let mate = board.is_checkmate();
        let stale = board.is_stalemate();
        prop_assert!(!(mate && stale));
        prop_assert_eq!(mate || stale, board.legal_moves().is_empty());
    }
}
