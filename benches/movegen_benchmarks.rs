//! Benchmarks for move generation and make/unmake.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::board::Position;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn position(fen: &str) -> Position {
    Position::try_from_fen(fen).expect("valid fen")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let mut board = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut kiwipete = position(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [
        ("startpos", chess_core::board::START_FEN),
        ("middlegame", MIDDLEGAME),
        ("kiwipete", KIWIPETE),
    ] {
        let mut board = position(fen);
        group.bench_function(BenchmarkId::new("legal", name), |b| {
            b.iter(|| black_box(board.legal_moves()))
        });
        group.bench_function(BenchmarkId::new("pseudo_legal", name), |b| {
            b.iter(|| black_box(board.pseudo_legal_moves()))
        });
    }

    group.finish();
}

fn bench_apply_revert(c: &mut Criterion) {
    let mut board = position(KIWIPETE);
    let moves = board.legal_moves();

    c.bench_function("apply_revert/kiwipete", |b| {
        b.iter(|| {
            for &mv in &moves {
                board.apply_move(black_box(mv));
                board.revert_move();
            }
        })
    });
}

criterion_group!(benches, bench_perft, bench_movegen, bench_apply_revert);
criterion_main!(benches);
