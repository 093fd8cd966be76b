use criterion::{black_box, criterion_group, criterion_main, Criterion};
use duelchess::{Board, Color, Move, Position};

const OPENINGS: [(&str, &[&str]); 3] = [
    ("initial", &[]),
    (
        "italian",
        &["e2 e4", "e7 e5", "g1 f3", "b8 c6", "f1 c4", "f8 c5"],
    ),
    (
        "pre_mate",
        &["f2 f3", "e7 e5", "g2 g4", "d8 h4"],
    ),
];

fn boards() -> impl Iterator<Item = (&'static str, Board)> {
    OPENINGS.iter().map(|&(name, moves)| {
        let mut board = Board::initial();
        for s in moves {
            board.make_move(s.parse::<Move>().unwrap()).unwrap();
        }
        (name, board)
    })
}

fn bench_gen_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_moves");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut total = 0;
                for from in Position::iter() {
                    if let Some(piece) = board.get(from) {
                        total += piece.legal_moves(from, &board).len();
                    }
                }
                black_box(total)
            })
        });
    }
    group.finish();
}

fn bench_check_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_detection");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(board.is_king_in_check(Color::White)))
        });
    }
    group.finish();
}

fn bench_checkmate(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkmate");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(board.is_checkmate(Color::White)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_gen_moves,
    bench_check_detection,
    bench_checkmate
);
criterion_main!(benches);
