//! Benchmarks for move-selection performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gomoku_engine::board::{is_winning_line, simple};
use gomoku_engine::{select_move, Board, Difficulty, Mark, Pos};

fn midgame_board() -> Board {
    Board::from_marks(&[
        "...............",
        "...............",
        "...............",
        "...............",
        "....X..........",
        ".....OX........",
        "......XO.......",
        ".....OXX.......",
        "......OO.......",
        ".........X.....",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
    ])
    .unwrap()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    group.sample_size(10); // Fewer samples for the slower search path

    let board = midgame_board();

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        group.bench_with_input(
            BenchmarkId::new("midgame", difficulty),
            &difficulty,
            |b, &difficulty| {
                b.iter(|| select_move(black_box(&board), Mark::X, difficulty, None))
            },
        );
    }

    group.finish();
}

fn bench_quick_scorer(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_scorer");

    let board = midgame_board();
    group.bench_function("midgame", |b| {
        b.iter(|| simple::quick_move(black_box(&board), Mark::X))
    });

    group.finish();
}

fn bench_win_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("win_oracle");

    let board = midgame_board();
    group.bench_function("midgame_sweep", |b| {
        b.iter(|| {
            let mut wins = 0u32;
            for row in 0..board.size() {
                for col in 0..board.size() {
                    if is_winning_line(black_box(&board), Pos::new(row, col)) {
                        wins += 1;
                    }
                }
            }
            wins
        })
    });

    group.finish();
}

criterion_group!(benches, bench_select, bench_quick_scorer, bench_win_oracle);
criterion_main!(benches);
