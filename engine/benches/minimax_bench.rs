use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::tictactoe::{GameState, Move, best_move, evaluate};

fn bench_full_game_self_play() {
    let mut state = GameState::new();
    while !evaluate(&state).is_terminal() {
        match best_move(&mut state) {
            Some(mv) => state.apply(mv).unwrap(),
            None => break,
        }
    }
}

fn bench_single_move_empty_board() {
    let mut state = GameState::new();
    black_box(best_move(&mut state));
}

fn bench_single_move_mid_game() {
    let mut state = GameState::new();
    for mv in [Move::new(1, 1), Move::new(0, 0), Move::new(2, 2)] {
        state.apply(mv).unwrap();
    }
    black_box(best_move(&mut state));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("self_play", |b| b.iter(bench_full_game_self_play));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
