use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plugin_tetris::core::{render, Board, GameEvent, GameState};
use plugin_tetris::types::{Cell, GameAction};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.start();
            }
            black_box(state.handle(GameEvent::Tick));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.start();
            }
            black_box(state.handle(GameEvent::Action(GameAction::HardDrop)));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 18..22 {
                for x in 0..10 {
                    board.set(x, y, Cell::Line);
                }
            }
            black_box(board.clear_full_rows())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    for _ in 0..6 {
        state.handle(GameEvent::Action(GameAction::HardDrop));
    }
    let snap = state.snapshot();

    c.bench_function("render_frame", |b| b.iter(|| black_box(render(black_box(&snap)))));
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop,
    bench_line_clear,
    bench_render
);
criterion_main!(benches);
