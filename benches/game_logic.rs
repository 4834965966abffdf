use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{slide_and_merge, spawn_tile, GameState, Grid, SimpleRng};
use tui_2048::types::Direction;

fn busy_grid() -> Grid {
    Grid::from_rows([[2, 2, 4, 8], [0, 4, 4, 0], [16, 0, 16, 2], [2, 2, 2, 2]])
}

fn bench_slide_and_merge(c: &mut Criterion) {
    c.bench_function("slide_and_merge_row", |b| {
        b.iter(|| slide_and_merge(black_box([2, 0, 2, 4])))
    });
}

fn bench_slide_all_directions(c: &mut Criterion) {
    let grid = busy_grid();
    c.bench_function("slide_4_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(black_box(&grid).slide(dir));
            }
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let grid = busy_grid();
    let mut rng = SimpleRng::new(12345);
    c.bench_function("spawn_tile", |b| {
        b.iter(|| spawn_tile(black_box(&grid), &mut rng))
    });
}

fn bench_can_move(c: &mut Criterion) {
    let locked = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    c.bench_function("can_move_locked", |b| {
        b.iter(|| black_box(&locked).can_move())
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_until_over", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            while !state.game_over() {
                for dir in Direction::ALL {
                    state.apply_move(dir);
                }
            }
            state.score()
        })
    });
}

criterion_group!(
    benches,
    bench_slide_and_merge,
    bench_slide_all_directions,
    bench_spawn,
    bench_can_move,
    bench_full_game
);
criterion_main!(benches);
