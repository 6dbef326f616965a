use criterion::{black_box, criterion_group, criterion_main, Criterion};

use grid_snake::{Direction, Game, GridConfig, Input};

const TURNS: [Direction; 4] = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

fn bench(c: &mut Criterion) {
    c.bench_function("Game::update x 10k frames", |b| {
        b.iter(|| {
            let mut game = Game::seeded(GridConfig::CLASSIC.grid(), 42);
            for frame in 0..10_000u32 {
                let input = Input {
                    direction: Some(TURNS[(frame / 97) as usize % TURNS.len()]),
                    restart: game.is_over(),
                };
                black_box(game.update(input));
            }
            game.score()
        })
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
