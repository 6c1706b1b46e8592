use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Controller, Grid, Shape, ShapeBag};
use blockfall::types::{Color, GameAction, ShapeKind};

fn bench_move_down(c: &mut Criterion) {
    let mut game = Controller::new(10, 20, ShapeBag::new(12345), ());

    c.bench_function("apply_move_down", |b| {
        b.iter(|| {
            if game.is_over() {
                game = Controller::new(10, 20, ShapeBag::new(12345), ());
            }
            game.apply(black_box(GameAction::MoveDown));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 20);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, Some(Color::Cyan));
                }
            }
            for row in grid.full_rows() {
                grid.remove_row(row);
            }
            grid
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut grid = Grid::new(10, 20);
    for x in 0..9 {
        grid.set(x, 19, Some(Color::Red));
    }
    let shape = Shape::spawn(ShapeKind::T, 4);

    c.bench_function("collides", |b| {
        b.iter(|| grid.collides(black_box(shape.blocks())))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut shape = Shape::spawn(ShapeKind::L, 4);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            shape.rotate();
            black_box(&shape);
        })
    });
}

criterion_group!(
    benches,
    bench_move_down,
    bench_line_clear,
    bench_collides,
    bench_rotate
);
criterion_main!(benches);
