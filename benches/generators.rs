use criterion::{criterion_group, criterion_main, Criterion};
use cellmaze::{
    generators,
    grid::Grid,
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_101(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(101);
    c.bench_function("recursive_backtracker_maze_101", move |b| {
        b.iter(|| {
            let mut g = Grid::new(RowsCount(101), ColumnsCount(101)).unwrap();
            generators::recursive_backtracker(&mut g, &mut rng).unwrap()
        })
    });
}

fn bench_add_loops_maze_101(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(7);
    let mut carved = Grid::new(RowsCount(101), ColumnsCount(101)).unwrap();
    generators::recursive_backtracker(&mut carved, &mut rng).unwrap();

    c.bench_function("add_loops_maze_101", move |b| {
        b.iter(|| {
            let mut g = carved.clone();
            generators::add_loops(&mut g, 2..=60, &mut rng).unwrap()
        })
    });
}

fn bench_generate_maze_31(c: &mut Criterion) {
    c.bench_function("generate_maze_31", |b| {
        b.iter(|| generators::generate_maze(31, 31, Some(31)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_101,
    bench_add_loops_maze_101,
    bench_generate_maze_31
);
criterion_main!(benches);
