use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use cellmaze::cells::Coordinate;
use cellmaze::generators;
use cellmaze::pathing;

fn bench_solve_corner_to_corner(c: &mut Criterion) {
    c.bench_function("solve_corner_to_corner", |b| {
        let g = generators::generate_maze(351, 351, Some(350)).unwrap();
        let start = Coordinate::new(1, 1);
        let end = Coordinate::new(349, 349);
        b.iter(|| pathing::solve(&g, start, end).unwrap())
    });
}

fn bench_solve_start_is_end(c: &mut Criterion) {
    c.bench_function("solve_start_is_end", |b| {
        let g = generators::generate_maze(351, 351, Some(350)).unwrap();
        let centre = Coordinate::new(175, 175);
        b.iter(|| pathing::solve(&g, centre, centre).unwrap())
    });
}

criterion_group!(benches,
    bench_solve_corner_to_corner,
    bench_solve_start_is_end
);
criterion_main!(benches);
