//! Algorithm comparison over fixed-seed mazes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use labyrinth_benchmarks::fixture_maze;
use labyrinth_search::{a_star_search, breadth_first_search, depth_first_search};
use labyrinth_worlds::maze::{manhattan_distance, Maze};

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("maze_search");
    for &size in &[10usize, 20, 40] {
        let maze = fixture_maze(size);

        group.bench_with_input(BenchmarkId::new("dfs", size), &maze, |b, maze: &Maze| {
            b.iter(|| {
                black_box(depth_first_search(
                    maze.start(),
                    |p| maze.goal_test(p),
                    |p| maze.successors(p),
                ))
            });
        });
        group.bench_with_input(BenchmarkId::new("bfs", size), &maze, |b, maze: &Maze| {
            b.iter(|| {
                black_box(breadth_first_search(
                    maze.start(),
                    |p| maze.goal_test(p),
                    |p| maze.successors(p),
                ))
            });
        });
        group.bench_with_input(BenchmarkId::new("a_star", size), &maze, |b, maze: &Maze| {
            b.iter(|| {
                black_box(a_star_search(
                    maze.start(),
                    |p| maze.goal_test(p),
                    |p| maze.successors(p),
                    manhattan_distance(maze.goal()),
                ))
            });
        });
    }
    group.finish();
}

fn bench_path_reconstruction(c: &mut Criterion) {
    let maze = fixture_maze(40);
    let result = breadth_first_search(maze.start(), |p| maze.goal_test(p), |p| {
        maze.successors(p)
    });

    c.bench_function("node_to_path_40x40", |b| {
        b.iter(|| black_box(result.path()));
    });
}

criterion_group!(benches, bench_algorithms, bench_path_reconstruction);
criterion_main!(benches);
