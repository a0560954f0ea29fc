//! Shared fixtures for the labyrinth benchmark suites.

use labyrinth_worlds::maze::{Maze, MazePosition};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fixed seed so every benchmark run times the same maze.
pub const FIXTURE_SEED: u64 = 0x1abd;

/// Build the standard square benchmark maze: start in the top-left corner,
/// goal in the bottom-right, 20% of cells blocked, fixed seed.
#[must_use]
pub fn fixture_maze(size: usize) -> Maze {
    assert!(size >= 2, "fixture maze needs distinct start and goal");
    Maze::random(
        size,
        size,
        0.2,
        MazePosition::new(0, 0),
        MazePosition::new(size - 1, size - 1),
        &mut StdRng::seed_from_u64(FIXTURE_SEED),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_maze_is_stable_across_calls() {
        assert_eq!(fixture_maze(10).to_string(), fixture_maze(10).to_string());
    }
}
