//! The randomized recursive-backtracking carver.

use mazeweave_core::{Direction, Grid, GridError, MazeObserver, NoopObserver, Position};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::MazeSeed;

/// The output of maze generation: a carved grid plus the seed that made it.
///
/// Every cell in `grid` is reachable from every other through exactly one
/// simple path, the entrance boundary wall (left of the top-left cell) and
/// exit boundary wall (right of the bottom-right cell) are open, and every
/// cell carries its carve mark. Exploration flags are untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarvedMaze {
    /// The carved grid.
    pub grid: Grid,
    /// The seed that produced this maze.
    pub seed: MazeSeed,
}

impl CarvedMaze {
    /// Returns the entrance cell, always the top-left corner.
    #[must_use]
    pub const fn entrance(&self) -> Position {
        Position::new(0, 0)
    }

    /// Returns the exit cell, always the bottom-right corner.
    #[must_use]
    pub const fn exit(&self) -> Position {
        Position::new(self.grid.rows() - 1, self.grid.cols() - 1)
    }
}

/// Carves perfect mazes over rectangular grids.
///
/// The carver walks the grid depth-first from the top-left cell, at each
/// step picking **uniformly at random** among the not-yet-carved neighbors
/// of the current cell. Uniform choice among all open options (rather than
/// first-available) is what keeps the maze unbiased instead of
/// corridor-heavy. When a cell has no uncarved neighbors left it backtracks,
/// and a cell keeps offering branches until it is exhausted.
///
/// The walk is driven by an explicit stack, so a worst-case serpentine maze
/// of `rows * cols` cells cannot overflow the call stack.
///
/// # Examples
///
/// ```
/// use mazeweave_generator::MazeGenerator;
///
/// let generator = MazeGenerator::new();
/// let maze = generator.generate(8, 12)?;
/// println!("carved with seed {}", maze.seed);
/// # Ok::<(), mazeweave_core::GridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MazeGenerator;

impl MazeGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        MazeGenerator
    }

    /// Generates a maze with a fresh random seed.
    ///
    /// The seed actually used is recorded on the returned [`CarvedMaze`] so
    /// the maze can be reproduced later.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero.
    pub fn generate(&self, rows: usize, cols: usize) -> Result<CarvedMaze, GridError> {
        self.generate_with_seed(rows, cols, MazeSeed::random())
    }

    /// Generates a maze deterministically from `seed`.
    ///
    /// The same dimensions and seed always produce a bit-identical wall
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero.
    pub fn generate_with_seed(
        &self,
        rows: usize,
        cols: usize,
        seed: MazeSeed,
    ) -> Result<CarvedMaze, GridError> {
        self.generate_into(rows, cols, seed, &mut NoopObserver)
    }

    /// Generates a maze, reporting each wall change to `observer`.
    ///
    /// The observer receives a [`walls_changed`](MazeObserver::walls_changed)
    /// notification for both cells of every internal removal and for each of
    /// the two boundary breaks. Notifications are informational only; the
    /// carved maze is identical with a [`NoopObserver`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero.
    pub fn generate_into(
        &self,
        rows: usize,
        cols: usize,
        seed: MazeSeed,
        observer: &mut dyn MazeObserver,
    ) -> Result<CarvedMaze, GridError> {
        let mut grid = Grid::new(rows, cols)?;
        let mut rng = Pcg64Mcg::seed_from_u64(seed.value());
        log::debug!("carving {rows}x{cols} maze with seed {seed}");

        Self::carve(&mut grid, &mut rng, observer)?;
        Self::break_boundary(&mut grid, observer);

        log::debug!("finished carving {rows}x{cols} maze");
        Ok(CarvedMaze { grid, seed })
    }

    /// Depth-first carve from the top-left cell, explicit-stack form.
    ///
    /// Equivalent to the recursive formulation: mark the cell, and while it
    /// has uncarved neighbors, open a wall toward a uniformly random one and
    /// descend into it; with none left, backtrack.
    fn carve(
        grid: &mut Grid,
        rng: &mut Pcg64Mcg,
        observer: &mut dyn MazeObserver,
    ) -> Result<(), GridError> {
        let start = Position::new(0, 0);
        grid.mark_carved(start);
        let mut stack = vec![start];

        while let Some(&current) = stack.last() {
            let choices = grid.uncarved_neighbors(current);
            if choices.is_empty() {
                stack.pop();
                continue;
            }
            let chosen = choices[rng.random_range(0..choices.len())];
            grid.remove_wall_between(current, chosen.position, chosen.direction)?;
            observer.walls_changed(current);
            observer.walls_changed(chosen.position);
            grid.mark_carved(chosen.position);
            stack.push(chosen.position);
        }
        Ok(())
    }

    /// Opens the entrance and exit boundary walls.
    fn break_boundary(grid: &mut Grid, observer: &mut dyn MazeObserver) {
        let entrance = Position::new(0, 0);
        let exit = Position::new(grid.rows() - 1, grid.cols() - 1);
        grid.open_boundary_wall(entrance, Direction::Left);
        observer.walls_changed(entrance);
        grid.open_boundary_wall(exit, Direction::Right);
        observer.walls_changed(exit);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use mazeweave_solver::MazeSolver;
    use proptest::prelude::*;

    use super::*;

    /// Number of cells reachable from the entrance through open walls.
    fn reachable_cells(grid: &Grid) -> usize {
        let start = Position::new(0, 0);
        let mut seen = vec![false; grid.rows() * grid.cols()];
        seen[0] = true;
        let mut queue = VecDeque::from([start]);
        let mut count = 0;
        while let Some(pos) = queue.pop_front() {
            count += 1;
            for n in grid.neighbors(pos) {
                let offset = n.position.row * grid.cols() + n.position.col;
                if !grid[pos].has_wall(n.direction) && !seen[offset] {
                    seen[offset] = true;
                    queue.push_back(n.position);
                }
            }
        }
        count
    }

    /// Number of internal wall openings, each shared boundary counted once.
    fn internal_openings(grid: &Grid) -> usize {
        grid.positions()
            .map(|pos| {
                [Direction::Bottom, Direction::Right]
                    .into_iter()
                    .filter(|&d| grid.neighbor(pos, d).is_some() && !grid[pos].has_wall(d))
                    .count()
            })
            .sum()
    }

    #[derive(Debug, Default)]
    struct WallRecorder {
        changed: Vec<Position>,
    }

    impl MazeObserver for WallRecorder {
        fn walls_changed(&mut self, pos: Position) {
            self.changed.push(pos);
        }
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let generator = MazeGenerator::new();
        assert_eq!(
            generator.generate_with_seed(0, 5, MazeSeed::new(1)),
            Err(GridError::InvalidDimensions { rows: 0, cols: 5 })
        );
    }

    #[test]
    fn test_entrance_and_exit_are_open() {
        let generator = MazeGenerator::new();
        let maze = generator.generate_with_seed(5, 7, MazeSeed::new(7)).unwrap();
        assert!(!maze.grid[maze.entrance()].has_wall(Direction::Left));
        assert!(!maze.grid[maze.exit()].has_wall(Direction::Right));
        assert_eq!(maze.entrance(), Position::new(0, 0));
        assert_eq!(maze.exit(), Position::new(4, 6));
    }

    #[test]
    fn test_same_seed_reproduces_maze() {
        let generator = MazeGenerator::new();
        let seed = MazeSeed::new(42);
        let first = generator.generate_with_seed(9, 9, seed).unwrap();
        let second = generator.generate_with_seed(9, 9, seed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_cell_maze() {
        // Scenario: a 1x1 maze has no internal walls to remove; entrance
        // and exit both refer to the single cell.
        let generator = MazeGenerator::new();
        let maze = generator.generate_with_seed(1, 1, MazeSeed::new(1)).unwrap();
        assert_eq!(maze.entrance(), maze.exit());
        assert_eq!(internal_openings(&maze.grid), 0);
        let cell = maze.grid[Position::new(0, 0)];
        assert!(!cell.has_wall(Direction::Left));
        assert!(!cell.has_wall(Direction::Right));
        assert!(cell.has_wall(Direction::Top));
        assert!(cell.has_wall(Direction::Bottom));
    }

    #[test]
    fn test_four_by_four_is_a_spanning_tree() {
        // Scenario: 4x4 with a fixed seed removes exactly 15 internal walls.
        let generator = MazeGenerator::new();
        let maze = generator.generate_with_seed(4, 4, MazeSeed::new(0)).unwrap();
        assert_eq!(internal_openings(&maze.grid), 15);
        assert_eq!(reachable_cells(&maze.grid), 16);
        assert!(maze.grid.walls_symmetric());
    }

    #[test]
    fn test_every_cell_is_carved() {
        let generator = MazeGenerator::new();
        let maze = generator.generate_with_seed(6, 3, MazeSeed::new(3)).unwrap();
        assert!(maze.grid.positions().all(|pos| maze.grid[pos].is_carved()));
        assert!(maze.grid.positions().all(|pos| !maze.grid[pos].is_explored()));
    }

    #[test]
    fn test_observer_sees_every_wall_change() {
        let generator = MazeGenerator::new();
        let mut observer = WallRecorder::default();
        let maze = generator
            .generate_into(4, 4, MazeSeed::new(9), &mut observer)
            .unwrap();

        // Two notifications per internal removal, plus the two boundary
        // breaks at the entrance and exit.
        assert_eq!(
            observer.changed.len(),
            2 * internal_openings(&maze.grid) + 2
        );
        let boundary = &observer.changed[observer.changed.len() - 2..];
        assert_eq!(boundary, [maze.entrance(), maze.exit()]);
    }

    #[test]
    fn test_observer_does_not_affect_result() {
        let generator = MazeGenerator::new();
        let seed = MazeSeed::new(11);
        let silent = generator.generate_with_seed(5, 5, seed).unwrap();
        let mut observer = WallRecorder::default();
        let observed = generator.generate_into(5, 5, seed, &mut observer).unwrap();
        assert_eq!(silent, observed);
    }

    #[test]
    fn test_generated_mazes_are_solvable() {
        let generator = MazeGenerator::new();
        let solver = MazeSolver::new();
        for seed in 0..10 {
            let mut maze = generator
                .generate_with_seed(8, 8, MazeSeed::new(seed))
                .unwrap();
            let entrance = maze.entrance();
            let exit = maze.exit();
            maze.grid.reset_exploration();
            let outcome = solver.solve(&mut maze.grid, entrance, exit);
            assert!(outcome.is_solved(), "seed {seed} produced an unsolvable maze");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Generated mazes are perfect: connected, acyclic, symmetric.
        #[test]
        fn prop_generated_maze_is_perfect(
            rows in 1_usize..12,
            cols in 1_usize..12,
            seed in any::<u64>(),
        ) {
            let generator = MazeGenerator::new();
            let maze = generator
                .generate_with_seed(rows, cols, MazeSeed::new(seed))
                .unwrap();
            prop_assert_eq!(reachable_cells(&maze.grid), rows * cols);
            prop_assert_eq!(internal_openings(&maze.grid), rows * cols - 1);
            prop_assert!(maze.grid.walls_symmetric());
            prop_assert!(!maze.grid[maze.entrance()].has_wall(Direction::Left));
            prop_assert!(!maze.grid[maze.exit()].has_wall(Direction::Right));
        }

        /// The solver finds a walkable path of at least Manhattan length.
        #[test]
        fn prop_generated_maze_solves(
            rows in 1_usize..10,
            cols in 1_usize..10,
            seed in any::<u64>(),
        ) {
            let generator = MazeGenerator::new();
            let mut maze = generator
                .generate_with_seed(rows, cols, MazeSeed::new(seed))
                .unwrap();
            let entrance = maze.entrance();
            let exit = maze.exit();
            maze.grid.reset_exploration();

            let outcome = MazeSolver::new().solve(&mut maze.grid, entrance, exit);
            let path = outcome.path().expect("generated maze must solve");
            prop_assert!(path.len() >= rows + cols - 1);
            prop_assert_eq!(path.entrance(), entrance);
            prop_assert_eq!(path.exit(), exit);
            prop_assert!(path.is_walkable(&maze.grid));
        }
    }
}
