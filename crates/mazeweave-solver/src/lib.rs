//! Depth-first maze solving with explicit backtracking.
//!
//! This crate finds a simple path between two cells of a carved
//! [`mazeweave_core::Grid`], stepping only through open walls. The search is
//! depth-first with backtracking, driven by an explicit stack so depth is
//! bounded only by available memory, and it scans candidate directions in
//! the fixed [`Direction::ALL`](mazeweave_core::Direction::ALL) order -
//! deterministic on purpose, in contrast to generation's randomized
//! tie-break, so a given maze always solves along the same path.
//!
//! Each forward step and each retraction is reported through the
//! [`MazeObserver`](mazeweave_core::MazeObserver) hook; the forward steps
//! that were never retracted are exactly the returned [`Path`].
//!
//! # Examples
//!
//! ```
//! use mazeweave_core::{Direction, Grid, Position};
//! use mazeweave_solver::MazeSolver;
//!
//! // A 1x2 corridor.
//! let mut grid = Grid::new(1, 2)?;
//! let left = Position::new(0, 0);
//! let right = Position::new(0, 1);
//! grid.remove_wall_between(left, right, Direction::Right)?;
//!
//! let outcome = MazeSolver::new().solve(&mut grid, left, right);
//! assert_eq!(outcome.path().map(mazeweave_solver::Path::cells), Some(&[left, right][..]));
//! # Ok::<(), mazeweave_core::GridError>(())
//! ```

pub mod path;
pub mod solver;

pub use self::{
    path::Path,
    solver::{MazeSolver, SolveOutcome},
};
