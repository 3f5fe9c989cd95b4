//! Perfect-maze generation with randomized recursive backtracking.
//!
//! This crate carves a perfect maze (a spanning tree of the grid's
//! adjacency graph: every cell reachable, no cycles) over a
//! [`mazeweave_core::Grid`], then breaks the entrance and exit boundary
//! walls. Carving uses an explicit stack rather than call recursion, so
//! depth is bounded only by available memory.
//!
//! The random source is an explicit per-generation [`rand_pcg::Pcg64Mcg`]
//! seeded from a [`MazeSeed`], never process-global state: the same seed
//! always reproduces the same maze, and independent generations cannot
//! interfere with each other.
//!
//! # Examples
//!
//! ```
//! use mazeweave_generator::{MazeGenerator, MazeSeed};
//!
//! let generator = MazeGenerator::new();
//! let maze = generator.generate_with_seed(4, 4, MazeSeed::new(42))?;
//!
//! // Same seed, same maze.
//! let again = generator.generate_with_seed(4, 4, MazeSeed::new(42))?;
//! assert_eq!(maze, again);
//! # Ok::<(), mazeweave_core::GridError>(())
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{CarvedMaze, MazeGenerator},
    seed::{MazeSeed, ParseMazeSeedError},
};
