//! Maze session management.
//!
//! This crate ties generation and solving together into a [`Maze`] session
//! with a fixed lifecycle: carve a perfect maze, reset exploration state,
//! solve it, and hold the result read-only thereafter. The session layer is
//! also where an unexpectedly unsolvable generated maze turns into a
//! surfaced diagnostic instead of a silent "no path found."
//!
//! # Examples
//!
//! ```
//! use mazeweave_game::Maze;
//! use mazeweave_generator::MazeSeed;
//!
//! let mut maze = Maze::generate(4, 4, Some(MazeSeed::new(42)))?;
//! let path = maze.solve()?.clone();
//! assert_eq!(path.entrance(), maze.entrance());
//! assert_eq!(path.exit(), maze.exit());
//! # Ok::<(), mazeweave_game::MazeError>(())
//! ```

pub mod maze;

pub use self::maze::{Maze, MazeError};
