//! Core data structures for maze generation and solving.
//!
//! This crate provides the grid model shared by the generator and solver
//! crates: cells with per-side wall flags, the grid that owns them, and the
//! observer seam used to notify a rendering collaborator of state changes.
//!
//! # Overview
//!
//! The crate is organized around three main concepts:
//!
//! 1. **Coordinate types** - [`Position`] (a `(row, col)` grid coordinate)
//!    and [`Direction`] (one of the four cardinal sides of a cell).
//! 2. **Cell and grid state** - [`Cell`] carries a [`Walls`] bitflag set
//!    plus two independent phase flags (carved during generation, explored
//!    during solving), and [`Grid`] owns all cells by value and answers
//!    adjacency queries. Wall removal is always applied symmetrically to
//!    both cells sharing a boundary.
//! 3. **Observation** - [`MazeObserver`] is the narrow callback seam through
//!    which a rendering collaborator learns about wall changes and solver
//!    moves. Both hooks default to no-ops so the core is fully testable
//!    without a collaborator attached.
//!
//! # Examples
//!
//! ```
//! use mazeweave_core::{Direction, Grid, Position};
//!
//! let mut grid = Grid::new(2, 3)?;
//!
//! // All walls start present.
//! let origin = Position::new(0, 0);
//! assert!(grid[origin].has_wall(Direction::Right));
//!
//! // Wall removal is symmetric.
//! let east = Position::new(0, 1);
//! grid.remove_wall_between(origin, east, Direction::Right)?;
//! assert!(!grid[origin].has_wall(Direction::Right));
//! assert!(!grid[east].has_wall(Direction::Left));
//! # Ok::<(), mazeweave_core::GridError>(())
//! ```

pub mod cell;
pub mod direction;
pub mod error;
pub mod grid;
pub mod observer;
pub mod position;

// Re-export commonly used types
pub use self::{
    cell::{Cell, Walls},
    direction::Direction,
    error::GridError,
    grid::{Grid, Neighbor, Neighbors},
    observer::{MazeObserver, NoopObserver},
    position::Position,
};
