//! The solver's output: an ordered walk from entrance to exit.

use std::fmt::{self, Display};

use mazeweave_core::{Direction, Grid, Position};

/// A simple path through a maze, ordered from entrance to exit.
///
/// Consecutive entries are grid-adjacent cells with no wall between them. A
/// path always contains at least one cell; solving a 1x1 maze yields a path
/// of exactly the entrance cell.
///
/// # Examples
///
/// ```
/// use mazeweave_core::{Direction, Grid, Position};
/// use mazeweave_solver::MazeSolver;
///
/// let mut grid = Grid::new(1, 1)?;
/// let cell = Position::new(0, 0);
/// let outcome = MazeSolver::new().solve(&mut grid, cell, cell);
/// let path = outcome.path().unwrap();
/// assert_eq!(path.len(), 1);
/// assert_eq!(path.entrance(), path.exit());
/// # Ok::<(), mazeweave_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    pub(crate) fn new(cells: Vec<Position>) -> Self {
        assert!(!cells.is_empty(), "a path contains at least one cell");
        Self { cells }
    }

    /// Returns the cells on the path, entrance first.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns the number of cells on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `false`; a path always contains at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the first cell of the path.
    #[must_use]
    pub fn entrance(&self) -> Position {
        self.cells[0]
    }

    /// Returns the last cell of the path.
    #[must_use]
    pub fn exit(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    /// Checks that every consecutive pair is adjacent on `grid` with an
    /// open wall between the two cells.
    ///
    /// A path returned by the solver for `grid` is always walkable; this is
    /// a diagnostic for callers that transport paths between grids.
    #[must_use]
    pub fn is_walkable(&self, grid: &Grid) -> bool {
        self.cells.windows(2).all(|pair| {
            Direction::ALL.into_iter().any(|direction| {
                grid.neighbor(pair[0], direction) == Some(pair[1])
                    && !grid[pair[0]].has_wall(direction)
            })
        })
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            Display::fmt(cell, f)?;
        }
        Ok(())
    }
}
