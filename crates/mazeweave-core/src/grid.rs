//! The rectangular grid owning all maze cells.

use std::ops::Index;

use tinyvec::ArrayVec;

use crate::{Cell, Direction, GridError, Position};

/// An in-bounds neighbor of a cell, tagged with the direction leading to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbor {
    /// Direction from the queried cell to this neighbor.
    pub direction: Direction,
    /// The neighbor's coordinate.
    pub position: Position,
}

/// The neighbors of a cell, at most four.
pub type Neighbors = ArrayVec<[Neighbor; 4]>;

/// A rectangular grid of [`Cell`]s indexed by [`Position`].
///
/// The grid owns every cell by value; collaborators only ever receive
/// coordinates, never handles into the storage. All wall mutation goes
/// through [`remove_wall_between`](Self::remove_wall_between) (symmetric,
/// both sides of the shared boundary) or
/// [`open_boundary_wall`](Self::open_boundary_wall) (outward-facing walls
/// only), which together maintain the wall-symmetry invariant: the flag on
/// one cell and the opposite flag on its neighbor always agree.
///
/// # Examples
///
/// ```
/// use mazeweave_core::{Direction, Grid, Position};
///
/// let grid = Grid::new(3, 4)?;
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.cols(), 4);
///
/// // Corner cells have two in-bounds neighbors.
/// assert_eq!(grid.neighbors(Position::new(0, 0)).len(), 2);
/// // Interior cells have four.
/// assert_eq!(grid.neighbors(Position::new(1, 1)).len(), 4);
/// # Ok::<(), mazeweave_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with all walls present and all phase flags clear.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::new(); rows * cols],
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `pos` lies on this grid.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Returns the cell at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.contains(pos).then(|| &self.cells[self.offset(pos)])
    }

    /// Iterates over every position on the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Returns the in-bounds neighbor of `pos` in `direction`, if any.
    ///
    /// Returns `None` both when the step would leave the grid and when `pos`
    /// itself is out of bounds.
    #[must_use]
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        if !self.contains(pos) {
            return None;
        }
        let next = match direction {
            Direction::Top => Position::new(pos.row.checked_sub(1)?, pos.col),
            Direction::Bottom => Position::new(pos.row + 1, pos.col),
            Direction::Left => Position::new(pos.row, pos.col.checked_sub(1)?),
            Direction::Right => Position::new(pos.row, pos.col + 1),
        };
        self.contains(next).then_some(next)
    }

    /// Returns the in-bounds neighbors of `pos`, in [`Direction::ALL`] order.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> Neighbors {
        let mut neighbors = Neighbors::default();
        for direction in Direction::ALL {
            if let Some(position) = self.neighbor(pos, direction) {
                neighbors.push(Neighbor {
                    direction,
                    position,
                });
            }
        }
        neighbors
    }

    /// Returns the neighbors of `pos` that generation has not visited yet.
    #[must_use]
    pub fn uncarved_neighbors(&self, pos: Position) -> Neighbors {
        let mut neighbors = self.neighbors(pos);
        neighbors.retain(|n| !self[n.position].is_carved());
        neighbors
    }

    /// Returns the neighbors of `pos` that the solver has not visited yet.
    #[must_use]
    pub fn unexplored_neighbors(&self, pos: Position) -> Neighbors {
        let mut neighbors = self.neighbors(pos);
        neighbors.retain(|n| !self[n.position].is_explored());
        neighbors
    }

    /// Removes the wall between `from` and `to`, symmetrically.
    ///
    /// Clears `from`'s wall facing `direction` and `to`'s wall facing the
    /// opposite direction, so traversal from either side sees the opening.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::AdjacencyViolation`] if `to` is not the
    /// in-bounds neighbor of `from` in `direction`. That indicates a caller
    /// bug; the grid is left untouched.
    pub fn remove_wall_between(
        &mut self,
        from: Position,
        to: Position,
        direction: Direction,
    ) -> Result<(), GridError> {
        if self.neighbor(from, direction) != Some(to) {
            return Err(GridError::AdjacencyViolation {
                from,
                to,
                direction,
            });
        }
        let from_offset = self.offset(from);
        let to_offset = self.offset(to);
        self.cells[from_offset].open(direction);
        self.cells[to_offset].open(direction.opposite());
        Ok(())
    }

    /// Opens an outward-facing wall, such as the maze entrance or exit.
    ///
    /// Unlike [`remove_wall_between`](Self::remove_wall_between) there is no
    /// neighbor cell to update, so only the single flag on `pos` is cleared.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds or if an in-bounds neighbor exists
    /// in `direction` (opening an internal wall one-sided would break the
    /// symmetry invariant).
    pub fn open_boundary_wall(&mut self, pos: Position, direction: Direction) {
        assert!(
            self.contains(pos) && self.neighbor(pos, direction).is_none(),
            "wall {direction} of {pos} is not a boundary wall"
        );
        let offset = self.offset(pos);
        self.cells[offset].open(direction);
    }

    /// Marks the cell at `pos` as visited by generation.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn mark_carved(&mut self, pos: Position) {
        let offset = self.offset(pos);
        self.cells[offset].mark_carved();
    }

    /// Marks the cell at `pos` as visited by the solver.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn mark_explored(&mut self, pos: Position) {
        let offset = self.offset(pos);
        self.cells[offset].mark_explored();
    }

    /// Clears every cell's exploration flag.
    ///
    /// Called between the generation and solving phases, and before
    /// re-solving. Carve flags are left intact.
    pub fn reset_exploration(&mut self) {
        for cell in &mut self.cells {
            cell.clear_explored();
        }
    }

    /// Verifies the wall-symmetry invariant across the whole grid.
    ///
    /// For every pair of adjacent cells, the flag on one side must equal the
    /// flag on the corresponding opposite side. A `false` here means some
    /// wall was mutated outside the grid's own operations and traversal
    /// results can no longer be trusted.
    #[must_use]
    pub fn walls_symmetric(&self) -> bool {
        self.positions().all(|pos| {
            self.neighbors(pos).iter().all(|n| {
                self[pos].has_wall(n.direction)
                    == self[n.position].has_wall(n.direction.opposite())
            })
        })
    }

    fn offset(&self, pos: Position) -> usize {
        assert!(self.contains(pos), "position {pos} is out of bounds");
        pos.row * self.cols + pos.col
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[self.offset(pos)]
    }
}
