//! Cell state: wall flags and phase flags.

use bitflags::bitflags;

use crate::Direction;

bitflags! {
    /// The set of walls present on a cell.
    ///
    /// A set flag means the wall is present; an absent flag means that side
    /// is open (passable to the neighbor on that side). Every cell starts
    /// with [`Walls::all`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mazeweave_core::{Direction, Walls};
    ///
    /// let mut walls = Walls::all();
    /// walls.remove(Walls::from(Direction::Left));
    /// assert!(!walls.contains(Walls::LEFT));
    /// assert!(walls.contains(Walls::TOP));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        /// The wall toward the previous row.
        const TOP = 1;
        /// The wall toward the next row.
        const BOTTOM = 1 << 1;
        /// The wall toward the previous column.
        const LEFT = 1 << 2;
        /// The wall toward the next column.
        const RIGHT = 1 << 3;
    }
}

impl From<Direction> for Walls {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Top => Self::TOP,
            Direction::Bottom => Self::BOTTOM,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }
}

/// A single maze cell.
///
/// A cell holds its four wall flags and two independent phase flags:
/// `carved` records that generation has visited the cell, `explored` records
/// that the solver has. The flags are deliberately separate fields rather
/// than one reused `visited` flag, so a stale generation mark can never leak
/// into a solve.
///
/// Cells do not reference their neighbors; adjacency is computed by the
/// owning [`Grid`](crate::Grid) from coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: Walls,
    carved: bool,
    explored: bool,
}

impl Cell {
    pub(crate) const fn new() -> Self {
        Self {
            walls: Walls::all(),
            carved: false,
            explored: false,
        }
    }

    /// Returns the current wall set.
    #[must_use]
    pub const fn walls(&self) -> Walls {
        self.walls
    }

    /// Returns `true` if the wall facing `direction` is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazeweave_core::{Direction, Grid, Position};
    ///
    /// let grid = Grid::new(1, 1)?;
    /// assert!(grid[Position::new(0, 0)].has_wall(Direction::Top));
    /// # Ok::<(), mazeweave_core::GridError>(())
    /// ```
    #[must_use]
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.contains(Walls::from(direction))
    }

    /// Returns `true` if generation has visited this cell.
    #[must_use]
    pub const fn is_carved(&self) -> bool {
        self.carved
    }

    /// Returns `true` if the solver has visited this cell.
    #[must_use]
    pub const fn is_explored(&self) -> bool {
        self.explored
    }

    pub(crate) fn open(&mut self, direction: Direction) {
        self.walls.remove(Walls::from(direction));
    }

    pub(crate) fn mark_carved(&mut self) {
        self.carved = true;
    }

    pub(crate) fn mark_explored(&mut self) {
        self.explored = true;
    }

    pub(crate) fn clear_explored(&mut self) {
        self.explored = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_fully_walled() {
        let cell = Cell::new();
        assert_eq!(cell.walls(), Walls::all());
        for direction in Direction::ALL {
            assert!(cell.has_wall(direction));
        }
        assert!(!cell.is_carved());
        assert!(!cell.is_explored());
    }

    #[test]
    fn test_open_clears_only_one_side() {
        let mut cell = Cell::new();
        cell.open(Direction::Right);
        assert!(!cell.has_wall(Direction::Right));
        assert!(cell.has_wall(Direction::Top));
        assert!(cell.has_wall(Direction::Bottom));
        assert!(cell.has_wall(Direction::Left));
    }

    #[test]
    fn test_phase_flags_are_independent() {
        let mut cell = Cell::new();
        cell.mark_carved();
        assert!(cell.is_carved());
        assert!(!cell.is_explored());

        cell.mark_explored();
        cell.clear_explored();
        assert!(cell.is_carved());
        assert!(!cell.is_explored());
    }

    #[test]
    fn test_walls_from_direction() {
        assert_eq!(Walls::from(Direction::Top), Walls::TOP);
        assert_eq!(Walls::from(Direction::Bottom), Walls::BOTTOM);
        assert_eq!(Walls::from(Direction::Left), Walls::LEFT);
        assert_eq!(Walls::from(Direction::Right), Walls::RIGHT);
    }
}
