//! Grid coordinate representation.

use std::fmt::{self, Display};

/// A `(row, col)` coordinate on a maze grid.
///
/// Rows grow downward and columns grow rightward, with `(0, 0)` at the
/// top-left. Positions carry no grid bounds of their own; the owning
/// [`Grid`](crate::Grid) decides which positions are in range.
///
/// # Examples
///
/// ```
/// use mazeweave_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.col, 5);
/// assert_eq!(pos.to_string(), "(2, 5)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let pos = Position::new(3, 7);
        assert_eq!(pos.row, 3);
        assert_eq!(pos.col, 7);
        assert_eq!(pos, Position { row: 3, col: 7 });

        // Ordering is row-major
        assert!(Position::new(0, 9) < Position::new(1, 0));

        // Display trait
        assert_eq!(format!("{}", Position::new(0, 0)), "(0, 0)");
        assert_eq!(format!("{}", Position::new(12, 4)), "(12, 4)");
    }
}
