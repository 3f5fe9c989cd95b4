//! Cardinal directions between adjacent cells.

use std::fmt::{self, Display};

/// One of the four sides of a cell.
///
/// The order of [`Direction::ALL`] is `Top, Bottom, Left, Right`. Neighbor
/// enumeration and the solver's deterministic tie-break both follow this
/// order, so it is part of the observable behavior, not an implementation
/// detail.
///
/// # Examples
///
/// ```
/// use mazeweave_core::Direction;
///
/// assert_eq!(Direction::Top.opposite(), Direction::Bottom);
/// assert_eq!(Direction::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the previous row.
    #[default]
    Top,
    /// Toward the next row.
    Bottom,
    /// Toward the previous column.
    Left,
    /// Toward the next column.
    Right,
}

impl Direction {
    /// All directions, in neighbor-enumeration order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Returns the direction pointing the opposite way.
    ///
    /// A wall removed on one cell's side is also removed on the neighbor's
    /// opposite side, keeping the two flags in agreement.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazeweave_core::Direction;
    ///
    /// for direction in Direction::ALL {
    ///     assert_eq!(direction.opposite().opposite(), direction);
    /// }
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}
