//! Errors reported by the grid model.

use crate::{Direction, Position};

/// Errors that can occur when constructing or mutating a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A grid dimension was zero.
    ///
    /// Reported at construction; a maze needs at least one cell.
    #[display("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Wall removal was requested between cells that are not adjacent in the
    /// stated direction.
    ///
    /// This is a caller bug, not a recoverable runtime condition: wall
    /// removal is only defined between a cell and its in-bounds neighbor.
    #[display("cells {from} and {to} are not adjacent in direction {direction}")]
    AdjacencyViolation {
        /// The cell whose wall was to be cleared.
        from: Position,
        /// The claimed neighbor.
        to: Position,
        /// The claimed direction from `from` to `to`.
        direction: Direction,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GridError::InvalidDimensions { rows: 0, cols: 5 };
        assert_eq!(err.to_string(), "invalid grid dimensions: 0x5");

        let err = GridError::AdjacencyViolation {
            from: Position::new(0, 0),
            to: Position::new(2, 2),
            direction: Direction::Right,
        };
        assert_eq!(
            err.to_string(),
            "cells (0, 0) and (2, 2) are not adjacent in direction right"
        );
    }
}
