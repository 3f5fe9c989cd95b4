//! The depth-first search driver.

use mazeweave_core::{Grid, MazeObserver, Neighbors, NoopObserver, Position};

use crate::Path;

/// The result of a solve attempt.
///
/// `Unsolvable` is a legitimate answer for hand-built grids; for a maze
/// carved by the generator it indicates corrupted grid state, and the
/// session layer is responsible for surfacing that as a diagnostic rather
/// than a plain "no path."
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// A path from entrance to exit was found.
    Solved(Path),
    /// The search exhausted every reachable cell without finding the exit.
    Unsolvable,
}

impl SolveOutcome {
    /// Returns the discovered path, or `None` if the maze was unsolvable.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Solved(path) => Some(path),
            Self::Unsolvable => None,
        }
    }

    /// Consumes the outcome, returning the discovered path if any.
    #[must_use]
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Solved(path) => Some(path),
            Self::Unsolvable => None,
        }
    }
}

/// A depth-first search frame: one cell plus its remaining candidates.
///
/// The candidate list is snapshotted when the cell is entered, exactly like
/// the recursive formulation computes its neighbor list once at call entry;
/// exploration marks are re-checked when a candidate is actually tried.
#[derive(Debug)]
struct Frame {
    pos: Position,
    candidates: Neighbors,
    next: usize,
}

impl Frame {
    fn enter(grid: &Grid, pos: Position) -> Self {
        Self {
            pos,
            candidates: grid.unexplored_neighbors(pos),
            next: 0,
        }
    }
}

/// Finds a path between two cells of a carved maze.
///
/// The search steps only where the **current** cell's wall flag toward the
/// neighbor is open (the neighbor's flag agrees by the grid's symmetry
/// invariant), marks each entered cell explored, and backtracks from dead
/// ends. Directions are tried in the fixed `Top, Bottom, Left, Right` order;
/// given the same grid the solver always walks the same path.
///
/// An explicit stack carries `(cell, remaining candidates)` frames, so a
/// path meandering through all `rows * cols` cells cannot overflow the call
/// stack.
///
/// # Examples
///
/// ```
/// use mazeweave_core::{Direction, Grid, Position};
/// use mazeweave_solver::MazeSolver;
///
/// let mut grid = Grid::new(2, 1)?;
/// let top = Position::new(0, 0);
/// let bottom = Position::new(1, 0);
/// grid.remove_wall_between(top, bottom, Direction::Bottom)?;
///
/// let outcome = MazeSolver::new().solve(&mut grid, top, bottom);
/// assert!(outcome.is_solved());
/// # Ok::<(), mazeweave_core::GridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MazeSolver;

impl MazeSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        MazeSolver
    }

    /// Solves from `entrance` to `exit` without an observer attached.
    ///
    /// Cells visited by the search keep their exploration marks; call
    /// [`Grid::reset_exploration`] before solving the same grid again.
    ///
    /// # Panics
    ///
    /// Panics if `entrance` or `exit` is out of bounds.
    #[must_use]
    pub fn solve(&self, grid: &mut Grid, entrance: Position, exit: Position) -> SolveOutcome {
        self.solve_into(grid, entrance, exit, &mut NoopObserver)
    }

    /// Solves from `entrance` to `exit`, reporting each step to `observer`.
    ///
    /// The observer receives a forward
    /// [`move_attempted`](MazeObserver::move_attempted) for every step taken
    /// and an undo notification for every step retracted from a dead end.
    /// Forward steps that are never retracted make up the returned path, in
    /// order. Notifications are informational only; results are identical
    /// with a [`NoopObserver`].
    ///
    /// # Panics
    ///
    /// Panics if `entrance` or `exit` is out of bounds.
    #[must_use]
    pub fn solve_into(
        &self,
        grid: &mut Grid,
        entrance: Position,
        exit: Position,
        observer: &mut dyn MazeObserver,
    ) -> SolveOutcome {
        assert!(
            grid.contains(entrance) && grid.contains(exit),
            "entrance {entrance} and exit {exit} must lie on the grid"
        );

        grid.mark_explored(entrance);
        if entrance == exit {
            return SolveOutcome::Solved(Path::new(vec![entrance]));
        }

        let mut stack = vec![Frame::enter(grid, entrance)];
        while !stack.is_empty() {
            let top = stack.len() - 1;
            let current = stack[top].pos;

            let mut step = None;
            while stack[top].next < stack[top].candidates.len() {
                let candidate = stack[top].candidates[stack[top].next];
                stack[top].next += 1;
                if grid[current].has_wall(candidate.direction) {
                    continue;
                }
                // The snapshot may be stale; never walk into a cell another
                // branch has reached since.
                if grid[candidate.position].is_explored() {
                    continue;
                }
                step = Some(candidate.position);
                break;
            }

            match step {
                Some(next) => {
                    observer.move_attempted(current, next, false);
                    grid.mark_explored(next);
                    if next == exit {
                        let mut cells: Vec<_> = stack.iter().map(|frame| frame.pos).collect();
                        cells.push(next);
                        return SolveOutcome::Solved(Path::new(cells));
                    }
                    stack.push(Frame::enter(grid, next));
                }
                None => {
                    // Dead end on this search; retract the step that led here.
                    stack.pop();
                    if let Some(parent) = stack.last() {
                        observer.move_attempted(parent.pos, current, true);
                    }
                }
            }
        }
        SolveOutcome::Unsolvable
    }
}
