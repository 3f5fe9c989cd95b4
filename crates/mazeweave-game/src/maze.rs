//! The maze session type.

use mazeweave_core::{Grid, GridError, MazeObserver, NoopObserver, Position};
use mazeweave_generator::{CarvedMaze, MazeGenerator, MazeSeed};
use mazeweave_solver::{MazeSolver, Path, SolveOutcome};

/// Errors reported by a [`Maze`] session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum MazeError {
    /// Generation was rejected, for example because of zero dimensions.
    #[display("maze could not be generated: {_0}")]
    #[from]
    Grid(#[error(source)] GridError),
    /// A generated maze had no entrance-to-exit path.
    ///
    /// Generation guarantees a path, so this indicates corrupted grid state
    /// rather than a legitimately pathless maze. `walls_symmetric` records
    /// whether the wall-symmetry invariant still held when the solve failed,
    /// to narrow down the corruption.
    #[display(
        "generated {rows}x{cols} maze has no entrance-to-exit path \
         (walls symmetric: {walls_symmetric})"
    )]
    Inconsistent {
        /// Row count of the failing maze.
        rows: usize,
        /// Column count of the failing maze.
        cols: usize,
        /// Whether the wall-symmetry invariant still held.
        walls_symmetric: bool,
    },
}

/// A generated maze and its solve state.
///
/// The lifecycle is fixed: [`generate`](Self::generate) carves the maze and
/// breaks the entrance and exit boundary walls, [`solve`](Self::solve)
/// discovers the single path between them, and afterwards the maze is
/// read-only. The solved path is cached; solving again returns the same
/// path without re-searching.
///
/// A rendering collaborator can watch either phase through the `_observed`
/// variants; the plain methods run silently.
///
/// # Examples
///
/// ```
/// use mazeweave_game::Maze;
/// use mazeweave_generator::MazeSeed;
///
/// // Same seed, same maze, same path.
/// let mut first = Maze::generate(6, 9, Some(MazeSeed::new(7)))?;
/// let mut second = Maze::generate(6, 9, Some(MazeSeed::new(7)))?;
/// assert_eq!(first.solve()?, second.solve()?);
/// # Ok::<(), mazeweave_game::MazeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    carved: CarvedMaze,
    path: Option<Path>,
}

impl Maze {
    /// Generates a maze, seeding the carver from `seed` when given.
    ///
    /// With `None` a fresh random seed is drawn; either way the seed in
    /// effect is available from [`seed`](Self::seed) afterwards for
    /// reproduction.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Grid`] if either dimension is zero.
    pub fn generate(rows: usize, cols: usize, seed: Option<MazeSeed>) -> Result<Self, MazeError> {
        Self::generate_observed(rows, cols, seed, &mut NoopObserver)
    }

    /// Generates a maze, reporting each wall change to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Grid`] if either dimension is zero.
    pub fn generate_observed(
        rows: usize,
        cols: usize,
        seed: Option<MazeSeed>,
        observer: &mut dyn MazeObserver,
    ) -> Result<Self, MazeError> {
        let seed = seed.unwrap_or_else(MazeSeed::random);
        let mut carved = MazeGenerator::new().generate_into(rows, cols, seed, observer)?;
        // Generation and solving keep separate phase flags, but the solve
        // phase still starts from a clean exploration slate.
        carved.grid.reset_exploration();
        log::debug!("generated {rows}x{cols} maze with seed {seed}");
        Ok(Self { carved, path: None })
    }

    /// Solves the maze from entrance to exit.
    ///
    /// The first call runs the depth-first search; later calls return the
    /// cached path.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Inconsistent`] if no path exists. This cannot
    /// happen for an intact generated maze and signals corrupted wall or
    /// exploration state.
    pub fn solve(&mut self) -> Result<&Path, MazeError> {
        self.solve_observed(&mut NoopObserver)
    }

    /// Solves the maze, reporting each step and retraction to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Inconsistent`] if no path exists; see
    /// [`solve`](Self::solve).
    #[allow(clippy::missing_panics_doc)]
    pub fn solve_observed(
        &mut self,
        observer: &mut dyn MazeObserver,
    ) -> Result<&Path, MazeError> {
        if self.path.is_none() {
            let entrance = self.carved.entrance();
            let exit = self.carved.exit();
            self.carved.grid.reset_exploration();
            log::debug!("solving maze from {entrance} to {exit}");
            match MazeSolver::new().solve_into(&mut self.carved.grid, entrance, exit, observer) {
                SolveOutcome::Solved(path) => {
                    log::debug!("solved: {} cells", path.len());
                    self.path = Some(path);
                }
                SolveOutcome::Unsolvable => {
                    return Err(MazeError::Inconsistent {
                        rows: self.carved.grid.rows(),
                        cols: self.carved.grid.cols(),
                        walls_symmetric: self.carved.grid.walls_symmetric(),
                    });
                }
            }
        }
        Ok(self.path.as_ref().expect("path cached above"))
    }

    /// Returns the carved grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.carved.grid
    }

    /// Returns the seed that produced this maze.
    #[must_use]
    pub fn seed(&self) -> MazeSeed {
        self.carved.seed
    }

    /// Returns the entrance cell, the top-left corner.
    #[must_use]
    pub fn entrance(&self) -> Position {
        self.carved.entrance()
    }

    /// Returns the exit cell, the bottom-right corner.
    #[must_use]
    pub fn exit(&self) -> Position {
        self.carved.exit()
    }

    /// Returns the solved path, if [`solve`](Self::solve) has run.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }
}
