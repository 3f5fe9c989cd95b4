//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::RngExt as _;

/// A seed for reproducible maze generation.
///
/// A seed fully determines the carved maze for given dimensions, which is
/// what makes generated mazes testable and shareable: print the seed, feed
/// it back in, get the identical maze.
///
/// Seeds display as 16 hex digits and parse back from the same form.
///
/// # Examples
///
/// ```
/// use mazeweave_generator::MazeSeed;
///
/// let seed = MazeSeed::new(42);
/// assert_eq!(seed.to_string(), "000000000000002a");
/// assert_eq!(seed.to_string().parse::<MazeSeed>()?, seed);
/// # Ok::<(), mazeweave_generator::ParseMazeSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeSeed(u64);

impl MazeSeed {
    /// Creates a seed from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Display for MazeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Error returned when parsing a [`MazeSeed`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
#[display("invalid maze seed: {_0}")]
pub struct ParseMazeSeedError(#[error(source)] std::num::ParseIntError);

impl FromStr for MazeSeed {
    type Err = ParseMazeSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(u64::from_str_radix(s, 16)?))
    }
}
