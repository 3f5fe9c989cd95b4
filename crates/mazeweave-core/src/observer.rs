//! The notification seam toward a rendering collaborator.

use crate::Position;

/// Callbacks through which a rendering collaborator observes maze activity.
///
/// The generator and solver report state changes through this trait so a
/// collaborator can redraw or animate. Both hooks have no-op default bodies:
/// the core computes the same maze and path whether or not anything is
/// listening, and observers receive coordinates only, never handles into the
/// grid.
///
/// Notifications are synchronous and best-effort; an observer must not be
/// relied on for correctness.
///
/// # Examples
///
/// ```
/// use mazeweave_core::{MazeObserver, Position};
///
/// #[derive(Debug, Default)]
/// struct WallCounter {
///     changes: usize,
/// }
///
/// impl MazeObserver for WallCounter {
///     fn walls_changed(&mut self, _pos: Position) {
///         self.changes += 1;
///     }
/// }
/// ```
pub trait MazeObserver {
    /// Called after any wall mutation on the cell at `pos`.
    fn walls_changed(&mut self, pos: Position) {
        let _ = pos;
    }

    /// Called on each solver step between adjacent cells.
    ///
    /// `undo` is `false` for a forward step and `true` when the step is
    /// retracted because the subtree behind it was a dead end.
    fn move_attempted(&mut self, from: Position, to: Position, undo: bool) {
        let _ = (from, to, undo);
    }
}

/// An observer that ignores every notification.
///
/// Used wherever an API requires an observer but the caller has no
/// collaborator attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MazeObserver for NoopObserver {}
