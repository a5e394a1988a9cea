//! Errors raised by the search engine and its helpers.

use std::fmt;

use mazeviz_core::Point;

/// Errors that can occur while searching or reconstructing a path.
///
/// Neither variant is reachable through a well-formed search run; both
/// guard internal invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// `pop` was called on an empty [`MinHeap`](crate::MinHeap) or frontier.
    EmptyQueue,
    /// The predecessor chain broke off or looped at the given cell before
    /// reaching the start.
    CorruptPredecessorMap(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQueue => f.write_str("pop from an empty queue"),
            Self::CorruptPredecessorMap(p) => {
                write!(f, "predecessor chain does not lead back to the start (broken at {p})")
            }
        }
    }
}

impl std::error::Error for PathError {}
