use gridwalk_core::Point;
use std::fmt;

/// Why a search request was rejected before it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    StartOutOfGrid(Point),
    EndOutOfGrid(Point),
    /// Start and end coincide and the finder is configured with
    /// [`SameEndpoints::Reject`](crate::SameEndpoints::Reject).
    SameEndpoints(Point),
}

/// Errors returned by [`PathFinder::search`](crate::PathFinder::search).
///
/// An unreachable goal is not an error: it yields an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    InvalidInput(InvalidInput),
}

impl From<InvalidInput> for SearchError {
    fn from(e: InvalidInput) -> Self {
        Self::InvalidInput(e)
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(InvalidInput::StartOutOfGrid(p)) => {
                write!(f, "search: start {p} is outside the grid")
            }
            Self::InvalidInput(InvalidInput::EndOutOfGrid(p)) => {
                write!(f, "search: end {p} is outside the grid")
            }
            Self::InvalidInput(InvalidInput::SameEndpoints(p)) => {
                write!(f, "search: start and end are both {p}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
