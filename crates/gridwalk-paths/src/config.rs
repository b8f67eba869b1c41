/// Order of the cells in a returned path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOrder {
    /// First step first, goal last.
    #[default]
    StartToGoal,
    /// Goal first, walking back towards the start.
    GoalToStart,
}

/// What to do when start and end are the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SameEndpoints {
    /// Return the single cell as a zero-length path.
    #[default]
    ZeroLength,
    /// Fail with [`InvalidInput::SameEndpoints`](crate::InvalidInput::SameEndpoints).
    Reject,
}

/// Output conventions for [`PathFinder`](crate::PathFinder).
///
/// The default yields paths in start-to-goal order that exclude the start
/// and end with the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub order: PathOrder,
    /// Include the start cell in returned paths.
    pub include_start: bool,
    pub same_endpoints: SameEndpoints,
}
