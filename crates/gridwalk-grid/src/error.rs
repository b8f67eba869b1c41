use gridwalk_core::{Point, Range};
use std::fmt;

/// Errors raised while building or indexing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A coordinate lookup fell outside the grid.
    OutOfRange { pos: Point, bounds: Range },
    /// Width or height was zero or negative.
    InvalidDimensions { cols: i32, rows: i32 },
    /// Obstacle probability outside `[0, 1]` (or NaN).
    InvalidProbability(f64),
    /// Layout lines have differing widths.
    InconsistentSize(String),
    /// A layout character other than `#` or `.` was found.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos, bounds } => {
                write!(f, "grid: position {pos} out of range {bounds}")
            }
            Self::InvalidDimensions { cols, rows } => {
                write!(f, "grid: invalid dimensions {cols}x{rows}")
            }
            Self::InvalidProbability(p) => {
                write!(f, "grid: obstacle probability {p} not in [0, 1]")
            }
            Self::InconsistentSize(s) => write!(f, "grid layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => write!(
                f,
                "grid layout contains invalid rune \u{201c}{ch}\u{201d} at ({}, {})",
                pos.x, pos.y
            ),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = GridError::OutOfRange {
            pos: Point::new(5, 0),
            bounds: Range::sized(3, 3),
        };
        assert_eq!(e.to_string(), "grid: position (5, 0) out of range [(0, 0)-(3, 3))");
        assert_eq!(
            GridError::InvalidDimensions { cols: 0, rows: 4 }.to_string(),
            "grid: invalid dimensions 0x4"
        );
    }
}
