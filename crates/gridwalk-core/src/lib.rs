//! **gridwalk-core**: geometry primitives used across the *gridwalk*
//! crates: integer [`Point`]s and half-open rectangular [`Range`]s.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
