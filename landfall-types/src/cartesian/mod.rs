//! Types and functions on geometries in cartesian (projected or screen) coordinates.

mod rect;
mod size;

pub use rect::Rect;
pub use size::Size;

/// 2d point in cartesian coordinates.
pub type Point2d = nalgebra::Point2<f64>;
