use serde::{Deserialize, Serialize};

use crate::cartesian::Point2d;

/// Axis aligned rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum x.
    pub x_min: f64,
    /// Minimum y.
    pub y_min: f64,
    /// Maximum x.
    pub x_max: f64,
    /// Maximum y.
    pub y_max: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Rectangle of zero size at the given point.
    pub fn from_point(p: &Point2d) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Bounding rectangle of the points. Returns `None` for an empty iterator.
    pub fn from_points<'a>(mut points: impl Iterator<Item = &'a Point2d>) -> Option<Self> {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |rect, p| {
            rect.merge(Self::from_point(p))
        }))
    }

    /// Smallest rectangle containing all the given ones. Returns `None` for an empty iterator.
    pub fn merge_all(rects: impl IntoIterator<Item = Rect>) -> Option<Self> {
        rects.into_iter().reduce(|curr, rect| curr.merge(rect))
    }

    /// Returns true if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &Point2d) -> bool {
        self.x_min <= point.x
            && self.x_max >= point.x
            && self.y_min <= point.y
            && self.y_max >= point.y
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point2d {
        Point2d::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }
}
