//! Drawable objects that can be added to a [`Context`](crate::Context).

use geo::HaversineDestination;
use landfall_types::cartesian::{Point2d, Rect};
use landfall_types::geo::{GeoPoint, GeoPoint2d, NewGeoPoint, Projection, WebMercator};

use crate::Color;

/// Number of vertices used to approximate a circle outline.
const CIRCLE_SEGMENTS: usize = 72;

/// Point marker drawn as a filled disc.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Position of the marker.
    pub position: GeoPoint2d,
    /// Color of the marker.
    pub color: Color,
    /// Diameter of the marker in pixels.
    pub size: u32,
}

/// Line string.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Vertices of the line.
    pub points: Vec<GeoPoint2d>,
    /// Color of the line.
    pub color: Color,
    /// Width of the line in pixels.
    pub width: u32,
}

/// Filled polygon ring with an outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    /// Vertices of the ring.
    pub points: Vec<GeoPoint2d>,
    /// Outline color.
    pub color: Color,
    /// Fill color.
    pub fill_color: Color,
    /// Outline width in pixels.
    pub width: u32,
}

/// Circle of a fixed radius on the ground.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Center of the circle.
    pub center: GeoPoint2d,
    /// Radius in meters.
    pub radius_m: f64,
    /// Outline color.
    pub color: Color,
    /// Fill color.
    pub fill_color: Color,
    /// Outline width in pixels.
    pub width: u32,
}

impl Circle {
    /// Approximates the circle with a closed polygon ring of geographic points.
    pub fn outline(&self) -> Vec<GeoPoint2d> {
        let center = geo::Point::new(self.center.lon(), self.center.lat());
        (0..=CIRCLE_SEGMENTS)
            .map(|i| {
                let bearing = 360.0 * i as f64 / CIRCLE_SEGMENTS as f64;
                let point = center.haversine_destination(bearing, self.radius_m);
                GeoPoint2d::latlon(point.y(), point.x())
            })
            .collect()
    }
}

/// Any object that can be drawn on a map.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// Point marker.
    Marker(Marker),
    /// Line string.
    Line(Line),
    /// Filled polygon ring.
    Area(Area),
    /// Circle.
    Circle(Circle),
}

impl Drawable {
    /// Bounding rectangle of the object in Web Mercator meters. `None` if the object has no
    /// points that can be projected.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Drawable::Marker(marker) => project_all(std::iter::once(&marker.position)),
            Drawable::Line(line) => project_all(line.points.iter()),
            Drawable::Area(area) => project_all(area.points.iter()),
            Drawable::Circle(circle) => project_all(circle.outline().iter()),
        }
    }

    /// Number of pixels the object extends beyond its geographic bounds in each direction.
    pub fn extra_pixel_bounds(&self) -> u32 {
        match self {
            Drawable::Marker(marker) => marker.size.div_ceil(2),
            Drawable::Line(Line { width, .. })
            | Drawable::Area(Area { width, .. })
            | Drawable::Circle(Circle { width, .. }) => width.div_ceil(2),
        }
    }
}

fn project_all<'a>(points: impl Iterator<Item = &'a GeoPoint2d>) -> Option<Rect> {
    let projection = WebMercator::<GeoPoint2d>::default();
    let projected: Vec<Point2d> = points.filter_map(|p| projection.project(p)).collect();
    Rect::from_points(projected.iter())
}

impl From<Marker> for Drawable {
    fn from(value: Marker) -> Self {
        Self::Marker(value)
    }
}

impl From<Line> for Drawable {
    fn from(value: Line) -> Self {
        Self::Line(value)
    }
}

impl From<Area> for Drawable {
    fn from(value: Area) -> Self {
        Self::Area(value)
    }
}

impl From<Circle> for Drawable {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}
