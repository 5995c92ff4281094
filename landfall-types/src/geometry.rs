use std::fmt::{Display, Formatter};

/// Polygon with one outer contour and any number of holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<P> {
    /// Outer boundary.
    pub outer_contour: Vec<P>,
    /// Holes.
    pub inner_contours: Vec<Vec<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_contour: Vec<P>, inner_contours: Vec<Vec<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }

    /// Iterates over all rings of the polygon, outer contour first.
    pub fn iter_contours(&self) -> impl Iterator<Item = &Vec<P>> {
        std::iter::once(&self.outer_contour).chain(self.inner_contours.iter())
    }

    fn map<Q>(self, f: &mut impl FnMut(P) -> Q) -> Polygon<Q> {
        Polygon {
            outer_contour: self.outer_contour.into_iter().map(&mut *f).collect(),
            inner_contours: self
                .inner_contours
                .into_iter()
                .map(|c| c.into_iter().map(&mut *f).collect())
                .collect(),
        }
    }
}

/// Geometry that can be plotted on a map.
///
/// All input representations supported by `landfall` are converted into this enum. Geometry
/// collections are intentionally not representable.
#[derive(Debug, Clone, PartialEq)]
pub enum Geom<P> {
    /// Single point.
    Point(P),
    /// Set of points.
    MultiPoint(Vec<P>),
    /// Line string.
    Contour(Vec<P>),
    /// Set of line strings.
    MultiContour(Vec<Vec<P>>),
    /// Polygon.
    Polygon(Polygon<P>),
    /// Set of polygons.
    MultiPolygon(Vec<Polygon<P>>),
}

impl<P> Geom<P> {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(_) => GeometryKind::Point,
            Geom::MultiPoint(_) => GeometryKind::MultiPoint,
            Geom::Contour(_) => GeometryKind::LineString,
            Geom::MultiContour(_) => GeometryKind::MultiLineString,
            Geom::Polygon(_) => GeometryKind::Polygon,
            Geom::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// Converts every point of the geometry with the given function.
    pub fn map_points<Q>(self, mut f: impl FnMut(P) -> Q) -> Geom<Q> {
        match self {
            Geom::Point(p) => Geom::Point(f(p)),
            Geom::MultiPoint(points) => Geom::MultiPoint(points.into_iter().map(f).collect()),
            Geom::Contour(points) => Geom::Contour(points.into_iter().map(f).collect()),
            Geom::MultiContour(lines) => Geom::MultiContour(
                lines
                    .into_iter()
                    .map(|l| l.into_iter().map(&mut f).collect())
                    .collect(),
            ),
            Geom::Polygon(polygon) => Geom::Polygon(polygon.map(&mut f)),
            Geom::MultiPolygon(polygons) => {
                Geom::MultiPolygon(polygons.into_iter().map(|p| p.map(&mut f)).collect())
            }
        }
    }
}

/// Names of the geometry kinds, as used by GeoJSON.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// `Point`
    Point,
    /// `MultiPoint`
    MultiPoint,
    /// `LineString`
    LineString,
    /// `MultiLineString`
    MultiLineString,
    /// `Polygon`
    Polygon,
    /// `MultiPolygon`
    MultiPolygon,
}

impl GeometryKind {
    /// GeoJSON name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
