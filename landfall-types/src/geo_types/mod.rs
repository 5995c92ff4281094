//! Conversion of [`geo_types`] geometries into [`Geom`].
//!
//! `geo-types` stores geographic coordinates as `x = lon`, `y = lat`.

use ::geo_types::{Coord, Geometry, LineString};

use crate::error::LandfallTypesError;
use crate::geo::{GeoPoint2d, NewGeoPoint};
use crate::geometry::{Geom, Polygon};

impl TryFrom<&Geometry<f64>> for Geom<GeoPoint2d> {
    type Error = LandfallTypesError;

    fn try_from(geometry: &Geometry<f64>) -> Result<Self, Self::Error> {
        Ok(match geometry {
            Geometry::Point(p) => Geom::Point(convert_coord(&p.0)),
            Geometry::MultiPoint(mp) => {
                Geom::MultiPoint(mp.iter().map(|p| convert_coord(&p.0)).collect())
            }
            Geometry::LineString(ls) => Geom::Contour(convert_line_string(ls)),
            Geometry::MultiLineString(mls) => {
                Geom::MultiContour(mls.iter().map(convert_line_string).collect())
            }
            Geometry::Polygon(p) => Geom::Polygon(convert_polygon(p)),
            Geometry::MultiPolygon(mp) => {
                Geom::MultiPolygon(mp.iter().map(convert_polygon).collect())
            }
            other => return Err(LandfallTypesError::Unsupported(type_name(other).to_string())),
        })
    }
}

/// Returns true if the geometry has no coordinates to plot.
pub fn is_empty(geometry: &Geometry<f64>) -> bool {
    match geometry {
        Geometry::MultiPoint(mp) => mp.0.is_empty(),
        Geometry::LineString(ls) => ls.0.is_empty(),
        Geometry::MultiLineString(mls) => mls.iter().all(|ls| ls.0.is_empty()),
        Geometry::Polygon(p) => p.exterior().0.is_empty(),
        Geometry::MultiPolygon(mp) => mp.iter().all(|p| p.exterior().0.is_empty()),
        Geometry::GeometryCollection(gc) => gc.iter().all(is_empty),
        _ => false,
    }
}

/// Name of the geometry type, matching the GeoJSON naming where one exists.
pub fn type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

fn convert_coord(coord: &Coord<f64>) -> GeoPoint2d {
    GeoPoint2d::lonlat(coord.x, coord.y)
}

fn convert_line_string(line_string: &LineString<f64>) -> Vec<GeoPoint2d> {
    line_string.coords().map(convert_coord).collect()
}

fn convert_polygon(polygon: &::geo_types::Polygon<f64>) -> Polygon<GeoPoint2d> {
    Polygon::new(
        convert_line_string(polygon.exterior()),
        polygon.interiors().iter().map(convert_line_string).collect(),
    )
}
