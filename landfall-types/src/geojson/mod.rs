//! Conversion of GeoJSON geometries into [`Geom`].
//!
//! GeoJSON positions are `[lon, lat, ...]`. Extra dimensions are ignored.

use ::geojson::{LineStringType, PolygonType, Position, Value};

use crate::error::LandfallTypesError;
use crate::geo::{GeoPoint2d, NewGeoPoint};
use crate::geometry::{Geom, Polygon};

impl TryFrom<&Value> for Geom<GeoPoint2d> {
    type Error = LandfallTypesError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Point(p) => Ok(Geom::Point(convert_position(p)?)),
            Value::MultiPoint(points) => Ok(Geom::MultiPoint(convert_positions(points)?)),
            Value::LineString(points) => Ok(Geom::Contour(convert_contour(points)?)),
            Value::MultiLineString(lines) => Ok(Geom::MultiContour(
                lines
                    .iter()
                    .map(convert_contour)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Value::Polygon(polygon) => Ok(Geom::Polygon(convert_polygon(polygon)?)),
            Value::MultiPolygon(mp) => Ok(Geom::MultiPolygon(
                mp.iter()
                    .map(convert_polygon)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Value::GeometryCollection(_) => Err(LandfallTypesError::Unsupported(
                "GeometryCollection".to_string(),
            )),
        }
    }
}

impl TryFrom<&::geojson::Geometry> for Geom<GeoPoint2d> {
    type Error = LandfallTypesError;

    fn try_from(geometry: &::geojson::Geometry) -> Result<Self, Self::Error> {
        Self::try_from(&geometry.value)
    }
}

impl From<::geojson::Error> for LandfallTypesError {
    fn from(error: ::geojson::Error) -> Self {
        Self::Conversion(error.to_string())
    }
}

fn convert_position(position: &Position) -> Result<GeoPoint2d, LandfallTypesError> {
    if position.len() < 2 {
        Err(LandfallTypesError::Conversion(
            "point must contain at least 2 dimensions".to_string(),
        ))
    } else {
        Ok(GeoPoint2d::lonlat(position[0], position[1]))
    }
}

fn convert_positions(points: &[Position]) -> Result<Vec<GeoPoint2d>, LandfallTypesError> {
    points.iter().map(convert_position).collect()
}

fn convert_contour(line_string: &LineStringType) -> Result<Vec<GeoPoint2d>, LandfallTypesError> {
    if line_string.len() < 2 {
        return Err(LandfallTypesError::Conversion(
            "line must contain at least 2 points".to_string(),
        ));
    }

    convert_positions(line_string)
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon<GeoPoint2d>, LandfallTypesError> {
    let Some((outer, inner)) = polygon.split_first() else {
        return Err(LandfallTypesError::Conversion(
            "polygon must contain at least one ring".to_string(),
        ));
    };

    Ok(Polygon::new(
        convert_contour(outer)?,
        inner
            .iter()
            .map(convert_contour)
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::GeometryKind;
    use assert_matches::assert_matches;

    #[test]
    fn point_is_lon_lat() {
        let geom = Geom::<GeoPoint2d>::try_from(&Value::Point(vec![-82.49, 27.88])).unwrap();
        assert_matches!(geom, Geom::Point(p) if p.lat() == 27.88 && p.lon() == -82.49);
    }

    #[test]
    fn altitude_is_ignored() {
        let geom = Geom::<GeoPoint2d>::try_from(&Value::Point(vec![1.0, 2.0, 300.0])).unwrap();
        assert_eq!(geom, Geom::Point(GeoPoint2d::latlon(2.0, 1.0)));
    }

    #[test]
    fn short_position_is_rejected() {
        assert_matches!(
            Geom::<GeoPoint2d>::try_from(&Value::Point(vec![1.0])),
            Err(LandfallTypesError::Conversion(_))
        );
        assert_matches!(
            Geom::<GeoPoint2d>::try_from(&Value::Point(vec![])),
            Err(LandfallTypesError::Conversion(_))
        );
    }

    #[test]
    fn polygon_keeps_holes() {
        let ring = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        ];
        let geom = Geom::<GeoPoint2d>::try_from(&Value::Polygon(vec![ring.clone(), ring])).unwrap();

        assert_eq!(geom.kind(), GeometryKind::Polygon);
        assert_matches!(geom, Geom::Polygon(p) if p.inner_contours.len() == 1);
    }

    #[test]
    fn empty_polygon_is_rejected() {
        assert_matches!(
            Geom::<GeoPoint2d>::try_from(&Value::Polygon(vec![])),
            Err(LandfallTypesError::Conversion(_))
        );
    }

    #[test]
    fn geometry_collection_is_unsupported() {
        assert_matches!(
            Geom::<GeoPoint2d>::try_from(&Value::GeometryCollection(vec![])),
            Err(LandfallTypesError::Unsupported(name)) if name == "GeometryCollection"
        );
    }
}
