//! Plotting of GeoJSON documents.
//!
//! Supported documents are geometry objects (except geometry collections), features and feature
//! collections. Features with a null geometry and geometry collections inside features are
//! skipped.
//!
//! Styling of every feature is read from its properties:
//! * color from `stroke`, `marker-color`, `color` or `fill` (first present key wins), `blue` by
//!   default;
//! * line width from `stroke-width`, `width` or `line-width`, 2 by default;
//! * point size from `marker-size`, `size` or `point-size`, 10 by default.
//!
//! Width and size keys with values that are not integers are skipped.

use std::path::Path;

use ::geojson::{Feature, GeoJson, Geometry, JsonObject, Value as GeometryValue};
use landfall_types::error::LandfallTypesError;
use landfall_types::geo::GeoPoint2d;
use landfall_types::Geom;
use serde_json::Value;

use crate::error::LandfallError;
use crate::geometry::{add_geom, GeomStyle};
use crate::plot::{finish, prepare, PlotOptions};
use crate::render::RenderedImage;
use crate::{Color, Context};

const SUPPORTED_TYPES: [&str; 8] = [
    "Feature",
    "FeatureCollection",
    "Point",
    "LineString",
    "Polygon",
    "MultiPoint",
    "MultiLineString",
    "MultiPolygon",
];

const COLOR_KEYS: [&str; 4] = ["stroke", "marker-color", "color", "fill"];
const WIDTH_KEYS: [&str; 3] = ["stroke-width", "width", "line-width"];
const SIZE_KEYS: [&str; 3] = ["marker-size", "size", "point-size"];

/// Default color of GeoJSON features.
pub const DEFAULT_GEOJSON_COLOR: &str = "blue";
/// Default line width of GeoJSON features.
pub const DEFAULT_GEOJSON_WIDTH: u32 = 2;
/// Default point size of GeoJSON features.
pub const DEFAULT_GEOJSON_SIZE: u32 = 10;

/// Geometry of a GeoJSON document with the properties of its feature.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonGeometry {
    /// The geometry.
    pub geometry: Geom<GeoPoint2d>,
    /// Properties of the feature. Empty for bare geometry objects.
    pub properties: JsonObject,
}

/// Parses a GeoJSON document and checks that its type is supported.
pub fn parse_geojson(data: &str) -> Result<Value, LandfallError> {
    let value: Value =
        serde_json::from_str(data).map_err(|e| LandfallError::InvalidJson(e.to_string()))?;
    validate_geojson(&value)?;

    Ok(value)
}

/// Checks that the value is a GeoJSON object of supported type.
pub fn validate_geojson(value: &Value) -> Result<(), LandfallError> {
    let geojson_type = value.get("type").ok_or(LandfallError::MissingGeoJsonType)?;
    match geojson_type.as_str() {
        Some(name) if SUPPORTED_TYPES.contains(&name) => Ok(()),
        Some(name) => Err(LandfallError::UnsupportedGeoJsonType(name.to_string())),
        None => Err(LandfallError::UnsupportedGeoJsonType(
            geojson_type.to_string(),
        )),
    }
}

/// Extracts all plottable geometries of a validated GeoJSON document.
///
/// Features with a null geometry and geometry collections are skipped. A feature without the
/// `geometry` member is not valid GeoJSON and fails the extraction.
pub fn extract_geometries(geojson: &Value) -> Result<Vec<GeoJsonGeometry>, LandfallError> {
    let geojson = GeoJson::from_json_value(geojson.clone()).map_err(LandfallTypesError::from)?;

    let features = match geojson {
        GeoJson::Geometry(geometry) => return Ok(convert(geometry, None)?.into_iter().collect()),
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::FeatureCollection(collection) => collection.features,
    };

    let mut geometries = Vec::with_capacity(features.len());
    for Feature {
        geometry,
        properties,
        ..
    } in features
    {
        if let Some(geometry) = geometry {
            geometries.extend(convert(geometry, properties)?);
        }
    }

    Ok(geometries)
}

fn convert(
    geometry: Geometry,
    properties: Option<JsonObject>,
) -> Result<Option<GeoJsonGeometry>, LandfallError> {
    if let GeometryValue::GeometryCollection(_) = geometry.value {
        log::debug!("Skipping geometry collection");
        return Ok(None);
    }

    Ok(Some(GeoJsonGeometry {
        geometry: Geom::try_from(&geometry)?,
        properties: properties.unwrap_or_default(),
    }))
}

/// Color of a feature, as written in its properties.
pub fn color_from_properties(properties: &JsonObject) -> String {
    COLOR_KEYS
        .iter()
        .find_map(|key| properties.get(*key))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| DEFAULT_GEOJSON_COLOR.to_string())
}

/// Line width of a feature.
pub fn width_from_properties(properties: &JsonObject) -> u32 {
    integer_property(properties, &WIDTH_KEYS).unwrap_or(DEFAULT_GEOJSON_WIDTH)
}

/// Point size of a feature.
pub fn size_from_properties(properties: &JsonObject) -> u32 {
    integer_property(properties, &SIZE_KEYS).unwrap_or(DEFAULT_GEOJSON_SIZE)
}

fn integer_property(properties: &JsonObject, keys: &[&str]) -> Option<u32> {
    keys.iter()
        .filter_map(|key| properties.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64))
                .and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
}

/// Style of a feature read from its properties.
pub fn style_from_properties(properties: &JsonObject) -> Result<GeomStyle, LandfallError> {
    Ok(GeomStyle::default()
        .with_color(Color::parse(&color_from_properties(properties))?)
        .with_width(width_from_properties(properties))
        .with_point_size(size_from_properties(properties)))
}

/// Plots a GeoJSON document given as a string.
pub fn plot_geojson(
    context: &mut Context,
    data: &str,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    let value: Value =
        serde_json::from_str(data).map_err(|e| LandfallError::InvalidJson(e.to_string()))?;
    plot_geojson_value(context, &value, options)
}

/// Plots a parsed GeoJSON document.
pub fn plot_geojson_value(
    context: &mut Context,
    geojson: &Value,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    prepare(context, options);

    validate_geojson(geojson)?;
    let geometries = extract_geometries(geojson)?;
    if geometries.is_empty() {
        return Err(LandfallError::NoGeometries);
    }

    let styled = geometries
        .iter()
        .map(|g| Ok((&g.geometry, style_from_properties(&g.properties)?)))
        .collect::<Result<Vec<_>, LandfallError>>()?;

    log::debug!("Plotting {} GeoJSON geometries", styled.len());

    for (geometry, style) in styled {
        add_geom(context, geometry, &style);
    }

    finish(context, options)
}

/// Reads a GeoJSON document from the file and plots it.
pub fn plot_geojson_file(
    context: &mut Context,
    path: impl AsRef<Path>,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LandfallError::FileNotFound(path.to_path_buf()),
        _ => LandfallError::FsIo(e),
    })?;

    plot_geojson(context, &data, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Drawable;
    use crate::render::test_utils::RecordingRenderer;
    use assert_matches::assert_matches;
    use landfall_types::latlon;
    use serde_json::json;

    fn context() -> Context {
        Context::new().with_renderer(RecordingRenderer::default())
    }

    fn plot(data: &str) -> Result<Context, LandfallError> {
        let mut context = context();
        plot_geojson(&mut context, data, &PlotOptions::default())?;
        Ok(context)
    }

    #[test]
    fn invalid_json() {
        assert_matches!(plot("{not json"), Err(LandfallError::InvalidJson(_)));
        assert_matches!(parse_geojson("[1, 2"), Err(LandfallError::InvalidJson(_)));
    }

    #[test]
    fn missing_type() {
        assert_matches!(
            plot(r#"{"coordinates": [1, 2]}"#),
            Err(LandfallError::MissingGeoJsonType)
        );
        assert_matches!(parse_geojson("[]"), Err(LandfallError::MissingGeoJsonType));
    }

    #[test]
    fn unsupported_type() {
        let err = plot(r#"{"type": "GeometryCollection", "geometries": []}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported GeoJSON type: GeometryCollection"
        );
        assert_matches!(
            parse_geojson(r#"{"type": "Topology"}"#),
            Err(LandfallError::UnsupportedGeoJsonType(name)) if name == "Topology"
        );
    }

    #[test]
    fn point_is_lon_lat() {
        let context = plot(r#"{"type": "Point", "coordinates": [-82.49, 27.88]}"#).unwrap();
        let objects = context.objects();
        assert_eq!(objects.len(), 1);
        assert_matches!(
            &objects[0],
            Drawable::Marker(m) if m.position == latlon!(27.88, -82.49)
                && m.color == Color::BLUE
                && m.size == 10
        );
    }

    #[test]
    fn short_position_fails() {
        assert_matches!(
            plot(r#"{"type": "Point", "coordinates": [1.0]}"#),
            Err(LandfallError::Geometry(LandfallTypesError::Conversion(_)))
        );
    }

    #[test]
    fn feature_properties_style_the_geometry() {
        let context = plot(
            r##"{
                "type": "Feature",
                "properties": {"stroke": "#00FF00", "color": "red", "stroke-width": "4"},
                "geometry": {"type": "LineString", "coordinates": [[10, 50], [11, 51]]}
            }"##,
        )
        .unwrap();

        assert_matches!(
            &context.objects()[0],
            Drawable::Line(l) if l.color == Color::GREEN
                && l.width == 4
                && l.points == vec![latlon!(50.0, 10.0), latlon!(51.0, 11.0)]
        );
    }

    #[test]
    fn feature_collection_skips_empty_features() {
        let context = plot(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature", "properties": {"marker-size": 3}, "geometry": {"type": "MultiPoint", "coordinates": [[10, 50], [11, 51]]}},
                    {"type": "Feature", "properties": {}, "geometry": null},
                    {"type": "Feature", "properties": null, "geometry": {"type": "GeometryCollection", "geometries": []}},
                    {"type": "Feature", "properties": {"fill": "yellow"}, "geometry": {"type": "MultiPolygon", "coordinates": [
                        [[[0, 0], [1, 0], [1, 1], [0, 0]], [[0.2, 0.2], [0.4, 0.2], [0.4, 0.4], [0.2, 0.2]]],
                        [[[5, 5], [6, 5], [6, 6], [5, 5]]]
                    ]}}
                ]
            }"#,
        )
        .unwrap();

        let objects = context.objects();
        assert_eq!(objects.len(), 5);
        assert_matches!(&objects[0], Drawable::Marker(m) if m.size == 3);
        assert_matches!(&objects[1], Drawable::Marker(m) if m.size == 3);
        for object in &objects[2..] {
            assert_matches!(
                object,
                Drawable::Area(a) if a.color == Color::YELLOW && a.fill_color == Color::TRANSPARENT_RED
            );
        }
    }

    #[test]
    fn nothing_to_plot() {
        assert_matches!(
            plot(r#"{"type": "FeatureCollection", "features": []}"#),
            Err(LandfallError::NoGeometries)
        );
        assert_matches!(
            plot(r#"{"type": "Feature", "properties": {}, "geometry": null}"#),
            Err(LandfallError::NoGeometries)
        );
    }

    #[test]
    fn property_defaults_and_fallbacks() {
        let properties = json!({"stroke-width": "wide", "width": 3.7, "size": -1, "point-size": " 12 "});
        let properties = properties.as_object().unwrap();

        assert_eq!(color_from_properties(properties), "blue");
        assert_eq!(width_from_properties(properties), 3);
        assert_eq!(size_from_properties(properties), 12);

        let empty = JsonObject::new();
        assert_eq!(width_from_properties(&empty), 2);
        assert_eq!(size_from_properties(&empty), 10);
    }

    #[test]
    fn invalid_color_property() {
        assert_matches!(
            plot(r#"{"type": "Feature", "properties": {"color": "not-a-color"}, "geometry": {"type": "Point", "coordinates": [1, 2]}}"#),
            Err(LandfallError::InvalidColor(_))
        );
    }

    #[test]
    fn invalid_feature_leaves_context_unchanged() {
        let mut context = context();
        context.add_point(1.0, 1.0, Color::RED, 5);

        let result = plot_geojson(
            &mut context,
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature", "properties": {"color": "red"}, "geometry": {"type": "Point", "coordinates": [10, 50]}},
                    {"type": "Feature", "properties": {"color": "nope"}, "geometry": {"type": "Point", "coordinates": [11, 51]}}
                ]
            }"#,
            &PlotOptions::default(),
        );

        assert_matches!(result, Err(LandfallError::InvalidColor(_)));
        assert_eq!(context.objects().len(), 1);
        assert_matches!(
            &context.objects()[0],
            Drawable::Marker(m) if m.color == Color::RED && m.size == 5
        );
    }

    #[test]
    fn feature_without_geometry_member_is_invalid() {
        assert_matches!(
            plot(r#"{"type": "Feature", "properties": {}}"#),
            Err(LandfallError::Geometry(LandfallTypesError::Conversion(_)))
        );
        assert_matches!(
            plot(r#"{"type": "FeatureCollection"}"#),
            Err(LandfallError::Geometry(LandfallTypesError::Conversion(_)))
        );
    }

    #[test]
    fn extract_from_bare_geometry() {
        let value = parse_geojson(r#"{"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}"#)
            .unwrap();
        let geometries = extract_geometries(&value).unwrap();

        assert_eq!(geometries.len(), 1);
        assert!(geometries[0].properties.is_empty());
        assert_eq!(geometries[0].geometry.kind().name(), "Polygon");
    }

    #[test]
    fn missing_file() {
        let mut context = context();
        let result = plot_geojson_file(
            &mut context,
            "/definitely/not/here.geojson",
            &PlotOptions::default(),
        );

        assert_matches!(result, Err(LandfallError::FileNotFound(path)) if path.ends_with("here.geojson"));
    }

    #[test]
    fn reads_file() {
        let path = std::env::temp_dir().join("landfall_reads_file.geojson");
        std::fs::write(&path, r#"{"type": "Point", "coordinates": [10, 50]}"#).unwrap();

        let mut context = context();
        plot_geojson_file(&mut context, &path, &PlotOptions::default()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(context.objects().len(), 1);
        assert_eq!(context.zoom(), Some(context.tile_provider().max_zoom()));
    }
}
