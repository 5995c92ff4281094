//! Plotting of `geo-types` geometries and tables of features.

use ::geo_types::Geometry;
use landfall_types::geo::GeoPoint2d;
use landfall_types::geo_types::is_empty;
use landfall_types::Geom;

use crate::color::{convert_color, ColorLike};
use crate::error::LandfallError;
use crate::plot::data::{Column, DataTable};
use crate::plot::lines::DEFAULT_LINE_WIDTH;
use crate::plot::points::{DEFAULT_POINT_COLOR, DEFAULT_POINT_SIZE};
use crate::plot::{finish, prepare, PlotOptions};
use crate::primitives::{Area, Line, Marker};
use crate::render::RenderedImage;
use crate::{Color, Context};

/// Style of all parts of one geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeomStyle {
    /// Color of points, lines and polygon outlines.
    pub color: Color,
    /// Fill of polygons.
    pub fill_color: Color,
    /// Width of lines and polygon outlines in pixels.
    pub width: u32,
    /// Diameter of points in pixels.
    pub point_size: u32,
}

impl Default for GeomStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_POINT_COLOR,
            fill_color: Color::TRANSPARENT_RED,
            width: DEFAULT_LINE_WIDTH,
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

impl GeomStyle {
    /// Sets the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the polygon fill.
    pub fn with_fill_color(mut self, fill_color: Color) -> Self {
        self.fill_color = fill_color;
        self
    }

    /// Sets the line width.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Sets the point size.
    pub fn with_point_size(mut self, point_size: u32) -> Self {
        self.point_size = point_size;
        self
    }
}

/// Adds all parts of the geometry to the context.
///
/// Points become markers, line strings become lines, and every ring of a polygon (holes
/// included) becomes a separate filled area.
pub fn add_geom(context: &mut Context, geom: &Geom<GeoPoint2d>, style: &GeomStyle) {
    let add_marker = |context: &mut Context, position: &GeoPoint2d| {
        context.add_object(Marker {
            position: *position,
            color: style.color,
            size: style.point_size,
        })
    };
    let add_line = |context: &mut Context, points: &[GeoPoint2d]| {
        context.add_object(Line {
            points: points.to_vec(),
            color: style.color,
            width: style.width,
        })
    };
    let add_polygon = |context: &mut Context, polygon: &landfall_types::Polygon<GeoPoint2d>| {
        for ring in polygon.iter_contours() {
            context.add_object(Area {
                points: ring.clone(),
                color: style.color,
                fill_color: style.fill_color,
                width: style.width,
            });
        }
    };

    match geom {
        Geom::Point(point) => add_marker(context, point),
        Geom::MultiPoint(points) => points.iter().for_each(|p| add_marker(context, p)),
        Geom::Contour(points) => add_line(context, points),
        Geom::MultiContour(lines) => lines.iter().for_each(|l| add_line(context, l)),
        Geom::Polygon(polygon) => add_polygon(context, polygon),
        Geom::MultiPolygon(polygons) => polygons.iter().for_each(|p| add_polygon(context, p)),
    }
}

/// Plots a single geometry.
///
/// Geometry collections, lines, rectangles and triangles are not supported.
pub fn plot_geometry(
    context: &mut Context,
    geometry: &Geometry<f64>,
    style: &GeomStyle,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    prepare(context, options);
    add_geom(context, &Geom::try_from(geometry)?, style);
    finish(context, options)
}

/// Colors of a set of geometries.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryColors {
    /// The same color for all geometries.
    Single(ColorLike),
    /// Color per geometry. Geometries without an entry get the first color.
    List(Vec<ColorLike>),
}

impl GeometryColors {
    /// Color of the geometry with the given index.
    pub fn color_for(&self, index: usize) -> Option<&ColorLike> {
        match self {
            GeometryColors::Single(color) => Some(color),
            GeometryColors::List(colors) => colors.get(index).or_else(|| colors.first()),
        }
    }
}

impl From<&str> for GeometryColors {
    fn from(value: &str) -> Self {
        Self::Single(value.into())
    }
}

impl From<Color> for GeometryColors {
    fn from(value: Color) -> Self {
        Self::Single(value.into())
    }
}

impl<T: Into<ColorLike>> From<Vec<T>> for GeometryColors {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

fn geometry_color(colors: Option<&GeometryColors>, index: usize) -> Result<Color, LandfallError> {
    match colors.and_then(|c| c.color_for(index)) {
        Some(color) => convert_color(color.clone()),
        None => Ok(DEFAULT_POINT_COLOR),
    }
}

/// Plots geometries, each with one color from `colors` (blue by default).
pub fn plot_geometries(
    context: &mut Context,
    geometries: &[Geometry<f64>],
    colors: Option<&GeometryColors>,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    prepare(context, options);

    let styled = geometries
        .iter()
        .enumerate()
        .map(|(i, geometry)| {
            let style = GeomStyle::default().with_color(geometry_color(colors, i)?);
            Ok((Geom::try_from(geometry)?, style))
        })
        .collect::<Result<Vec<_>, LandfallError>>()?;

    for (geom, style) in &styled {
        add_geom(context, geom, style);
    }

    finish(context, options)
}

/// Table of features: one or more geometry columns plus attribute columns.
///
/// One of the geometry columns is active. It is plotted if no other column is requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTable {
    geometries: Vec<(String, Vec<Option<Geometry<f64>>>)>,
    active_geometry: Option<String>,
    data: DataTable,
}

impl FeatureTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a geometry column. The first added geometry column becomes active.
    pub fn with_geometry_column(
        mut self,
        name: impl Into<String>,
        geometries: Vec<Option<Geometry<f64>>>,
    ) -> Self {
        let name = name.into();
        if self.active_geometry.is_none() {
            self.active_geometry = Some(name.clone());
        }

        self.geometries.retain(|(existing, _)| *existing != name);
        self.geometries.push((name, geometries));
        self
    }

    /// Makes the given geometry column active.
    pub fn with_active_geometry(mut self, name: impl Into<String>) -> Self {
        self.active_geometry = Some(name.into());
        self
    }

    /// Adds an attribute column.
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Self {
        self.data.insert(name, column);
        self
    }

    /// Name of the active geometry column.
    pub fn active_geometry(&self) -> Option<&str> {
        self.active_geometry.as_deref()
    }

    /// Geometries of the column. Missing geometries are `None`.
    pub fn geometry_column(&self, name: &str) -> Option<&[Option<Geometry<f64>>]> {
        self.geometries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, geometries)| geometries.as_slice())
    }

    /// Attribute columns.
    pub fn data(&self) -> &DataTable {
        &self.data
    }
}

/// Columns of a [`FeatureTable`] to plot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureColumns {
    /// Geometry column. The active geometry column is used if not set.
    pub geometry: Option<String>,
    /// Attribute column with colors.
    pub color: Option<String>,
    /// Attribute column with point sizes.
    pub size: Option<String>,
}

impl FeatureColumns {
    /// Sets the geometry column.
    pub fn with_geometry(mut self, geometry: impl Into<String>) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    /// Sets the color column.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the point size column.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

fn column_colors(data: &DataTable, name: Option<&str>) -> Option<Vec<String>> {
    let name = name?;
    match data.column(name) {
        Ok(column) => Some(column.to_strings()),
        Err(_) => {
            log::warn!("Color column {name:?} not found, ignoring it");
            None
        }
    }
}

fn column_sizes(data: &DataTable, name: Option<&str>) -> Option<Vec<u32>> {
    let name = name?;
    let sizes = match data.column(name) {
        Ok(Column::Numbers(values)) => values
            .iter()
            .map(|v| (v.is_finite() && *v >= 0.0).then_some(*v as u32))
            .collect(),
        Ok(Column::Text(values)) => values.iter().map(|v| v.trim().parse().ok()).collect(),
        Err(_) => None,
    };

    if sizes.is_none() {
        log::warn!("Size column {name:?} is missing or has invalid values, ignoring it");
    }

    sizes
}

/// Plots geometries of a feature table.
///
/// Rows with missing or empty geometries are skipped. Row colors come from the color column,
/// then from `colors`, then default to blue. Point sizes come from the size column. Color and
/// size columns that do not exist or cannot be read are ignored.
pub fn plot_feature_table(
    context: &mut Context,
    table: &FeatureTable,
    columns: &FeatureColumns,
    colors: Option<&GeometryColors>,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    let geometry_column = columns
        .geometry
        .as_deref()
        .or(table.active_geometry())
        .ok_or(LandfallError::NoGeometryColumn)?;
    let geometries = table
        .geometry_column(geometry_column)
        .ok_or_else(|| LandfallError::MissingGeometryColumn(geometry_column.to_string()))?;

    let row_colors = column_colors(table.data(), columns.color.as_deref());
    let row_sizes = column_sizes(table.data(), columns.size.as_deref());

    prepare(context, options);

    let mut styled = Vec::with_capacity(geometries.len());
    for (i, geometry) in geometries.iter().enumerate() {
        let Some(geometry) = geometry.as_ref().filter(|g| !is_empty(g)) else {
            log::debug!("Skipping empty geometry in row {i}");
            continue;
        };

        let color = match row_colors.as_ref().and_then(|c| c.get(i)) {
            Some(color) => Color::parse(color)?,
            None => geometry_color(colors, i)?,
        };
        let point_size = row_sizes
            .as_ref()
            .and_then(|s| s.get(i).copied())
            .unwrap_or(DEFAULT_POINT_SIZE);

        let style = GeomStyle::default()
            .with_color(color)
            .with_point_size(point_size);
        styled.push((Geom::try_from(geometry)?, style));
    }

    for (geom, style) in &styled {
        add_geom(context, geom, style);
    }

    finish(context, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Drawable;
    use crate::render::test_utils::RecordingRenderer;
    use ::geo_types::{line_string, point, polygon, GeometryCollection, MultiPoint};
    use assert_matches::assert_matches;
    use landfall_types::error::LandfallTypesError;
    use landfall_types::latlon;

    fn context() -> Context {
        Context::new().with_renderer(RecordingRenderer::default())
    }

    fn square() -> Geometry<f64> {
        Geometry::Polygon(polygon!(
            exterior: [
                (x: 0.0, y: 0.0),
                (x: 1.0, y: 0.0),
                (x: 1.0, y: 1.0),
                (x: 0.0, y: 1.0)
            ],
            interiors: [
                [
                    (x: 0.2, y: 0.2),
                    (x: 0.4, y: 0.2),
                    (x: 0.4, y: 0.4)
                ]
            ]
        ))
    }

    #[test]
    fn polygon_rings_are_separate_areas() {
        let mut context = context();
        plot_geometry(
            &mut context,
            &square(),
            &GeomStyle::default(),
            &PlotOptions::default(),
        )
        .unwrap();

        let objects = context.objects();
        assert_eq!(objects.len(), 2);
        assert_matches!(&objects[0], Drawable::Area(area) if area.points[1] == latlon!(0.0, 1.0));
        assert_matches!(&objects[1], Drawable::Area(area) if area.points.len() == 4);
    }

    #[test]
    fn point_is_x_lon_y_lat() {
        let mut context = context();
        plot_geometry(
            &mut context,
            &Geometry::Point(point!(x: -82.49, y: 27.88)),
            &GeomStyle::default().with_point_size(4),
            &PlotOptions::default(),
        )
        .unwrap();

        assert_matches!(
            &context.objects()[0],
            Drawable::Marker(m) if m.position == latlon!(27.88, -82.49) && m.size == 4
        );
    }

    #[test]
    fn collection_is_unsupported() {
        let mut context = context();
        let result = plot_geometry(
            &mut context,
            &Geometry::GeometryCollection(GeometryCollection(vec![])),
            &GeomStyle::default(),
            &PlotOptions::default(),
        );

        assert_matches!(
            result,
            Err(LandfallError::Geometry(LandfallTypesError::Unsupported(_)))
        );
    }

    #[test]
    fn geometry_colors_fall_back_to_first() {
        let colors = GeometryColors::from(vec!["red", "green"]);
        assert_eq!(colors.color_for(1), Some(&ColorLike::from("green")));
        assert_eq!(colors.color_for(5), Some(&ColorLike::from("red")));
        assert_eq!(GeometryColors::List(vec![]).color_for(0), None);
        assert_eq!(
            GeometryColors::from("yellow").color_for(3),
            Some(&ColorLike::from("yellow"))
        );
    }

    #[test]
    fn plot_geometries_with_colors() {
        let mut context = context();
        let geometries = vec![
            Geometry::Point(point!(x: 10.0, y: 50.0)),
            Geometry::LineString(line_string![(x: 10.0, y: 50.0), (x: 11.0, y: 51.0)]),
            Geometry::MultiPoint(MultiPoint::from(vec![(10.5, 50.5), (10.6, 50.6)])),
        ];

        plot_geometries(
            &mut context,
            &geometries,
            Some(&GeometryColors::from(vec!["red", "green"])),
            &PlotOptions::default(),
        )
        .unwrap();

        let objects = context.objects();
        assert_eq!(objects.len(), 4);
        assert_matches!(&objects[0], Drawable::Marker(m) if m.color == Color::RED);
        assert_matches!(&objects[1], Drawable::Line(l) if l.color == Color::GREEN && l.width == 2);
        assert_matches!(&objects[2], Drawable::Marker(m) if m.color == Color::RED);
        assert_matches!(&objects[3], Drawable::Marker(m) if m.color == Color::RED);
    }

    #[test]
    fn failed_plot_geometries_adds_nothing() {
        let mut context = context();
        let valid = Geometry::Point(point!(x: 10.0, y: 50.0));

        let result = plot_geometries(
            &mut context,
            &[valid.clone(), valid.clone()],
            Some(&GeometryColors::from(vec!["red", "nope"])),
            &PlotOptions::default(),
        );
        assert_matches!(result, Err(LandfallError::InvalidColor(_)));

        let result = plot_geometries(
            &mut context,
            &[valid, Geometry::GeometryCollection(GeometryCollection(vec![]))],
            None,
            &PlotOptions::default(),
        );
        assert_matches!(
            result,
            Err(LandfallError::Geometry(LandfallTypesError::Unsupported(_)))
        );

        assert!(context.objects().is_empty());
    }

    #[test]
    fn plot_geometries_default_blue() {
        let mut context = context();
        plot_geometries(
            &mut context,
            &[Geometry::Point(point!(x: 10.0, y: 50.0))],
            None,
            &PlotOptions::default(),
        )
        .unwrap();

        assert_matches!(&context.objects()[0], Drawable::Marker(m) if m.color == Color::BLUE);
    }

    fn feature_table() -> FeatureTable {
        FeatureTable::new()
            .with_geometry_column(
                "geometry",
                vec![
                    Some(Geometry::Point(point!(x: 10.0, y: 50.0))),
                    None,
                    Some(Geometry::MultiPoint(MultiPoint(vec![]))),
                    Some(Geometry::Point(point!(x: 11.0, y: 51.0))),
                ],
            )
            .with_geometry_column("centroid", vec![Some(Geometry::Point(point!(x: 0.0, y: 0.0)))])
            .with_column("color", vec!["red", "green", "blue", "#FFFF00"])
            .with_column("size", vec![5.0, 6.0, 7.0, 8.0])
    }

    #[test]
    fn feature_table_with_columns() {
        let mut context = context();
        plot_feature_table(
            &mut context,
            &feature_table(),
            &FeatureColumns::default().with_color("color").with_size("size"),
            None,
            &PlotOptions::default(),
        )
        .unwrap();

        let objects = context.objects();
        assert_eq!(objects.len(), 2);
        assert_matches!(&objects[0], Drawable::Marker(m) if m.color == Color::RED && m.size == 5);
        assert_matches!(&objects[1], Drawable::Marker(m) if m.color == Color::YELLOW && m.size == 8);
    }

    #[test]
    fn feature_table_other_geometry_column() {
        let mut context = context();
        plot_feature_table(
            &mut context,
            &feature_table(),
            &FeatureColumns::default().with_geometry("centroid"),
            Some(&GeometryColors::from("purple")),
            &PlotOptions::default(),
        )
        .unwrap();

        let objects = context.objects();
        assert_eq!(objects.len(), 1);
        assert_matches!(&objects[0], Drawable::Marker(m) if m.color == Color::PURPLE && m.size == 10);
    }

    #[test]
    fn feature_table_missing_columns() {
        let mut context = context();
        assert_matches!(
            plot_feature_table(
                &mut context,
                &feature_table(),
                &FeatureColumns::default().with_geometry("shape"),
                None,
                &PlotOptions::default(),
            ),
            Err(LandfallError::MissingGeometryColumn(name)) if name == "shape"
        );

        assert_matches!(
            plot_feature_table(
                &mut context,
                &FeatureTable::new(),
                &FeatureColumns::default(),
                None,
                &PlotOptions::default(),
            ),
            Err(LandfallError::NoGeometryColumn)
        );
    }

    #[test]
    fn invalid_row_color_adds_nothing() {
        let table = feature_table().with_column("color", vec!["red", "green", "blue", "nope"]);
        let mut context = context();

        let result = plot_feature_table(
            &mut context,
            &table,
            &FeatureColumns::default().with_color("color"),
            None,
            &PlotOptions::default(),
        );

        assert_matches!(result, Err(LandfallError::InvalidColor(_)));
        assert!(context.objects().is_empty());
    }

    #[test]
    fn unknown_attribute_columns_are_ignored() {
        let mut context = context();
        plot_feature_table(
            &mut context,
            &feature_table(),
            &FeatureColumns::default().with_color("colour").with_size("color"),
            None,
            &PlotOptions::default(),
        )
        .unwrap();

        assert!(context
            .objects()
            .iter()
            .all(|o| matches!(o, Drawable::Marker(m) if m.color == Color::BLUE && m.size == 10)));
    }
}
