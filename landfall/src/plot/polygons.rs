//! Polygons given as rings of `(lat, lon)` tuples.

use std::fmt::Debug;
use std::hash::Hash;

use landfall_types::geo::GeoPoint2d;

use crate::error::LandfallError;
use crate::plot::{finish, flip, prepare, PlotOptions};
use crate::primitives::Area;
use crate::render::RenderedImage;
use crate::style::{ColorStyle, FillStyle};
use crate::{Color, Context};

/// Converts `(lat, lon)` tuples into geographic points.
pub fn create_polygon_points(polygon: &[(f64, f64)]) -> Vec<GeoPoint2d> {
    polygon.iter().copied().map(GeoPoint2d::from).collect()
}

/// Swaps `(lat, lon)` and `(lon, lat)` order of the coordinates.
pub fn flip_polygon_coords(polygon: &[(f64, f64)]) -> Vec<(f64, f64)> {
    flip(polygon)
}

/// Adds a polygon. If `flip_coords` is set, the coordinates are read as `(lon, lat)`.
pub fn add_polygon(
    context: &mut Context,
    polygon: &[(f64, f64)],
    fill_color: Color,
    width: u32,
    color: Color,
    flip_coords: bool,
) {
    let points = if flip_coords {
        create_polygon_points(&flip_polygon_coords(polygon))
    } else {
        create_polygon_points(polygon)
    };

    context.add_object(Area {
        points,
        color,
        fill_color,
        width,
    });
}

/// Adds polygons with outline colors resolved from `style` and fills from `fill`. If
/// `flip_coords` is set, the coordinates are read as `(lon, lat)`.
pub fn add_polygons<K>(
    context: &mut Context,
    polygons: &[Vec<(f64, f64)>],
    style: &ColorStyle<K>,
    fill: &FillStyle<K>,
    width: u32,
    flip_coords: bool,
) -> Result<(), LandfallError>
where
    K: Hash + Eq + Clone + Debug,
{
    let count = polygons.len();
    let colors = style.resolve(count)?;
    let fill_colors = fill.resolve(count, &colors, style.ids())?;

    for ((polygon, color), fill_color) in polygons.iter().zip(colors).zip(fill_colors) {
        add_polygon(context, polygon, fill_color, width, color, flip_coords);
    }

    Ok(())
}

/// Plots a single polygon.
pub fn plot_polygon(
    context: &mut Context,
    polygon: &[(f64, f64)],
    fill_color: Color,
    color: Color,
    width: u32,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    prepare(context, options);
    add_polygon(context, polygon, fill_color, width, color, options.flip_coords);
    finish(context, options)
}

/// Plots polygons with outline colors resolved from `style` and fills from `fill`.
pub fn plot_polygons<K>(
    context: &mut Context,
    polygons: &[Vec<(f64, f64)>],
    style: &ColorStyle<K>,
    fill: &FillStyle<K>,
    width: u32,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError>
where
    K: Hash + Eq + Clone + Debug,
{
    prepare(context, options);
    add_polygons(context, polygons, style, fill, width, options.flip_coords)?;
    finish(context, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::primitives::Drawable;
    use crate::render::test_utils::RecordingRenderer;
    use landfall_types::latlon;

    fn areas(context: &Context) -> Vec<&Area> {
        context
            .objects()
            .iter()
            .filter_map(|o| match o {
                Drawable::Area(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    fn triangle(lat: f64, lon: f64) -> Vec<(f64, f64)> {
        vec![(lat, lon), (lat + 0.1, lon), (lat, lon + 0.1), (lat, lon)]
    }

    #[test]
    fn default_styles() {
        let mut context = Context::new();
        context
            .add_polygons(
                &[triangle(10.0, 10.0)],
                &ColorStyle::<String>::default(),
                &FillStyle::default(),
                2,
                false,
            )
            .unwrap();

        let area = areas(&context)[0];
        assert_eq!(area.color, Color::RED);
        assert_eq!(area.fill_color, Color::TRANSPARENT_RED);
        assert_eq!(area.width, 2);
        assert_eq!(area.points[1], latlon!(10.1, 10.0));
    }

    #[test]
    fn flipped_polygon_is_flipped_once() {
        let mut context = Context::new();
        context.add_polygon(
            &[(10.0, 20.0), (11.0, 20.0), (10.0, 21.0)],
            Color::TRANSPARENT_RED,
            2,
            Color::RED,
            true,
        );

        assert_eq!(areas(&context)[0].points[0], latlon!(20.0, 10.0));
    }

    #[test]
    fn fill_follows_border_ids() {
        let mut context = Context::new();
        let style = ColorStyle::new("red")
            .with_ids(["x", "y", "x"].map(String::from))
            .with_id_colors(Palette::DISTINCT);
        let fill = FillStyle::default().with_fill_transparency(60);

        add_polygons(
            &mut context,
            &[triangle(0.0, 0.0), triangle(1.0, 1.0), triangle(2.0, 2.0)],
            &style,
            &fill,
            2,
            false,
        )
        .unwrap();

        let areas = areas(&context);
        assert_eq!(areas[0].color, areas[2].color);
        assert_eq!(areas[0].fill_color, areas[0].color.with_alpha(60));
        assert_eq!(areas[1].fill_color, areas[1].color.with_alpha(60));
    }

    #[test]
    fn id_fill_colors() {
        let mut context = Context::new();
        let style = ColorStyle::new("black").with_ids(["x", "y"].map(String::from));
        let fill = FillStyle::default()
            .with_id_fill_colors([("x".to_string(), "green"), ("y".to_string(), "blue")]);

        add_polygons(
            &mut context,
            &[triangle(0.0, 0.0), triangle(1.0, 1.0)],
            &style,
            &fill,
            2,
            false,
        )
        .unwrap();

        let areas = areas(&context);
        assert_eq!(areas[0].color, Color::BLACK);
        assert_eq!(areas[0].fill_color, Color::GREEN);
        assert_eq!(areas[1].fill_color, Color::BLUE);
    }

    #[test]
    fn plot_single_polygon() {
        let renderer = RecordingRenderer::default();
        let mut context = Context::new().with_renderer(renderer.clone());
        plot_polygon(
            &mut context,
            &triangle(45.0, 7.0),
            Color::TRANSPARENT_RED,
            Color::RED,
            2,
            &PlotOptions::default().with_window_size(300, 200),
        )
        .unwrap();

        let call = renderer.last_call().unwrap();
        assert_eq!(call.objects, 1);
        assert_eq!(call.view.size().width(), 300.0);
    }

    #[test]
    fn plot_many_polygons() {
        let mut context = Context::new().with_renderer(RecordingRenderer::default());
        let image = plot_polygons(
            &mut context,
            &[triangle(45.0, 7.0), triangle(45.2, 7.2)],
            &ColorStyle::<String>::default().with_colors(Palette::Random { seed: Some(1) }),
            &FillStyle::default().with_fill_same(true),
            3,
            &PlotOptions::default(),
        )
        .unwrap();

        assert_eq!(image.width(), 500);
        let areas = areas(&context);
        assert!(areas.iter().all(|a| a.color == a.fill_color && a.width == 3));
    }
}
