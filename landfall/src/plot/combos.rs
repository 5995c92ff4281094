//! Plots combining several kinds of objects.

use crate::error::LandfallError;
use crate::plot::points::add_point;
use crate::plot::polygons::add_polygon;
use crate::plot::{finish, prepare, PlotOptions};
use crate::render::RenderedImage;
use crate::{Color, Context};

/// Plots points and polygons on one map.
///
/// Points are drawn over the polygons with the outline `color`. `flip_coords` in the `options`
/// only applies to the polygons.
#[allow(clippy::too_many_arguments)]
pub fn plot_points_and_polygons(
    context: &mut Context,
    points: &[(f64, f64)],
    polygons: &[Vec<(f64, f64)>],
    point_size: u32,
    fill_color: Color,
    color: Color,
    width: u32,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    prepare(context, options);

    for polygon in polygons {
        add_polygon(context, polygon, fill_color, width, color, options.flip_coords);
    }

    for &(lat, lon) in points {
        add_point(context, lat, lon, color, point_size);
    }

    finish(context, options)
}
