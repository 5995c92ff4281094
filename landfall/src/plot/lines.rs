//! Lines and polylines given as lists of `(lat, lon)` tuples.

use std::fmt::Debug;
use std::hash::Hash;

use landfall_types::geo::GeoPoint2d;

use crate::error::LandfallError;
use crate::plot::{finish, flip, prepare, PlotOptions};
use crate::primitives::Line;
use crate::render::RenderedImage;
use crate::style::ColorStyle;
use crate::{Color, Context};

/// Line width in pixels used when nothing else is specified.
pub const DEFAULT_LINE_WIDTH: u32 = 2;

/// Converts `(lat, lon)` tuples into geographic points.
pub fn create_line_points(line: &[(f64, f64)]) -> Vec<GeoPoint2d> {
    line.iter().copied().map(GeoPoint2d::from).collect()
}

/// Swaps `(lat, lon)` and `(lon, lat)` order of the coordinates.
pub fn flip_line_coords(line: &[(f64, f64)]) -> Vec<(f64, f64)> {
    flip(line)
}

/// Adds a line. If `flip_coords` is set, the coordinates are read as `(lon, lat)`.
pub fn add_line(
    context: &mut Context,
    line: &[(f64, f64)],
    color: Color,
    width: u32,
    flip_coords: bool,
) {
    let points = if flip_coords {
        create_line_points(&flip_line_coords(line))
    } else {
        create_line_points(line)
    };

    context.add_object(Line {
        points,
        color,
        width,
    });
}

/// Adds lines colored according to the `style`. If `flip_coords` is set, the coordinates are
/// read as `(lon, lat)`.
pub fn add_lines<K>(
    context: &mut Context,
    lines: &[Vec<(f64, f64)>],
    style: &ColorStyle<K>,
    width: u32,
    flip_coords: bool,
) -> Result<(), LandfallError>
where
    K: Hash + Eq + Clone + Debug,
{
    let colors = style.resolve(lines.len())?;
    for (line, color) in lines.iter().zip(colors) {
        add_line(context, line, color, width, flip_coords);
    }

    Ok(())
}

/// Plots a single line.
pub fn plot_line(
    context: &mut Context,
    line: &[(f64, f64)],
    color: Color,
    width: u32,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    prepare(context, options);
    add_line(context, line, color, width, options.flip_coords);
    finish(context, options)
}

/// Plots lines colored according to the `style`.
pub fn plot_lines<K>(
    context: &mut Context,
    lines: &[Vec<(f64, f64)>],
    style: &ColorStyle<K>,
    width: u32,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError>
where
    K: Hash + Eq + Clone + Debug,
{
    prepare(context, options);
    add_lines(context, lines, style, width, options.flip_coords)?;
    finish(context, options)
}
