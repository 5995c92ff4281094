//! Point markers.

use std::fmt::Debug;
use std::hash::Hash;

use landfall_types::geo::{GeoPoint2d, NewGeoPoint};

use crate::error::LandfallError;
use crate::plot::{finish, prepare, PlotOptions};
use crate::primitives::Marker;
use crate::render::RenderedImage;
use crate::style::{check_len, ColorStyle};
use crate::{Color, Context};

/// Marker diameter in pixels used when nothing else is specified.
pub const DEFAULT_POINT_SIZE: u32 = 10;

/// Color of markers used when nothing else is specified.
pub const DEFAULT_POINT_COLOR: Color = Color::BLUE;

/// Adds a point marker.
pub fn add_point(context: &mut Context, lat: f64, lon: f64, color: Color, point_size: u32) {
    context.add_object(Marker {
        position: GeoPoint2d::latlon(lat, lon),
        color,
        size: point_size,
    });
}

/// Adds a marker for every `(lats[i], lons[i])` pair, colored according to the `style`.
pub fn add_points<K>(
    context: &mut Context,
    lats: &[f64],
    lons: &[f64],
    style: &ColorStyle<K>,
    point_size: u32,
) -> Result<(), LandfallError>
where
    K: Hash + Eq + Clone + Debug,
{
    check_len("longitudes", lats.len(), lons.len())?;
    let colors = style.resolve(lats.len())?;

    for ((lat, lon), color) in lats.iter().zip(lons).zip(colors) {
        add_point(context, *lat, *lon, color, point_size);
    }

    Ok(())
}

/// Splits `(lat, lon)` tuples into latitudes and longitudes.
pub fn points_to_lats_lons(points: &[(f64, f64)]) -> (Vec<f64>, Vec<f64>) {
    points.iter().copied().unzip()
}

/// Plots points given as separate latitude and longitude lists.
pub fn plot_points<K>(
    context: &mut Context,
    lats: &[f64],
    lons: &[f64],
    style: &ColorStyle<K>,
    point_size: u32,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError>
where
    K: Hash + Eq + Clone + Debug,
{
    prepare(context, options);

    let (lats, lons) = if options.flip_coords {
        (lons, lats)
    } else {
        (lats, lons)
    };
    add_points(context, lats, lons, style, point_size)?;

    finish(context, options)
}

/// Plots points given as `(lat, lon)` tuples.
pub fn plot_points_tuples<K>(
    context: &mut Context,
    points: &[(f64, f64)],
    style: &ColorStyle<K>,
    point_size: u32,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError>
where
    K: Hash + Eq + Clone + Debug,
{
    let (lats, lons) = points_to_lats_lons(points);
    plot_points(context, &lats, &lons, style, point_size, options)
}
