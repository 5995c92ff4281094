//! Circles with a radius given in ground units.

use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

use landfall_types::geo::GeoPoint2d;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LandfallError;
use crate::plot::{finish, prepare, PlotOptions};
use crate::primitives::Circle;
use crate::render::RenderedImage;
use crate::style::{check_len, ColorStyle, FillStyle};
use crate::{Color, Context};

/// Unit of circle radii.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RadiusUnit {
    /// Meters.
    #[default]
    Meters,
    /// Kilometers.
    Kilometers,
}

impl RadiusUnit {
    /// Converts the radius into meters.
    pub fn to_meters(&self, radius: f64) -> f64 {
        match self {
            RadiusUnit::Meters => radius,
            RadiusUnit::Kilometers => radius * 1000.0,
        }
    }
}

impl FromStr for RadiusUnit {
    type Err = LandfallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meters" => Ok(Self::Meters),
            "kilometers" => Ok(Self::Kilometers),
            other => Err(LandfallError::InvalidRadiusUnit(other.to_string())),
        }
    }
}

/// Adds a circle.
#[allow(clippy::too_many_arguments)]
pub fn add_circle(
    context: &mut Context,
    lat: f64,
    lon: f64,
    radius: f64,
    radius_unit: RadiusUnit,
    color: Color,
    fill_color: Color,
    width: u32,
) {
    context.add_object(Circle {
        center: GeoPoint2d::from((lat, lon)),
        radius_m: radius_unit.to_meters(radius),
        color,
        fill_color,
        width,
    });
}

/// Adds a circle for every center `(lats[i], lons[i])` with the radius `radii[i]`. Outline colors
/// are resolved from `style` and fills from `fill`.
#[allow(clippy::too_many_arguments)]
pub fn add_circles<K>(
    context: &mut Context,
    lats: &[f64],
    lons: &[f64],
    radii: &[f64],
    radius_unit: RadiusUnit,
    style: &ColorStyle<K>,
    fill: &FillStyle<K>,
    width: u32,
) -> Result<(), LandfallError>
where
    K: Hash + Eq + Clone + Debug,
{
    let count = lats.len();
    check_len("longitudes", count, lons.len())?;
    check_len("radii", count, radii.len())?;

    let colors = style.resolve(count)?;
    let fill_colors = fill.resolve(count, &colors, style.ids())?;

    for (i, (color, fill_color)) in colors.into_iter().zip(fill_colors).enumerate() {
        add_circle(
            context,
            lats[i],
            lons[i],
            radii[i],
            radius_unit,
            color,
            fill_color,
            width,
        );
    }

    Ok(())
}

/// Plots a single circle.
#[allow(clippy::too_many_arguments)]
pub fn plot_circle(
    context: &mut Context,
    lat: f64,
    lon: f64,
    radius: f64,
    radius_unit: RadiusUnit,
    color: Color,
    fill_color: Color,
    width: u32,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    prepare(context, options);

    let (lat, lon) = if options.flip_coords {
        (lon, lat)
    } else {
        (lat, lon)
    };
    add_circle(
        context,
        lat,
        lon,
        radius,
        radius_unit,
        color,
        fill_color,
        width,
    );

    finish(context, options)
}

/// Plots circles. See [`add_circles`].
#[allow(clippy::too_many_arguments)]
pub fn plot_circles<K>(
    context: &mut Context,
    lats: &[f64],
    lons: &[f64],
    radii: &[f64],
    radius_unit: RadiusUnit,
    style: &ColorStyle<K>,
    fill: &FillStyle<K>,
    width: u32,
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
    add_circles(
        context,
        lats,
        lons,
        radii,
        radius_unit,
        style,
        fill,
        width,
    )?;

    finish(context, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::primitives::Drawable;
    use crate::render::test_utils::RecordingRenderer;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use landfall_types::geo::GeoPoint;

    fn circles(context: &Context) -> Vec<&Circle> {
        context
            .objects()
            .iter()
            .filter_map(|o| match o {
                Drawable::Circle(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn radius_units() {
        assert_eq!("meters".parse::<RadiusUnit>().unwrap(), RadiusUnit::Meters);
        assert_eq!(
            "kilometers".parse::<RadiusUnit>().unwrap(),
            RadiusUnit::Kilometers
        );
        assert_matches!(
            "miles".parse::<RadiusUnit>(),
            Err(LandfallError::InvalidRadiusUnit(unit)) if unit == "miles"
        );

        assert_relative_eq!(RadiusUnit::Kilometers.to_meters(1.5), 1500.0);
        assert_relative_eq!(RadiusUnit::Meters.to_meters(1.5), 1.5);
    }

    #[test]
    fn circles_with_palette_and_same_fill() {
        let mut context = Context::new();
        add_circles(
            &mut context,
            &[40.0, 41.0, 42.0],
            &[-74.0, -73.0, -72.0],
            &[1.0, 2.0, 3.0],
            RadiusUnit::Kilometers,
            &ColorStyle::<String>::default().with_colors(Palette::DISTINCT),
            &FillStyle::default().with_fill_same(true),
            2,
        )
        .unwrap();

        let circles = circles(&context);
        assert_eq!(circles.len(), 3);
        assert_relative_eq!(circles[2].radius_m, 3000.0);
        assert!(circles.iter().all(|c| c.color == c.fill_color));
        assert_ne!(circles[0].color, circles[1].color);
    }

    #[test]
    fn radii_length_must_match() {
        let mut context = Context::new();
        let result = add_circles(
            &mut context,
            &[40.0, 41.0],
            &[-74.0, -73.0],
            &[1.0],
            RadiusUnit::Meters,
            &ColorStyle::<String>::default(),
            &FillStyle::default(),
            2,
        );

        assert_matches!(
            result,
            Err(LandfallError::LengthMismatch { what: "radii", .. })
        );
    }

    #[test]
    fn plot_single_circle() {
        let mut context = Context::new().with_renderer(RecordingRenderer::default());
        plot_circle(
            &mut context,
            -74.0,
            40.0,
            500.0,
            RadiusUnit::Meters,
            Color::RED,
            Color::TRANSPARENT_RED,
            2,
            &PlotOptions::default().with_flip_coords(true),
        )
        .unwrap();

        let circle = circles(&context)[0];
        assert_eq!(circle.center.lat(), 40.0);
        assert_eq!(circle.center.lon(), -74.0);
        assert!(context.zoom().is_some());
    }

    #[test]
    fn plot_many_circles() {
        let renderer = RecordingRenderer::default();
        let mut context = Context::new().with_renderer(renderer.clone());
        plot_circles(
            &mut context,
            &[40.0, 40.01],
            &[-74.0, -74.01],
            &[100.0, 200.0],
            RadiusUnit::Meters,
            &ColorStyle::<String>::default(),
            &FillStyle::default().with_fill_transparency(30),
            1,
            &PlotOptions::default(),
        )
        .unwrap();

        assert_eq!(renderer.last_call().unwrap().objects, 2);
        let circles = circles(&context);
        assert_eq!(circles[0].fill_color, Color::RED.with_alpha(30));
    }
}
