//! Plotting front-ends.
//!
//! Every kind of input has three levels of functions:
//! * `add_*` adds a single item with concrete colors to a [`Context`];
//! * `add_*s` adds a collection of items, resolving their colors from a
//!   [`ColorStyle`](crate::style::ColorStyle) (and a [`FillStyle`](crate::style::FillStyle) for
//!   shapes with fill);
//! * `plot_*` adds the items, selects the zoom level according to the [`PlotOptions`] and renders
//!   the context.

use landfall_types::cartesian::Size;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LandfallError;
use crate::render::RenderedImage;
use crate::tile_provider::TileProvider;
use crate::Context;

pub mod circles;
pub mod combos;
pub mod data;
pub mod lines;
pub mod points;
pub mod polygons;

/// Parameters of the rendered image shared by all `plot_*` functions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotOptions {
    /// Size of the image in pixels.
    pub window_size: Size<u32>,
    /// Added to the zoom level that fits all objects into the window.
    pub zoom: i32,
    /// Zoom level to use instead of the calculated one.
    pub set_zoom: Option<u8>,
    /// Input coordinates are given in `(lon, lat)` order.
    pub flip_coords: bool,
    /// Tile provider of the map.
    pub tile_provider: TileProvider,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            window_size: Size::new(500, 400),
            zoom: 0,
            set_zoom: None,
            flip_coords: false,
            tile_provider: TileProvider::default(),
        }
    }
}

impl PlotOptions {
    /// Sets size of the image.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = Size::new(width, height);
        self
    }

    /// Sets adjustment of the calculated zoom level.
    pub fn with_zoom_adjustment(mut self, zoom: i32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Sets a fixed zoom level.
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.set_zoom = Some(zoom);
        self
    }

    /// Sets the order of input coordinates.
    pub fn with_flip_coords(mut self, flip_coords: bool) -> Self {
        self.flip_coords = flip_coords;
        self
    }

    /// Sets the tile provider.
    pub fn with_tile_provider(mut self, tile_provider: TileProvider) -> Self {
        self.tile_provider = tile_provider;
        self
    }
}

/// Zoom level to render the context with.
///
/// `set_zoom` wins if given. Otherwise `zoom` is added to the level at which all objects fit into
/// the window, limited to the levels supported by the tile provider. Returns `None` if there is
/// nothing to fit.
pub fn plot_zoom(
    context: &Context,
    window_size: Size<u32>,
    zoom: i32,
    set_zoom: Option<u8>,
) -> Option<u8> {
    if let Some(set_zoom) = set_zoom {
        return Some(set_zoom);
    }

    let fitted = context.fit_zoom(window_size)?;
    let max_zoom = context.tile_provider().max_zoom();
    let adjusted = (fitted as i32 + zoom).clamp(0, max_zoom as i32) as u8;

    if zoom != 0 {
        log::debug!("Zoom level adjusted from {fitted} to {adjusted}");
    }

    Some(adjusted)
}

pub(crate) fn prepare(context: &mut Context, options: &PlotOptions) {
    context.set_tile_provider(options.tile_provider.clone());
}

pub(crate) fn finish(
    context: &mut Context,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    if let Some(zoom) = plot_zoom(context, options.window_size, options.zoom, options.set_zoom) {
        context.set_zoom(zoom);
    }

    context.render(options.window_size)
}

/// Swaps the axes of `(lat, lon)` tuples.
pub(crate) fn flip(coords: &[(f64, f64)]) -> Vec<(f64, f64)> {
    coords.iter().map(|&(a, b)| (b, a)).collect()
}
