//! Landfall is a small library for plotting geographic data on static map images. It takes data
//! in whatever shape it comes (coordinate lists, tables of columns, GeoJSON documents, `geo-types`
//! geometries), figures out colors for every item, fits the map view around the data and renders
//! it into an image.
//!
//! # Quick start
//!
//! ```
//! use landfall::palette::Palette;
//! use landfall::plot::points::plot_points;
//! use landfall::plot::PlotOptions;
//! use landfall::style::ColorStyle;
//! use landfall::Context;
//!
//! # fn main() -> Result<(), landfall::error::LandfallError> {
//! let mut context = Context::new();
//! let style = ColorStyle::<String>::new("red").with_colors(Palette::DISTINCT);
//! let image = plot_points(
//!     &mut context,
//!     &[27.88, 27.95, 28.01],
//!     &[-82.49, -82.46, -82.52],
//!     &style,
//!     10,
//!     &PlotOptions::default(),
//! )?;
//!
//! assert_eq!(image.width(), 500);
//! # Ok(())
//! # }
//! ```
//!
//! # Main components of Landfall
//!
//! * [`Context`] collects the [`primitives`] to draw and knows the tile provider, zoom level and
//!   center of the map. It can calculate the zoom level that fits all its objects into a window.
//! * [`style`] resolves colors of a collection of items from a single color, a list of colors, a
//!   [`palette`] generator or a mapping from item ids to colors.
//! * [`plot`], [`geojson`] and [`geometry`] are the front-ends that accept data of different
//!   shapes and add it to a context.
//! * [`render`] turns a context into a [`RenderedImage`].

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod color;
mod context;
pub mod error;
pub mod geojson;
pub mod geometry;
pub mod palette;
pub mod plot;
pub mod primitives;
pub mod render;
pub mod style;
mod tile_provider;
mod view;

pub use color::{convert_color, convert_colors, Color, ColorLike};
pub use context::Context;
pub use error::LandfallError;
pub use palette::Palette;
pub use plot::PlotOptions;
pub use render::{RasterRenderer, RenderedImage, Renderer};
pub use style::{ColorStyle, FillStyle};
pub use tile_provider::TileProvider;
pub use view::MapView;

// Reexport landfall_types
pub use landfall_types;
