//! Geometry primitives used by `landfall`.
//!
//! The crate contains geographic points ([`geo::GeoPoint2d`]), the Web Mercator projection used
//! to fit plotted data into a window, bounding rectangles and a closed [`Geom`] enum that all
//! external geometry representations (GeoJSON values, `geo-types` geometries) are converted into
//! before plotting.

pub mod cartesian;
pub mod error;
pub mod geo;
mod geometry;

#[cfg(feature = "geo-types")]
pub mod geo_types;
#[cfg(feature = "geojson")]
pub mod geojson;

pub use geometry::{Geom, GeometryKind, Polygon};
