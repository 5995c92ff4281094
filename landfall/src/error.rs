//! Error types used by the crate.

use std::path::PathBuf;

use image::ImageError;
use landfall_types::error::LandfallTypesError;
use thiserror::Error;

/// Landfall error type.
#[derive(Debug, Error)]
pub enum LandfallError {
    /// A color string is neither a known color name nor a hex literal.
    #[error("cannot parse color string: {0:?}")]
    InvalidColor(String),
    /// A color tuple does not have 3 or 4 components.
    #[error("color must have 3 (RGB) or 4 (RGBA) components, got {0}")]
    ColorComponents(usize),
    /// A color component is outside of `0..=255`.
    #[error("color component {0} is out of 0..=255 range")]
    ChannelOutOfRange(i64),
    /// Unknown palette generator name.
    #[error("unknown color palette {0:?}, expected one of: random, distinct, wheel")]
    UnknownPalette(String),
    /// A per-item input does not have one entry per item.
    #[error("{what} has {actual} entries, but {expected} items are plotted")]
    LengthMismatch {
        /// Name of the input.
        what: &'static str,
        /// Number of plotted items.
        expected: usize,
        /// Number of entries given.
        actual: usize,
    },
    /// An id has no entry in the explicit id to color mapping.
    #[error("no color given for id {0}")]
    MissingIdColor(String),
    /// A data column was not found.
    #[error("column {0:?} not found")]
    MissingColumn(String),
    /// A data column has values of a wrong type.
    #[error("column {name:?} must contain {expected}")]
    ColumnType {
        /// Name of the column.
        name: String,
        /// Expected type of values.
        expected: &'static str,
    },
    /// Input is not valid JSON or not valid GeoJSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    /// GeoJSON object without `type` member.
    #[error("GeoJSON must have 'type' field")]
    MissingGeoJsonType,
    /// GeoJSON object of unsupported type.
    #[error("Unsupported GeoJSON type: {0}")]
    UnsupportedGeoJsonType(String),
    /// Nothing to plot in the GeoJSON input.
    #[error("No geometries found in GeoJSON")]
    NoGeometries,
    /// Geometry data cannot be converted for plotting.
    #[error(transparent)]
    Geometry(#[from] LandfallTypesError),
    /// Unknown radius unit.
    #[error("radius unit must be 'meters' or 'kilometers', got {0:?}")]
    InvalidRadiusUnit(String),
    /// Feature table has no geometry column to plot.
    #[error("feature table has no geometry column")]
    NoGeometryColumn,
    /// The requested geometry column does not exist in the feature table.
    #[error("Geometry column '{0}' not found in feature table")]
    MissingGeometryColumn(String),
    /// The map has no objects and no center, so the area to render is unknown.
    #[error("cannot render empty map")]
    EmptyMap,
    /// An image of the requested size cannot be created.
    #[error("cannot create {width}x{height} image")]
    ImageSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// Input file does not exist.
    #[error("GeoJSON file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// Error reading/writing data to the FS.
    #[error("failed to read file")]
    FsIo(#[from] std::io::Error),
    /// Image encoding error.
    #[error("image error: {0:?}")]
    Image(#[from] ImageError),
}
