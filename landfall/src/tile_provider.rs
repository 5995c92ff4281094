//! Description of the tile service a map is drawn on.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Resolution of the zoom level 0 of the Web Mercator tile pyramid with 256px tiles, in meters
/// per pixel.
const TOP_RESOLUTION: f64 = 156543.03392800014;
const DEFAULT_TILE_SIZE: u32 = 256;

/// Tile service description.
///
/// `landfall` does not download tiles, but the provider limits the zoom levels a map can be
/// rendered at and is kept with the render context, so that a tile-drawing [`Renderer`] can use
/// it.
///
/// [`Renderer`]: crate::render::Renderer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileProvider {
    name: String,
    url_template: String,
    max_zoom: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    attribution: Option<String>,
    #[cfg_attr(feature = "serde", serde(default = "default_tile_size"))]
    tile_size: u32,
}

#[cfg(feature = "serde")]
fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

impl TileProvider {
    /// Creates a provider. The URL template can contain `{z}`, `{x}` and `{y}` placeholders.
    pub fn new(name: impl Into<String>, url_template: impl Into<String>, max_zoom: u8) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
            max_zoom,
            attribution: None,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }

    /// OpenStreetMap standard tiles.
    pub fn osm() -> Self {
        Self::new("osm", "https://tile.openstreetmap.org/{z}/{x}/{y}.png", 19)
            .with_attribution("Maps & Data (C) OpenStreetMap.org contributors")
    }

    /// Light Carto basemap.
    pub fn carto_light() -> Self {
        Self::new(
            "carto-light",
            "https://a.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png",
            20,
        )
        .with_attribution("(C) OpenStreetMap contributors (C) CARTO")
    }

    /// Dark Carto basemap.
    pub fn carto_dark() -> Self {
        Self::new(
            "carto-dark",
            "https://a.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png",
            20,
        )
        .with_attribution("(C) OpenStreetMap contributors (C) CARTO")
    }

    /// Sets attribution text.
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    /// Sets size of the tiles in pixels.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Name of the provider.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum zoom level the provider has tiles for.
    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    /// Attribution text.
    pub fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }

    /// Size of the tiles in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// URL of the tile with the given index.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        self.url_template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }

    /// Web Mercator meters per pixel at the given zoom level.
    pub fn resolution(&self, zoom: u8) -> f64 {
        TOP_RESOLUTION * DEFAULT_TILE_SIZE as f64
            / self.tile_size as f64
            / 2f64.powi(zoom as i32)
    }
}

impl Default for TileProvider {
    fn default() -> Self {
        Self::osm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tile_url() {
        assert_eq!(
            TileProvider::osm().tile_url(3, 4, 5),
            "https://tile.openstreetmap.org/3/4/5.png"
        );
    }

    #[test]
    fn resolution_halves_with_zoom() {
        let provider = TileProvider::default();
        assert_relative_eq!(provider.resolution(0), TOP_RESOLUTION);
        assert_relative_eq!(provider.resolution(1), TOP_RESOLUTION / 2.0);
        assert_relative_eq!(provider.resolution(17), TOP_RESOLUTION / 131072.0);
    }

    #[test]
    fn larger_tiles_have_finer_resolution() {
        let provider = TileProvider::osm().with_tile_size(512);
        assert_relative_eq!(provider.resolution(0), TOP_RESOLUTION / 2.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let provider: TileProvider = serde_json::from_str(
            r#"{"name": "local", "url_template": "http://localhost/{z}/{x}/{y}.png", "max_zoom": 12}"#,
        )
        .unwrap();

        assert_eq!(provider.max_zoom(), 12);
        assert_eq!(provider.tile_size(), 256);
        assert_eq!(provider.attribution(), None);
    }
}
