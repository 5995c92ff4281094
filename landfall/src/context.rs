use std::fmt::Debug;
use std::hash::Hash;

use landfall_types::cartesian::{Rect, Size};
use landfall_types::geo::{GeoPoint2d, Projection, WebMercator};

use crate::error::LandfallError;
use crate::plot::{points, polygons};
use crate::primitives::Drawable;
use crate::render::{RasterRenderer, RenderedImage, Renderer};
use crate::style::{ColorStyle, FillStyle};
use crate::tile_provider::TileProvider;
use crate::view::MapView;
use crate::Color;

/// Render context: the objects to draw, the tile provider and optionally a fixed center and
/// zoom level.
///
/// If the center or zoom is not set, they are calculated so that all objects fit into the
/// rendered window.
pub struct Context {
    objects: Vec<Drawable>,
    tile_provider: TileProvider,
    zoom: Option<u8>,
    center: Option<GeoPoint2d>,
    renderer: Box<dyn Renderer>,
}

impl Context {
    /// Creates an empty context that renders with [`RasterRenderer`].
    pub fn new() -> Self {
        Self {
            objects: vec![],
            tile_provider: TileProvider::default(),
            zoom: None,
            center: None,
            renderer: Box::new(RasterRenderer::default()),
        }
    }

    /// Replaces the renderer used by [`Context::render`].
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Adds an object to draw.
    pub fn add_object(&mut self, object: impl Into<Drawable>) {
        self.objects.push(object.into());
    }

    /// Objects added to the context.
    pub fn objects(&self) -> &[Drawable] {
        &self.objects
    }

    /// Sets the tile provider. A zoom level set before is limited to the provider's max zoom.
    pub fn set_tile_provider(&mut self, tile_provider: TileProvider) {
        self.tile_provider = tile_provider;
        self.zoom = self.zoom.map(|z| z.min(self.tile_provider.max_zoom()));
    }

    /// Tile provider of the context.
    pub fn tile_provider(&self) -> &TileProvider {
        &self.tile_provider
    }

    /// Fixes the zoom level, limited to the tile provider's max zoom.
    pub fn set_zoom(&mut self, zoom: u8) {
        self.zoom = Some(zoom.min(self.tile_provider.max_zoom()));
    }

    /// Fixed zoom level, if set.
    pub fn zoom(&self) -> Option<u8> {
        self.zoom
    }

    /// Fixes the center of the rendered map.
    pub fn set_center(&mut self, center: GeoPoint2d) {
        self.center = Some(center);
    }

    /// Fixed center, if set.
    pub fn center(&self) -> Option<GeoPoint2d> {
        self.center
    }

    /// Bounding rectangle of all objects in Web Mercator meters.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::merge_all(self.objects.iter().filter_map(Drawable::bounds))
    }

    /// Largest number of pixels any object extends beyond its geographic bounds.
    pub fn extra_pixel_bounds(&self) -> u32 {
        self.objects
            .iter()
            .map(Drawable::extra_pixel_bounds)
            .max()
            .unwrap_or(0)
    }

    /// The largest zoom level at which all objects fit into a window of the given size. The
    /// fixed zoom of the context is not taken into account.
    ///
    /// Returns `None` if there are no objects.
    pub fn fit_zoom(&self, size: Size<u32>) -> Option<u8> {
        let bounds = self.bounds()?;
        let padding = 2.0 * self.extra_pixel_bounds() as f64;

        let zoom = (0..=self.tile_provider.max_zoom())
            .rev()
            .find(|&zoom| {
                let resolution = self.tile_provider.resolution(zoom);
                bounds.width() / resolution + padding <= size.width() as f64
                    && bounds.height() / resolution + padding <= size.height() as f64
            })
            .unwrap_or(0);

        log::debug!(
            "Zoom level {zoom} fits {} objects into {}x{} window",
            self.objects.len(),
            size.width(),
            size.height()
        );

        Some(zoom)
    }

    /// View that will be rendered for the given window size.
    pub fn view(&self, size: Size<u32>) -> Result<MapView, LandfallError> {
        let projection = WebMercator::<GeoPoint2d>::default();
        let position = self
            .center
            .and_then(|center| projection.project(&center))
            .or_else(|| self.bounds().map(|bounds| bounds.center()))
            .ok_or(LandfallError::EmptyMap)?;
        let zoom = self
            .zoom
            .or_else(|| self.fit_zoom(size))
            .unwrap_or(self.tile_provider.max_zoom());

        Ok(MapView::new(
            position,
            self.tile_provider.resolution(zoom),
            Size::new(size.width() as f64, size.height() as f64),
        ))
    }

    /// Center and zoom level the map will be rendered with. Fixed values take precedence over
    /// calculated ones.
    pub fn determine_center_zoom(&self, size: Size<u32>) -> Option<(GeoPoint2d, u8)> {
        let view = self.view(size).ok()?;
        let center = WebMercator::<GeoPoint2d>::default().unproject(&view.position())?;
        let zoom = self
            .zoom
            .or_else(|| self.fit_zoom(size))
            .unwrap_or(self.tile_provider.max_zoom());

        Some((center, zoom))
    }

    /// Renders the context into an image of the given size.
    pub fn render(&self, size: Size<u32>) -> Result<RenderedImage, LandfallError> {
        log::info!(
            "Rendering {} objects into {}x{} image",
            self.objects.len(),
            size.width(),
            size.height()
        );
        self.renderer.render(self, size)
    }

    /// Adds a point marker. See [`points::add_point`].
    pub fn add_point(&mut self, lat: f64, lon: f64, color: Color, point_size: u32) {
        points::add_point(self, lat, lon, color, point_size);
    }

    /// Adds point markers. See [`points::add_points`].
    pub fn add_points<K>(
        &mut self,
        lats: &[f64],
        lons: &[f64],
        style: &ColorStyle<K>,
        point_size: u32,
    ) -> Result<(), LandfallError>
    where
        K: Hash + Eq + Clone + Debug,
    {
        points::add_points(self, lats, lons, style, point_size)
    }

    /// Adds a polygon. See [`polygons::add_polygon`].
    pub fn add_polygon(
        &mut self,
        polygon: &[(f64, f64)],
        fill_color: Color,
        width: u32,
        color: Color,
        flip_coords: bool,
    ) {
        polygons::add_polygon(self, polygon, fill_color, width, color, flip_coords);
    }

    /// Adds polygons. See [`polygons::add_polygons`].
    pub fn add_polygons<K>(
        &mut self,
        polygons: &[Vec<(f64, f64)>],
        style: &ColorStyle<K>,
        fill: &FillStyle<K>,
        width: u32,
        flip_coords: bool,
    ) -> Result<(), LandfallError>
    where
        K: Hash + Eq + Clone + Debug,
    {
        polygons::add_polygons(self, polygons, style, fill, width, flip_coords)
    }
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("objects", &self.objects)
            .field("tile_provider", &self.tile_provider)
            .field("zoom", &self.zoom)
            .field("center", &self.center)
            .finish_non_exhaustive()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
