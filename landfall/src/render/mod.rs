//! Rendering of a [`Context`] into a pixel image.

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use landfall_types::cartesian::Size;
use tiny_skia::Pixmap;

use crate::error::LandfallError;
use crate::{Color, Context};

mod raster;

pub use raster::RasterRenderer;

/// Draws the objects of a context into an image of the given size.
pub trait Renderer {
    /// Renders the context. Fails with [`LandfallError::EmptyMap`] if the area to draw cannot be
    /// determined.
    fn render(&self, context: &Context, size: Size<u32>) -> Result<RenderedImage, LandfallError>;
}

/// Rendered map image.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    /// Raw bytes of the image, in RGBA order, row by row from the top.
    bytes: Vec<u8>,
    dimensions: Size<u32>,
}

impl RenderedImage {
    /// Creates an image of the given size filled with one color.
    pub fn filled(dimensions: Size<u32>, color: Color) -> Self {
        let pixel_count = dimensions.width() as usize * dimensions.height() as usize;
        Self {
            bytes: color.to_u8_array().repeat(pixel_count),
            dimensions,
        }
    }

    /// Width and height of the image.
    pub fn dimensions(&self) -> Size<u32> {
        self.dimensions
    }

    /// Width of the image.
    pub fn width(&self) -> u32 {
        self.dimensions.width()
    }

    /// Height of the image.
    pub fn height(&self) -> u32 {
        self.dimensions.height()
    }

    /// Raw RGBA bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the raw RGBA bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Color of the pixel, or `None` if the coordinates are outside of the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let &[r, g, b, a] = &self.bytes[offset..offset + 4] else {
            return None;
        };

        Some(Color::rgba(r, g, b, a))
    }

    /// Copies the pixels of a rendered pixmap, converting them back to straight alpha.
    pub(crate) fn from_pixmap(pixmap: &Pixmap) -> Self {
        let bytes = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();

        Self {
            bytes,
            dimensions: Size::new(pixmap.width(), pixmap.height()),
        }
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        Some((y as usize * self.width() as usize + x as usize) * 4)
    }

    /// Encodes the image as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, LandfallError> {
        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer).write_image(
            &self.bytes,
            self.width(),
            self.height(),
            ColorType::Rgba8,
        )?;

        Ok(buffer)
    }

    /// Saves the image to a file. The format is selected by the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LandfallError> {
        image::save_buffer(
            path,
            &self.bytes,
            self.width(),
            self.height(),
            ColorType::Rgba8,
        )?;

        Ok(())
    }
}
