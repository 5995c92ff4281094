use landfall_types::cartesian::{Point2d, Size};
use landfall_types::geo::{GeoPoint2d, Projection, WebMercator};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::LandfallError;
use crate::primitives::Drawable;
use crate::render::{RenderedImage, Renderer};
use crate::view::MapView;
use crate::{Color, Context};

/// Software renderer that draws the context objects over a plain background.
///
/// Tiles are not drawn. Objects are anti-aliased and drawn in the order they were added.
#[derive(Debug, Clone, Copy)]
pub struct RasterRenderer {
    background: Color,
}

impl RasterRenderer {
    /// Background color used by default.
    pub const DEFAULT_BACKGROUND: Color = Color::from_hex("#F2EFE9");

    /// Creates a renderer with the given background color.
    pub fn new(background: Color) -> Self {
        Self { background }
    }

    /// Background color.
    pub fn background(&self) -> Color {
        self.background
    }
}

impl Default for RasterRenderer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BACKGROUND)
    }
}

impl Renderer for RasterRenderer {
    fn render(&self, context: &Context, size: Size<u32>) -> Result<RenderedImage, LandfallError> {
        let view = context.view(size)?;
        let mut pixmap =
            Pixmap::new(size.width(), size.height()).ok_or(LandfallError::ImageSize {
                width: size.width(),
                height: size.height(),
            })?;
        pixmap.fill(skia_color(self.background));

        let mut canvas = Canvas::new(pixmap, view);
        for object in context.objects() {
            canvas.draw(object);
        }

        Ok(RenderedImage::from_pixmap(&canvas.pixmap))
    }
}

struct Canvas {
    pixmap: Pixmap,
    view: MapView,
    projection: WebMercator<GeoPoint2d>,
}

impl Canvas {
    fn new(pixmap: Pixmap, view: MapView) -> Self {
        Self {
            pixmap,
            view,
            projection: WebMercator::default(),
        }
    }

    fn to_screen(&self, points: &[GeoPoint2d]) -> Vec<Point2d> {
        points
            .iter()
            .filter_map(|p| self.projection.project(p))
            .map(|p| self.view.map_to_screen(p))
            .collect()
    }

    fn draw(&mut self, object: &Drawable) {
        match object {
            Drawable::Marker(marker) => {
                let center = self.to_screen(std::slice::from_ref(&marker.position));
                if let Some(&center) = center.first() {
                    self.fill_disc(center, marker.size as f32 / 2.0, marker.color);
                }
            }
            Drawable::Line(line) => {
                let points = self.to_screen(&line.points);
                match points.as_slice() {
                    [single] => self.fill_disc(*single, line.width as f32 / 2.0, line.color),
                    _ => self.stroke(build_path(&points, false), line.color, line.width),
                }
            }
            Drawable::Area(area) => {
                let points = self.to_screen(&area.points);
                self.draw_polygon(&points, area.color, area.fill_color, area.width);
            }
            Drawable::Circle(circle) => {
                let points = self.to_screen(&circle.outline());
                self.draw_polygon(&points, circle.color, circle.fill_color, circle.width);
            }
        }
    }

    fn draw_polygon(&mut self, ring: &[Point2d], color: Color, fill_color: Color, width: u32) {
        let path = build_path(ring, true);
        if let (Some(path), false) = (&path, fill_color.is_transparent()) {
            self.pixmap.fill_path(
                path,
                &paint(fill_color),
                FillRule::EvenOdd,
                Transform::identity(),
                None,
            );
        }

        self.stroke(path, color, width);
    }

    fn fill_disc(&mut self, center: Point2d, radius: f32, color: Color) {
        if color.is_transparent() {
            return;
        }

        let path = PathBuilder::from_circle(center.x as f32, center.y as f32, radius.max(0.5));
        if let Some(path) = path {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke(&mut self, path: Option<Path>, color: Color, width: u32) {
        let Some(path) = path else {
            return;
        };
        if width == 0 || color.is_transparent() {
            return;
        }

        let stroke = Stroke {
            width: width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }
}

/// Path through the points. Returns `None` if there are fewer than two points.
fn build_path(points: &[Point2d], close: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;

    let mut builder = PathBuilder::new();
    builder.move_to(first.x as f32, first.y as f32);
    for point in rest {
        builder.line_to(point.x as f32, point.y as f32);
    }
    if close {
        builder.close();
    }

    builder.finish()
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = true;
    paint
}

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r(), color.g(), color.b(), color.a())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Area, Circle, Line, Marker};
    use assert_matches::assert_matches;
    use landfall_types::latlon;

    fn assert_close(actual: Color, expected: Color) {
        for (a, e) in actual.to_u8_array().into_iter().zip(expected.to_u8_array()) {
            assert!(a.abs_diff(e) <= 2, "{actual:?} is not close to {expected:?}");
        }
    }

    fn render(context: &Context) -> RenderedImage {
        RasterRenderer::new(Color::WHITE)
            .render(context, Size::new(100, 100))
            .unwrap()
    }

    #[test]
    fn marker_is_drawn_in_the_center() {
        let mut context = Context::new();
        context.add_object(Marker {
            position: latlon!(10.0, 20.0),
            color: Color::BLUE,
            size: 10,
        });

        let image = render(&context);
        assert_eq!(image.pixel(50, 50), Some(Color::BLUE));
        assert_eq!(image.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(image.pixel(50, 60), Some(Color::WHITE));
    }

    #[test]
    fn area_is_filled_and_outlined() {
        let mut context = Context::new();
        context.set_zoom(10);
        context.add_object(Area {
            points: vec![
                latlon!(0.05, -0.05),
                latlon!(0.05, 0.05),
                latlon!(-0.05, 0.05),
                latlon!(-0.05, -0.05),
            ],
            color: Color::RED,
            fill_color: Color::BLUE,
            width: 2,
        });

        let image = render(&context);
        assert_eq!(image.pixel(50, 50), Some(Color::BLUE));
        assert_eq!(image.pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn translucent_fill_is_blended_once() {
        let mut context = Context::new();
        context.set_zoom(10);
        context.add_object(Circle {
            center: latlon!(0.0, 0.0),
            radius_m: 1000.0,
            color: Color::TRANSPARENT,
            fill_color: Color::TRANSPARENT_RED,
            width: 2,
        });

        let image = render(&context);
        let pixel = image.pixel(50, 50).unwrap();
        assert_close(pixel, Color::rgb(255, 155, 155));

        // Outside of the circle the background is untouched.
        assert_eq!(image.pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn circle_outline_is_stroked() {
        let mut context = Context::new();
        context.set_zoom(10);
        context.add_object(Circle {
            center: latlon!(0.0, 0.0),
            radius_m: 1000.0,
            color: Color::RED,
            fill_color: Color::TRANSPARENT,
            width: 4,
        });

        let image = render(&context);
        assert_eq!(image.pixel(50, 50), Some(Color::WHITE));

        // At zoom 10 a pixel is about 153 m, so the outline crosses the middle row near x = 43.
        let row: Vec<Color> = (30..50).filter_map(|x| image.pixel(x, 50)).collect();
        assert!(row.contains(&Color::RED));
    }

    #[test]
    fn line_covers_its_path() {
        let mut context = Context::new();
        context.add_object(Line {
            points: vec![latlon!(0.0, -1.0), latlon!(0.0, 1.0)],
            color: Color::GREEN,
            width: 4,
        });

        let image = render(&context);
        assert_eq!(image.pixel(50, 50), Some(Color::GREEN));
        assert_eq!(image.pixel(50, 10), Some(Color::WHITE));
    }

    #[test]
    fn empty_context_cannot_be_rendered() {
        let result = RasterRenderer::default().render(&Context::new(), Size::new(10, 10));
        assert_matches!(result, Err(LandfallError::EmptyMap));
    }

    #[test]
    fn zero_sized_image_is_an_error() {
        let mut context = Context::new();
        context.add_point(0.0, 0.0, Color::RED, 10);

        let result = RasterRenderer::default().render(&context, Size::new(0, 10));
        assert_matches!(
            result,
            Err(LandfallError::ImageSize {
                width: 0,
                height: 10
            })
        );
    }
}
