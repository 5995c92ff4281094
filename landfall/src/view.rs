use landfall_types::cartesian::{Point2d, Rect, Size};
use nalgebra::{Matrix3, Point2, Scale2, Translation2};

/// Area of the map visible in a window: the center point in Web Mercator meters, the resolution
/// (meters per pixel) and the window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    position: Point2d,
    resolution: f64,
    size: Size,
}

impl MapView {
    /// Creates a view centered at `position` with the given resolution.
    pub fn new(position: Point2d, resolution: f64, size: Size) -> Self {
        Self {
            position,
            resolution,
            size,
        }
    }

    /// Center of the view.
    pub fn position(&self) -> Point2d {
        self.position
    }

    /// Meters per pixel.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Window size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Visible area in Web Mercator meters.
    pub fn get_bbox(&self) -> Rect {
        Rect::new(
            self.position.x - self.size.half_width() * self.resolution,
            self.position.y - self.size.half_height() * self.resolution,
            self.position.x + self.size.half_width() * self.resolution,
            self.position.y + self.size.half_height() * self.resolution,
        )
    }

    fn map_to_screen_transform(&self) -> Matrix3<f64> {
        let translate = Translation2::new(-self.position.x, -self.position.y).to_homogeneous();
        let scale = Scale2::new(1.0 / self.resolution, -1.0 / self.resolution).to_homogeneous();
        let to_corner =
            Translation2::new(self.size.half_width(), self.size.half_height()).to_homogeneous();

        to_corner * scale * translate
    }

    /// Converts a point in Web Mercator meters into window pixel coordinates, with the origin in
    /// the top left corner and `y` growing downwards.
    pub fn map_to_screen(&self, point: Point2d) -> Point2d {
        self.map_to_screen_transform()
            .transform_point(&Point2::new(point.x, point.y))
    }

    /// Reverse of [`MapView::map_to_screen`].
    pub fn screen_to_map(&self, px_position: Point2d) -> Point2d {
        let x = self.position.x + (px_position.x - self.size.half_width()) * self.resolution;
        let y = self.position.y + (self.size.half_height() - px_position.y) * self.resolution;
        Point2d::new(x, y)
    }
}
