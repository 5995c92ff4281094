use num_traits::{FromPrimitive, NumCast};
use serde::{Deserialize, Serialize};

/// Size of a rectangular area, e.g. a window in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Size<Num = f64> {
    width: Num,
    height: Num,
}

impl<Num: num_traits::Num + FromPrimitive + PartialOrd + Copy + NumCast> Size<Num> {
    /// Creates a new size.
    pub fn new(width: Num, height: Num) -> Self {
        Self { width, height }
    }

    /// Width.
    pub fn width(&self) -> Num {
        self.width
    }

    /// Height.
    pub fn height(&self) -> Num {
        self.height
    }

    /// Returns true if either dimension is zero.
    pub fn is_zero(&self) -> bool {
        self.width.is_zero() || self.height.is_zero()
    }

    /// Converts the size into a different numeric type. Returns `None` if a dimension cannot be
    /// represented by the target type.
    pub fn cast<T: num_traits::Num + FromPrimitive + PartialOrd + Copy + NumCast>(
        &self,
    ) -> Option<Size<T>> {
        Some(Size {
            width: NumCast::from(self.width)?,
            height: NumCast::from(self.height)?,
        })
    }
}

impl Size<f64> {
    /// Half of the width.
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half of the height.
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

impl<Num> From<(Num, Num)> for Size<Num> {
    fn from((width, height): (Num, Num)) -> Self {
        Self { width, height }
    }
}
