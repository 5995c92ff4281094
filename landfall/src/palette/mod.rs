//! Palette generators: procedures producing a number of colors without any per-item input.
//!
//! * [`Palette::Random`] - independent uniformly random colors, reproducible with a seed.
//! * [`Palette::Distinct`] - colors that are as far from each other as possible perceptually.
//! * [`Palette::Wheel`] - colors evenly spaced around the hue circle.
//!
//! A palette can be parsed from its name:
//!
//! ```
//! use landfall::palette::Palette;
//!
//! let palette: Palette = "wheel".parse().unwrap();
//! assert_eq!(palette.generate(3).len(), 3);
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LandfallError;
use crate::Color;

mod distinct;
mod random;
mod wheel;

pub use distinct::{distinct_colors, get_distinct_colors};
pub use random::{random_color, random_colors};
pub use wheel::{hsv_to_rgb, wheel_colors};

/// Strategy to generate colors for a number of items.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Palette {
    /// Uniformly random colors.
    Random {
        /// Seed of the random generator. Without a seed every call gives different colors.
        seed: Option<u64>,
    },
    /// Perceptually distinct colors.
    Distinct {
        /// Value in `0..` that moves the colors towards pastel tones. `0` means no shift.
        pastel_factor: f64,
        /// Seed of the candidate search. The default seed is used if not set, so the result is
        /// reproducible either way.
        seed: Option<u64>,
    },
    /// Colors evenly spaced around the hue circle at full saturation and value.
    Wheel,
}

impl Palette {
    /// Random palette without a seed.
    pub const RANDOM: Palette = Palette::Random { seed: None };
    /// Distinct palette with default parameters.
    pub const DISTINCT: Palette = Palette::Distinct {
        pastel_factor: 0.0,
        seed: None,
    };

    /// Name of the palette strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Palette::Random { .. } => "random",
            Palette::Distinct { .. } => "distinct",
            Palette::Wheel => "wheel",
        }
    }

    /// Generates colors for `count` items.
    ///
    /// [`Palette::Wheel`] can return fewer colors than requested for very large counts, when
    /// neighbouring hues round to the same RGB value. All other palettes return exactly `count`
    /// colors.
    pub fn generate(&self, count: usize) -> Vec<Color> {
        match *self {
            Palette::Random { seed } => random_colors(count, seed),
            Palette::Distinct {
                pastel_factor,
                seed,
            } => distinct_colors(count, pastel_factor, seed),
            Palette::Wheel => wheel_colors(count)
                .into_iter()
                .map(|(r, g, b)| Color::rgb(r, g, b))
                .collect(),
        }
    }
}

impl FromStr for Palette {
    type Err = LandfallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::RANDOM),
            "distinct" => Ok(Self::DISTINCT),
            "wheel" => Ok(Self::Wheel),
            other => Err(LandfallError::UnknownPalette(other.to_string())),
        }
    }
}

impl TryFrom<String> for Palette {
    type Error = LandfallError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Palette> for String {
    fn from(value: Palette) -> Self {
        value.name().to_string()
    }
}

impl Display for Palette {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
