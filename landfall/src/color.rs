use ahash::HashMap;
use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LandfallError;

/// Color representation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl TryFrom<String> for Color {
    type Error = LandfallError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_hex()
    }
}

lazy_static! {
    static ref HEX_COLOR: Regex =
        Regex::new(r"^(?:0x|#)([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})?$")
            .expect("valid regex");
    static ref NAMED_COLORS: HashMap<&'static str, Color> = [
        ("black", Color::BLACK),
        ("blue", Color::BLUE),
        ("brown", Color::BROWN),
        ("gray", Color::GRAY),
        ("green", Color::GREEN),
        ("orange", Color::ORANGE),
        ("purple", Color::PURPLE),
        ("red", Color::RED),
        ("yellow", Color::YELLOW),
        ("white", Color::WHITE),
        ("transparent", Color::TRANSPARENT),
    ]
    .into_iter()
    .collect();
}

impl Color {
    /// Transparent color: `#00000000`
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Red color: `#FF0000FF`
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    /// Semi-transparent red used as the default polygon and circle fill: `#FF000064`
    pub const TRANSPARENT_RED: Color = Color::rgba(255, 0, 0, 100);
    /// Green color: `#00FF00FF`
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    /// Blue color: `#0000FFFF`
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    /// White color: `#FFFFFFFF`
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Black color: `#000000FF`
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// Gray color: `#AAAAAAFF`
    pub const GRAY: Color = Color::rgba(170, 170, 170, 255);
    /// Purple color: `#990099FF`
    pub const PURPLE: Color = Color::rgba(0x99, 0, 0x99, 255);
    /// Brown color: `#996633FF`
    pub const BROWN: Color = Color::rgba(0x99, 0x66, 0x33, 255);
    /// Orange color: `#FF7F00FF`
    pub const ORANGE: Color = Color::rgba(255, 0x7f, 0, 255);
    /// Yellow color: `#FFFF00FF`
    pub const YELLOW: Color = Color::rgba(255, 255, 0, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs an opaque color from its RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Converts the color into u8 array (RGBA).
    pub fn to_u8_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// RGB channels of the color, without opacity.
    pub fn rgb_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Converts the color into HEX8 string: `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Parses a color from a string.
    ///
    /// Accepts the names `black`, `blue`, `brown`, `gray`, `green`, `orange`, `purple`, `red`,
    /// `yellow`, `white` and `transparent`, and hex literals `#RRGGBB`, `#RRGGBBAA` (the `#` may
    /// also be written as `0x`). Parsing is case-insensitive and ignores surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, LandfallError> {
        let normalized = value.trim().to_lowercase();
        if let Some(color) = NAMED_COLORS.get(normalized.as_str()) {
            return Ok(*color);
        }

        let caps = HEX_COLOR
            .captures(&normalized)
            .ok_or_else(|| LandfallError::InvalidColor(value.to_string()))?;
        let channel = |i: usize| {
            caps.get(i)
                .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
        };

        match (channel(1), channel(2), channel(3)) {
            (Some(r), Some(g), Some(b)) => Ok(Self::rgba(r, g, b, channel(4).unwrap_or(255))),
            _ => Err(LandfallError::InvalidColor(value.to_string())),
        }
    }

    /// Parses a color from the hex string in const context.
    ///
    /// # Panics
    ///
    /// Panics if the parsing fails.
    pub const fn from_hex(hex_string: &'static str) -> Self {
        let bytes = hex_string.as_bytes();
        if bytes.len() != 7 && bytes.len() != 9 || bytes[0] != b'#' {
            panic!("Invalid color hex string");
        }

        let r = decode_byte(&[bytes[1], bytes[2]]);
        let g = decode_byte(&[bytes[3], bytes[4]]);
        let b = decode_byte(&[bytes[5], bytes[6]]);
        let a = if hex_string.len() == 9 {
            decode_byte(&[bytes[7], bytes[8]])
        } else {
            255
        };

        Self { r, g, b, a }
    }

    /// Returns a new color instance, copied from the base one but with the given alpha channel.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Returns true if the color is fully transparent (`a == 0`).
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Red component of the color in RGBA space.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green component of the color in RGBA space.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue component of the color in RGBA space.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Opacity component of the color.
    pub fn a(&self) -> u8 {
        self.a
    }
}

const fn decode_byte(chars: &[u8]) -> u8 {
    debug_assert!(chars.len() == 2);
    let first = decode_char(chars[0]);
    let second = decode_char(chars[1]);

    first * 16 + second
}

const fn decode_char(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}

/// Any of the accepted ways to specify a color.
///
/// Strings are parsed with [`Color::parse`], tuples are taken as RGB or RGBA channels.
/// [`ColorLike::Components`] holds channel lists of arbitrary length (e.g. read from JSON), which
/// are only valid if they have 3 or 4 entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ColorLike {
    /// Color name or hex literal.
    Str(String),
    /// Channel list.
    Components(Vec<i64>),
    /// Opaque RGB color.
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Rgb(u8, u8, u8),
    /// RGBA color.
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Rgba(u8, u8, u8, u8),
    /// Already converted color.
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Native(Color),
}

impl From<&str> for ColorLike {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ColorLike {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<(u8, u8, u8)> for ColorLike {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for ColorLike {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::Rgba(r, g, b, a)
    }
}

impl From<Color> for ColorLike {
    fn from(value: Color) -> Self {
        Self::Native(value)
    }
}

impl From<Vec<i64>> for ColorLike {
    fn from(value: Vec<i64>) -> Self {
        Self::Components(value)
    }
}

impl From<&[i64]> for ColorLike {
    fn from(value: &[i64]) -> Self {
        Self::Components(value.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for ColorLike {
    fn from(value: [i64; N]) -> Self {
        Self::Components(value.to_vec())
    }
}

impl TryFrom<&ColorLike> for Color {
    type Error = LandfallError;

    fn try_from(value: &ColorLike) -> Result<Self, Self::Error> {
        match value {
            ColorLike::Str(s) => Color::parse(s),
            ColorLike::Rgb(r, g, b) => Ok(Color::rgb(*r, *g, *b)),
            ColorLike::Rgba(r, g, b, a) => Ok(Color::rgba(*r, *g, *b, *a)),
            ColorLike::Native(color) => Ok(*color),
            ColorLike::Components(components) => {
                let channels = components
                    .iter()
                    .map(|&c| u8::try_from(c).map_err(|_| LandfallError::ChannelOutOfRange(c)))
                    .collect::<Result<Vec<_>, _>>();
                match (components.len(), channels?.as_slice()) {
                    (3, &[r, g, b]) => Ok(Color::rgb(r, g, b)),
                    (4, &[r, g, b, a]) => Ok(Color::rgba(r, g, b, a)),
                    (len, _) => Err(LandfallError::ColorComponents(len)),
                }
            }
        }
    }
}

/// Converts any color representation into [`Color`].
pub fn convert_color(color: impl Into<ColorLike>) -> Result<Color, LandfallError> {
    Color::try_from(&color.into())
}

/// Converts every color of the list, failing on the first invalid one.
pub fn convert_colors<'a>(
    colors: impl IntoIterator<Item = &'a ColorLike>,
) -> Result<Vec<Color>, LandfallError> {
    colors.into_iter().map(Color::try_from).collect()
}
