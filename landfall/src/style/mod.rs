//! Resolution of styling inputs into one concrete color per plotted item.
//!
//! A plotting call can specify colors in several overlapping ways: a single default color, a list
//! of per-item colors, a [`Palette`] generator, or a grouping key per item together with an
//! id to color mapping. [`ColorStyle::resolve`] reconciles these with a fixed precedence:
//!
//! 1. `ids` together with `id_colors`;
//! 2. `colors` (a palette or an explicit list);
//! 3. the default `color`.
//!
//! [`FillStyle`] does the same for polygon and circle fills, and can also derive the fill from
//! the resolved border colors.

use std::fmt::Debug;
use std::hash::Hash;

use ahash::{HashMap, HashSet, HashSetExt};
#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::color::{convert_color, convert_colors, ColorLike};
use crate::error::LandfallError;
use crate::palette::Palette;
use crate::Color;

/// Per-item colors: either generated by a palette or listed explicitly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ColorsSpec {
    /// Generate as many colors as there are items.
    Palette(Palette),
    /// One color per item.
    List(Vec<ColorLike>),
}

impl From<Palette> for ColorsSpec {
    fn from(value: Palette) -> Self {
        Self::Palette(value)
    }
}

impl<T: Into<ColorLike>> From<Vec<T>> for ColorsSpec {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// Colors of item groups identified by a key.
#[derive(Debug, Clone)]
pub enum IdColors<K> {
    /// Generate one color per distinct key.
    Palette(Palette),
    /// Explicit color for every key.
    Map(HashMap<K, ColorLike>),
}

impl<K> From<Palette> for IdColors<K> {
    fn from(value: Palette) -> Self {
        Self::Palette(value)
    }
}

impl<K: Hash + Eq> From<HashMap<K, ColorLike>> for IdColors<K> {
    fn from(value: HashMap<K, ColorLike>) -> Self {
        Self::Map(value)
    }
}

impl<K: Hash + Eq, C: Into<ColorLike>, const N: usize> From<[(K, C); N]> for IdColors<K> {
    fn from(value: [(K, C); N]) -> Self {
        Self::Map(value.into_iter().map(|(k, c)| (k, c.into())).collect())
    }
}

/// Returns `count` colors from a palette or an explicit list.
///
/// An explicit list must have exactly `count` entries. Palettes that cannot produce enough unique
/// colors are repeated.
pub fn process_colors(colors: &ColorsSpec, count: usize) -> Result<Vec<Color>, LandfallError> {
    match colors {
        ColorsSpec::Palette(palette) => {
            log::debug!("Generating {count} colors with {palette} palette");
            Ok(cycle_to(palette.generate(count), count))
        }
        ColorsSpec::List(list) => {
            check_len("colors", count, list.len())?;
            convert_colors(list)
        }
    }
}

/// Builds the id to color mapping for the given ids.
///
/// With a palette, one color is generated per distinct id, assigned in order of first
/// appearance. With an explicit map, only the entries of the given ids are converted. Ids
/// missing from the map are left out.
pub fn map_id_colors<K>(
    ids: &[K],
    id_colors: &IdColors<K>,
) -> Result<HashMap<K, Color>, LandfallError>
where
    K: Hash + Eq + Clone,
{
    match id_colors {
        IdColors::Palette(palette) => {
            let unique = unique_ids(ids);
            let colors = cycle_to(palette.generate(unique.len()), unique.len());
            Ok(unique.into_iter().cloned().zip(colors).collect())
        }
        IdColors::Map(map) => unique_ids(ids)
            .into_iter()
            .filter_map(|id| map.get(id).map(|color| (id, color)))
            .map(|(id, color)| Color::try_from(color).map(|c| (id.clone(), c)))
            .collect(),
    }
}

/// Returns the color of every id. Items with equal ids always get equal colors.
pub fn process_id_colors<K>(ids: &[K], id_colors: &IdColors<K>) -> Result<Vec<Color>, LandfallError>
where
    K: Hash + Eq + Clone + Debug,
{
    let mapping = map_id_colors(ids, id_colors)?;
    ids.iter()
        .map(|id| {
            mapping
                .get(id)
                .copied()
                .ok_or_else(|| LandfallError::MissingIdColor(format!("{id:?}")))
        })
        .collect()
}

/// Resolves colors of `count` items.
///
/// See the [module documentation](self) for the precedence of the inputs.
pub fn resolve_colors<K>(
    count: usize,
    colors: Option<&ColorsSpec>,
    color: &ColorLike,
    ids: Option<&[K]>,
    id_colors: Option<&IdColors<K>>,
) -> Result<Vec<Color>, LandfallError>
where
    K: Hash + Eq + Clone + Debug,
{
    match (ids, id_colors) {
        (Some(ids), Some(id_colors)) => {
            check_len("ids", count, ids.len())?;
            log::debug!("Coloring {count} items by id");
            return process_id_colors(ids, id_colors);
        }
        (Some(_), None) => log::warn!("Item ids are given without id colors, ids are ignored"),
        (None, Some(_)) => {
            log::warn!("Id colors are given without item ids, id colors are ignored")
        }
        (None, None) => {}
    }

    if let Some(colors) = colors {
        return process_colors(colors, count);
    }

    let color = convert_color(color.clone())?;
    Ok(vec![color; count])
}

/// Resolves fill colors of `count` items with the given border colors.
///
/// * `fill_same` copies the border colors;
/// * `fill_transparency` copies the border colors with the given alpha;
/// * otherwise fills are resolved like border colors, from `id_fill_colors`, `fill_colors` and
///   `fill_color`.
pub fn resolve_fill_colors<K>(
    count: usize,
    border_colors: &[Color],
    ids: Option<&[K]>,
    fill: &FillStyle<K>,
) -> Result<Vec<Color>, LandfallError>
where
    K: Hash + Eq + Clone + Debug,
{
    if fill.fill_same {
        check_len("border colors", count, border_colors.len())?;
        return Ok(border_colors.to_vec());
    }

    if let Some(alpha) = fill.fill_transparency {
        check_len("border colors", count, border_colors.len())?;
        return Ok(border_colors.iter().map(|c| c.with_alpha(alpha)).collect());
    }

    // Fill colors by id only apply when there are ids to look up.
    let id_fill_colors = ids.and(fill.id_fill_colors.as_ref());
    resolve_colors(
        count,
        fill.fill_colors.as_ref(),
        &fill.fill_color,
        ids.filter(|_| id_fill_colors.is_some()),
        id_fill_colors,
    )
}

/// Border (or marker) color styling of a plotting call.
#[derive(Debug, Clone)]
pub struct ColorStyle<K = String> {
    /// Color used for all items when nothing else is specified.
    pub color: ColorLike,
    /// Per-item colors.
    pub colors: Option<ColorsSpec>,
    /// Grouping key of every item.
    pub ids: Option<Vec<K>>,
    /// Colors of the item groups.
    pub id_colors: Option<IdColors<K>>,
}

impl<K> ColorStyle<K> {
    /// Creates a style with the given default color.
    pub fn new(color: impl Into<ColorLike>) -> Self {
        Self {
            color: color.into(),
            colors: None,
            ids: None,
            id_colors: None,
        }
    }

    /// Sets per-item colors.
    pub fn with_colors(mut self, colors: impl Into<ColorsSpec>) -> Self {
        self.colors = Some(colors.into());
        self
    }

    /// Sets grouping keys of the items.
    pub fn with_ids(mut self, ids: impl IntoIterator<Item = K>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    /// Sets colors of the item groups.
    pub fn with_id_colors(mut self, id_colors: impl Into<IdColors<K>>) -> Self {
        self.id_colors = Some(id_colors.into());
        self
    }

    /// Grouping keys of the items, if set.
    pub fn ids(&self) -> Option<&[K]> {
        self.ids.as_deref()
    }
}

impl<K: Hash + Eq + Clone + Debug> ColorStyle<K> {
    /// Resolves the colors of `count` items.
    pub fn resolve(&self, count: usize) -> Result<Vec<Color>, LandfallError> {
        resolve_colors(
            count,
            self.colors.as_ref(),
            &self.color,
            self.ids(),
            self.id_colors.as_ref(),
        )
    }
}

impl<K> Default for ColorStyle<K> {
    fn default() -> Self {
        Self::new(Color::RED)
    }
}

/// Fill color styling of polygons and circles.
#[derive(Debug, Clone)]
pub struct FillStyle<K = String> {
    /// Fill used for all items when nothing else is specified.
    pub fill_color: ColorLike,
    /// Per-item fills.
    pub fill_colors: Option<ColorsSpec>,
    /// Fill with the border color.
    pub fill_same: bool,
    /// Fill with the border color using this alpha value.
    pub fill_transparency: Option<u8>,
    /// Fills of the item groups. The grouping keys are taken from the [`ColorStyle`].
    pub id_fill_colors: Option<IdColors<K>>,
}

impl<K> FillStyle<K> {
    /// Creates a style with the given default fill color.
    pub fn new(fill_color: impl Into<ColorLike>) -> Self {
        Self {
            fill_color: fill_color.into(),
            fill_colors: None,
            fill_same: false,
            fill_transparency: None,
            id_fill_colors: None,
        }
    }

    /// Sets per-item fills.
    pub fn with_fill_colors(mut self, fill_colors: impl Into<ColorsSpec>) -> Self {
        self.fill_colors = Some(fill_colors.into());
        self
    }

    /// Fills every item with its border color.
    pub fn with_fill_same(mut self, fill_same: bool) -> Self {
        self.fill_same = fill_same;
        self
    }

    /// Fills every item with its border color with the given alpha.
    pub fn with_fill_transparency(mut self, alpha: u8) -> Self {
        self.fill_transparency = Some(alpha);
        self
    }

    /// Sets fills of the item groups.
    pub fn with_id_fill_colors(mut self, id_fill_colors: impl Into<IdColors<K>>) -> Self {
        self.id_fill_colors = Some(id_fill_colors.into());
        self
    }
}

impl<K: Hash + Eq + Clone + Debug> FillStyle<K> {
    /// Resolves fills of `count` items with the given border colors and item ids.
    pub fn resolve(
        &self,
        count: usize,
        border_colors: &[Color],
        ids: Option<&[K]>,
    ) -> Result<Vec<Color>, LandfallError> {
        resolve_fill_colors(count, border_colors, ids, self)
    }
}

impl<K> Default for FillStyle<K> {
    fn default() -> Self {
        Self::new(Color::TRANSPARENT_RED)
    }
}

pub(crate) fn check_len(
    what: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), LandfallError> {
    if expected == actual {
        Ok(())
    } else {
        Err(LandfallError::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}

fn unique_ids<K: Hash + Eq>(ids: &[K]) -> Vec<&K> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().filter(|id| seen.insert(*id)).collect()
}

fn cycle_to(colors: Vec<Color>, count: usize) -> Vec<Color> {
    if colors.len() >= count {
        return colors;
    }

    log::debug!(
        "Palette produced {} unique colors for {count} items, repeating them",
        colors.len()
    );
    colors.iter().copied().cycle().take(count).collect()
}
