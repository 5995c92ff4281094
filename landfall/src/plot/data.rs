//! Points stored as named data columns.

use ahash::HashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::ColorLike;
use crate::error::LandfallError;
use crate::plot::points::plot_points;
use crate::plot::PlotOptions;
use crate::render::RenderedImage;
use crate::style::{ColorStyle, ColorsSpec};
use crate::Context;

/// Values of a data column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Column {
    /// Numeric values.
    Numbers(Vec<f64>),
    /// String values.
    Text(Vec<String>),
}

impl Column {
    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Numbers(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    /// Returns true if the column has no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values as strings. Numbers are formatted with their shortest representation.
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Column::Numbers(values) => values.iter().map(|v| v.to_string()).collect(),
            Column::Text(values) => values.clone(),
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(value: Vec<f64>) -> Self {
        Self::Numbers(value)
    }
}

impl From<Vec<String>> for Column {
    fn from(value: Vec<String>) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<&str>> for Column {
    fn from(value: Vec<&str>) -> Self {
        Self::Text(value.into_iter().map(String::from).collect())
    }
}

/// Table of named columns.
///
/// With the `serde` feature a table can be read from a JSON object mapping column names to
/// arrays of numbers or strings.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DataTable {
    columns: HashMap<String, Column>,
}

impl DataTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, replacing the one with the same name.
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Self {
        self.insert(name, column);
        self
    }

    /// Adds a column, replacing the one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, column: impl Into<Column>) {
        self.columns.insert(name.into(), column.into());
    }

    /// Returns true if the table has a column with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column by name.
    pub fn column(&self, name: &str) -> Result<&Column, LandfallError> {
        self.columns
            .get(name)
            .ok_or_else(|| LandfallError::MissingColumn(name.to_string()))
    }

    /// Values of a numeric column.
    pub fn numbers(&self, name: &str) -> Result<&[f64], LandfallError> {
        match self.column(name)? {
            Column::Numbers(values) => Ok(values),
            Column::Text(_) => Err(LandfallError::ColumnType {
                name: name.to_string(),
                expected: "numbers",
            }),
        }
    }

    /// Values of a column of color names or hex literals.
    pub fn colors(&self, name: &str) -> Result<Vec<ColorLike>, LandfallError> {
        match self.column(name)? {
            Column::Text(values) => Ok(values
                .iter()
                .map(|v| ColorLike::from(v.as_str()))
                .collect()),
            Column::Numbers(_) => Err(LandfallError::ColumnType {
                name: name.to_string(),
                expected: "color strings",
            }),
        }
    }
}

/// Names of the columns to take point data from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointColumns {
    /// Column with latitudes.
    pub latitude: String,
    /// Column with longitudes.
    pub longitude: String,
    /// Column with point colors.
    pub color: Option<String>,
    /// Column with point grouping keys.
    pub ids: Option<String>,
}

impl PointColumns {
    /// Creates columns selection with coordinates columns only.
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            color: None,
            ids: None,
        }
    }

    /// Sets the column with point colors.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the column with grouping keys.
    pub fn with_ids(mut self, ids: impl Into<String>) -> Self {
        self.ids = Some(ids.into());
        self
    }
}

/// Plots points stored in the data table.
///
/// Colors from the color column replace `colors` of the `style`, values of the ids column (as
/// strings) replace its `ids`. The rest of the style applies as given.
pub fn plot_points_data(
    context: &mut Context,
    data: &DataTable,
    columns: &PointColumns,
    style: &ColorStyle<String>,
    point_size: u32,
    options: &PlotOptions,
) -> Result<RenderedImage, LandfallError> {
    let lats = data.numbers(&columns.latitude)?;
    let lons = data.numbers(&columns.longitude)?;

    let mut style = style.clone();
    if let Some(color) = &columns.color {
        style.colors = Some(ColorsSpec::List(data.colors(color)?));
    }
    if let Some(ids) = &columns.ids {
        style.ids = Some(data.column(ids)?.to_strings());
    }

    plot_points(context, lats, lons, &style, point_size, options)
}
