use serde::{Deserialize, Serialize};
use tracklane_protocol::LineStyle;

/// Which y-axis a series is plotted against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Primary,
    Secondary,
}

/// One numeric column of a series table plus how to display it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub dates: Vec<f64>,
    pub values: Vec<f64>,
    pub axis: Axis,
    pub style: LineStyle,
}

impl Series {
    /// `(date, value)` pairs in table order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    /// Finite `(min, max)` of the values, or `None` if there are none.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        finite_range(self.values.iter().copied())
    }
}

/// Per-column display settings from a series file's axis block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(default)]
    pub style: LineStyle,
}

/// Bounds and column assignments for one y-axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Tick spacing.
    #[serde(default)]
    pub interval: Option<f64>,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl AxisSpec {
    /// Resolve the axis bounds: explicit bounds win, otherwise the data
    /// range is used. A flat range is widened by one unit each way.
    pub fn bounds(&self, data: Option<(f64, f64)>) -> (f64, f64) {
        let (data_lo, data_hi) = data.unwrap_or((0.0, 1.0));
        let lo = self.min.unwrap_or(data_lo);
        let hi = self.max.unwrap_or(data_hi);
        if hi > lo { (lo, hi) } else { (lo - 1.0, hi + 1.0) }
    }
}

/// The JSON block that may precede a series CSV.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesHeader {
    #[serde(default)]
    pub primary_axis: Option<AxisSpec>,
    #[serde(default)]
    pub secondary_axis: Option<AxisSpec>,
}

/// Finite `(min, max)` over an iterator of values.
pub(crate) fn finite_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
