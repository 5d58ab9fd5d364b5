use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A required field was absent from an interval record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {index}: missing required field `{field}`")]
pub struct MissingFieldError {
    /// Position of the record in its source collection.
    pub index: usize,
    pub field: &'static str,
}

/// One interval record as it arrives from a chart definition, before
/// required fields have been checked.
///
/// Every field is optional at this level so that a missing `label`,
/// `start` or `end` surfaces as a [`MissingFieldError`] naming the field
/// instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashRecord {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    /// Requested display lane.
    #[serde(default)]
    pub column: Option<i64>,
    #[serde(default)]
    pub extend_to: Option<f64>,
}

/// Highest lane an interval can be pinned to. Larger requests are clamped
/// here, since the packer materialises every lane up to the highest pin.
pub const MAX_LANE: usize = 1023;

/// A labeled time interval on a gantt chart.
///
/// The logical span is `[start, end]`; when `extend_to` is present the
/// bar continues past `end` with distinct styling, and layout treats
/// `[start, rendered_end())` as the occupied span. Nothing here checks
/// that `start <= end` or `extend_to >= end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dash {
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub extend_to: Option<f64>,
    /// Pinned display lane. `None` means the packer chooses.
    pub lane: Option<usize>,
}

impl Dash {
    /// A free interval with no extension.
    pub fn new(label: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            label: label.into(),
            start,
            end,
            extend_to: None,
            lane: None,
        }
    }

    /// Pin this interval to a display lane, at most [`MAX_LANE`].
    pub fn pinned(mut self, lane: usize) -> Self {
        self.lane = Some(lane.min(MAX_LANE));
        self
    }

    /// Extend the rendered bar to `extend_to`.
    pub fn extended(mut self, extend_to: f64) -> Self {
        self.extend_to = Some(extend_to);
        self
    }

    /// Build an interval from a raw record.
    ///
    /// `index` is the record's position in its collection and is only used
    /// for error reporting. An out-of-range `column` is not rejected: a
    /// negative one is clamped to lane 0 and one past [`MAX_LANE`] to
    /// [`MAX_LANE`], with a warning either way.
    pub fn try_from_record(index: usize, record: DashRecord) -> Result<Self, MissingFieldError> {
        let missing = |field| MissingFieldError { index, field };
        let label = record.label.ok_or_else(|| missing("label"))?;
        let start = record.start.ok_or_else(|| missing("start"))?;
        let end = record.end.ok_or_else(|| missing("end"))?;

        let lane = record.column.map(|column| match usize::try_from(column) {
            Err(_) => {
                tracing::warn!(index, column, "negative column, placing in lane 0");
                0
            }
            Ok(lane) if lane > MAX_LANE => {
                tracing::warn!(index, column, max = MAX_LANE, "column past the last lane, clamping");
                MAX_LANE
            }
            Ok(lane) => lane,
        });

        Ok(Self {
            label,
            start,
            end,
            extend_to: record.extend_to,
            lane,
        })
    }

    /// The visual end of the bar: `extend_to` if present, else `end`.
    pub fn rendered_end(&self) -> f64 {
        self.extend_to.unwrap_or(self.end)
    }

    /// Logical duration, `end - start`.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Duration including the extension.
    pub fn rendered_duration(&self) -> f64 {
        self.rendered_end() - self.start
    }

    pub fn is_pinned(&self) -> bool {
        self.lane.is_some()
    }
}

impl std::fmt::Display for Dash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, started {}, ended {}", self.label, self.start, self.end)
    }
}
