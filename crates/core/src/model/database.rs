use serde::{Deserialize, Serialize};

use super::series::finite_range;
use super::{
    Axis, AxisSpec, Dash, DashRecord, Event, Lane, MissingFieldError, ModelError, Series,
    SeriesHeader,
};
use crate::layout::{max_overlap, pack};

/// The intervals of one gantt chart, sorted by start time.
///
/// Sorting is stable, so intervals with equal starts keep their input
/// order; the packer and the overlap engine both rely on that tie-break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttDatabase {
    pub title: String,
    dashes: Vec<Dash>,
}

impl GanttDatabase {
    pub fn new(title: impl Into<String>, mut dashes: Vec<Dash>) -> Self {
        dashes.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self {
            title: title.into(),
            dashes,
        }
    }

    /// Build from raw records, failing on the first record that lacks a
    /// required field.
    pub fn from_records(
        title: impl Into<String>,
        records: Vec<DashRecord>,
    ) -> Result<Self, MissingFieldError> {
        let dashes = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Dash::try_from_record(index, record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(title, dashes))
    }

    pub fn dashes(&self) -> &[Dash] {
        &self.dashes
    }

    pub fn len(&self) -> usize {
        self.dashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dashes.is_empty()
    }

    /// Display lanes for this chart.
    pub fn lanes(&self) -> Vec<Lane> {
        pack(&self.dashes)
    }

    /// Maximum number of lanes in use at any instant.
    pub fn max_overlaps(&self) -> usize {
        max_overlap(&self.dashes)
    }

    /// Earliest start; the left edge of the chart.
    pub fn min_date(&self) -> Option<f64> {
        self.min_start_date()
    }

    /// Latest rendered end; the right edge of the chart.
    pub fn max_date(&self) -> Option<f64> {
        finite_range(self.dashes.iter().map(Dash::rendered_end)).map(|(_, hi)| hi)
    }

    pub fn min_start_date(&self) -> Option<f64> {
        finite_range(self.dashes.iter().map(|d| d.start)).map(|(lo, _)| lo)
    }

    /// Start of the last interval to be started.
    pub fn max_start_date(&self) -> Option<f64> {
        finite_range(self.dashes.iter().map(|d| d.start)).map(|(_, hi)| hi)
    }

    /// End of the first interval to end.
    pub fn min_end_date(&self) -> Option<f64> {
        finite_range(self.dashes.iter().map(|d| d.end)).map(|(lo, _)| lo)
    }

    pub fn max_end_date(&self) -> Option<f64> {
        finite_range(self.dashes.iter().map(|d| d.end)).map(|(_, hi)| hi)
    }
}

/// A named numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// A table of numeric columns keyed by a date column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDatabase {
    pub title: String,
    dates: Vec<f64>,
    columns: Vec<Column>,
    series: Vec<Series>,
    pub primary: AxisSpec,
    pub secondary: AxisSpec,
}

impl SeriesDatabase {
    /// Assemble the table and resolve its series.
    ///
    /// Columns named by the header's primary axis come first, then those
    /// of the secondary axis, then every remaining column on the primary
    /// axis with a solid line. A column is never emitted twice.
    pub fn new(
        title: impl Into<String>,
        dates: Vec<f64>,
        columns: Vec<Column>,
        header: SeriesHeader,
    ) -> Result<Self, ModelError> {
        for column in &columns {
            if column.values.len() != dates.len() {
                return Err(ModelError::ColumnLength {
                    name: column.name.clone(),
                    expected: dates.len(),
                    found: column.values.len(),
                });
            }
        }

        let primary = header.primary_axis.unwrap_or_default();
        let secondary = header.secondary_axis.unwrap_or_default();

        let mut series: Vec<Series> = Vec::with_capacity(columns.len());
        let assigned = primary
            .columns
            .iter()
            .map(|spec| (spec, Axis::Primary))
            .chain(secondary.columns.iter().map(|spec| (spec, Axis::Secondary)));
        for (spec, axis) in assigned {
            if series.iter().any(|s| s.name == spec.name) {
                continue;
            }
            let column = columns
                .iter()
                .find(|c| c.name == spec.name)
                .ok_or_else(|| ModelError::UnknownColumn {
                    name: spec.name.clone(),
                })?;
            series.push(Series {
                name: column.name.clone(),
                dates: dates.clone(),
                values: column.values.clone(),
                axis,
                style: spec.style,
            });
        }
        for column in &columns {
            if series.iter().any(|s| s.name == column.name) {
                continue;
            }
            series.push(Series {
                name: column.name.clone(),
                dates: dates.clone(),
                values: column.values.clone(),
                axis: Axis::Primary,
                style: Default::default(),
            });
        }

        Ok(Self {
            title: title.into(),
            dates,
            columns,
            series,
            primary,
            secondary,
        })
    }

    /// Number of rows.
    pub fn num_items(&self) -> usize {
        self.dates.len()
    }

    pub fn all_dates(&self) -> &[f64] {
        &self.dates
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn axis_spec(&self, axis: Axis) -> &AxisSpec {
        match axis {
            Axis::Primary => &self.primary,
            Axis::Secondary => &self.secondary,
        }
    }

    pub fn min_date(&self) -> Option<f64> {
        finite_range(self.dates.iter().copied()).map(|(lo, _)| lo)
    }

    pub fn max_date(&self) -> Option<f64> {
        finite_range(self.dates.iter().copied()).map(|(_, hi)| hi)
    }
}

/// A collection of events in file order. Several events may share a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDatabase {
    pub title: String,
    events: Vec<Event>,
}

impl EventDatabase {
    pub fn new(title: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            title: title.into(),
            events,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn num_items(&self) -> usize {
        self.events.len()
    }

    pub fn all_dates(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.date).collect()
    }

    pub fn min_date(&self) -> Option<f64> {
        finite_range(self.events.iter().map(|e| e.date)).map(|(lo, _)| lo)
    }

    pub fn max_date(&self) -> Option<f64> {
        finite_range(self.events.iter().map(|e| e.date)).map(|(_, hi)| hi)
    }
}
