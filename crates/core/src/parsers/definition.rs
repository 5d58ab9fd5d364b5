use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{DashRecord, Event, EventDatabase, GanttDatabase, MissingFieldError};

#[derive(Debug, Error)]
pub enum DefinitionParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
    #[error("expected a `{expected}` chart, found `{found}`")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

/// One event record of an `events` chart definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub date: Option<f64>,
    #[serde(default)]
    pub brief: Option<String>,
}

/// A chart definition file.
///
/// ```json
/// { "type": "gantt", "title": "Build", "data": [
///     { "label": "compile", "start": 0, "end": 4, "column": 0 },
///     { "label": "test", "start": 4, "end": 6, "extendTo": 9 } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartDefinition {
    Gantt {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        data: Vec<DashRecord>,
    },
    Events {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        data: Vec<EventRecord>,
    },
}

impl ChartDefinition {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Gantt { .. } => "gantt",
            Self::Events { .. } => "events",
        }
    }
}

pub fn parse_definition(data: &[u8]) -> Result<ChartDefinition, DefinitionParseError> {
    Ok(serde_json::from_slice(data)?)
}

/// Parse a gantt chart definition. `fallback_title` is used when the
/// definition has none.
pub fn parse_gantt_definition(
    data: &[u8],
    fallback_title: &str,
) -> Result<GanttDatabase, DefinitionParseError> {
    match parse_definition(data)? {
        ChartDefinition::Gantt { title, data } => Ok(GanttDatabase::from_records(
            title.unwrap_or_else(|| fallback_title.to_string()),
            data,
        )?),
        other => Err(DefinitionParseError::WrongType {
            expected: "gantt",
            found: other.kind(),
        }),
    }
}

/// Parse an events chart definition.
pub fn parse_events_definition(
    data: &[u8],
    fallback_title: &str,
) -> Result<EventDatabase, DefinitionParseError> {
    match parse_definition(data)? {
        ChartDefinition::Events { title, data } => {
            let events = data
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    let date = record.date.ok_or(MissingFieldError {
                        index,
                        field: "date",
                    })?;
                    let brief = record.brief.ok_or(MissingFieldError {
                        index,
                        field: "brief",
                    })?;
                    Ok(Event::new(date, brief))
                })
                .collect::<Result<Vec<_>, MissingFieldError>>()?;
            Ok(EventDatabase::new(
                title.unwrap_or_else(|| fallback_title.to_string()),
                events,
            ))
        }
        other => Err(DefinitionParseError::WrongType {
            expected: "events",
            found: other.kind(),
        }),
    }
}
