pub mod definition;
pub mod delimited;

use crate::model::{EventDatabase, GanttDatabase, SeriesDatabase};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("chart definition: {0}")]
    Definition(#[from] definition::DefinitionParseError),
    #[error("csv: {0}")]
    Delimited(#[from] delimited::CsvParseError),
}

/// Whether the input looks like a JSON chart definition rather than CSV.
fn is_json_object(data: &[u8]) -> bool {
    data.iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'{')
}

/// Parse gantt data from either a JSON chart definition or a CSV file.
///
/// Detection is by the first non-blank byte: `{` means JSON, anything
/// else is read as `label,start,end[,column[,extendTo]]` rows.
pub fn parse_gantt_auto(data: &[u8], title: &str) -> Result<GanttDatabase, ParseError> {
    if is_json_object(data) {
        return Ok(definition::parse_gantt_definition(data, title)?);
    }
    Ok(delimited::parse_gantt_csv(data, title)?)
}

/// Parse event data from either a JSON chart definition or a CSV file.
pub fn parse_events_auto(data: &[u8], title: &str) -> Result<EventDatabase, ParseError> {
    if is_json_object(data) {
        return Ok(definition::parse_events_definition(data, title)?);
    }
    Ok(delimited::parse_events_csv(data, title)?)
}

/// Parse a numeric series table. A leading `{` here starts the optional
/// axis block, not a chart definition.
pub fn parse_series(data: &[u8], title: &str) -> Result<SeriesDatabase, ParseError> {
    Ok(delimited::parse_series_csv(data, title)?)
}
