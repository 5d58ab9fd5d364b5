use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::model::{
    Column, DashRecord, Event, EventDatabase, GanttDatabase, MissingFieldError, ModelError,
    SeriesDatabase, SeriesHeader,
};

#[derive(Debug, Error)]
pub enum CsvParseError {
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("axis header block: {0}")]
    Header(#[source] serde_json::Error),
    #[error("row {row}, column {column}: `{value}` is not a number")]
    Number {
        row: usize,
        column: usize,
        value: String,
    },
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A row is a header when none of its cells is a number.
pub fn is_header(record: &StringRecord) -> bool {
    !record.iter().any(|cell| cell.parse::<f64>().is_ok())
}

/// Split an optional leading JSON object off the text.
///
/// Returns the parsed header (default when absent) and the remaining CSV
/// body.
pub fn split_header(text: &str) -> Result<(SeriesHeader, &str), CsvParseError> {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('{') {
        return Ok((SeriesHeader::default(), text));
    }

    let mut stream = serde_json::Deserializer::from_str(trimmed).into_iter::<SeriesHeader>();
    let header = match stream.next() {
        Some(Ok(header)) => header,
        Some(Err(e)) => return Err(CsvParseError::Header(e)),
        None => SeriesHeader::default(),
    };
    let body = &trimmed[stream.byte_offset()..];
    Ok((header, body))
}

/// Read all records, dropping a leading header row if there is one.
fn read_rows(body: &str) -> Result<(Option<StringRecord>, Vec<StringRecord>), CsvParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(body.trim_start().as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(record);
    }

    match rows.first() {
        Some(first) if is_header(first) => {
            let header = rows.remove(0);
            Ok((Some(header), rows))
        }
        _ => Ok((None, rows)),
    }
}

fn number(row: usize, column: usize, cell: &str) -> Result<f64, CsvParseError> {
    cell.parse().map_err(|_| CsvParseError::Number {
        row,
        column,
        value: cell.to_string(),
    })
}

/// A cell that may be left empty; empty means absent.
fn optional_number(row: usize, column: usize, cell: Option<&str>) -> Result<Option<f64>, CsvParseError> {
    match cell {
        None | Some("") => Ok(None),
        Some(cell) => number(row, column, cell).map(Some),
    }
}

/// A lane cell: empty, or a whole number that fits an `i64`.
fn optional_lane(row: usize, column: usize, cell: Option<&str>) -> Result<Option<i64>, CsvParseError> {
    let Some(value) = optional_number(row, column, cell)? else {
        return Ok(None);
    };
    // 2^63 is exactly representable, so this bounds the `as` cast below.
    if value.fract() != 0.0 || value.abs() >= 9_223_372_036_854_775_808.0 {
        return Err(CsvParseError::Number {
            row,
            column,
            value: cell.unwrap_or_default().to_string(),
        });
    }
    Ok(Some(value as i64))
}

/// Parse a gantt CSV: `label,start,end[,column[,extendTo]]`, header
/// optional.
pub fn parse_gantt_csv(data: &[u8], title: &str) -> Result<GanttDatabase, CsvParseError> {
    let text = std::str::from_utf8(data)?;
    let (_, rows) = read_rows(text)?;

    let mut records = Vec::with_capacity(rows.len());
    for (row, record) in rows.iter().enumerate() {
        let label = record.get(0).filter(|s| !s.is_empty()).map(String::from);
        let column = optional_lane(row, 3, record.get(3))?;
        records.push(DashRecord {
            label,
            start: optional_number(row, 1, record.get(1))?,
            end: optional_number(row, 2, record.get(2))?,
            column,
            extend_to: optional_number(row, 4, record.get(4))?,
        });
    }

    Ok(GanttDatabase::from_records(title, records)?)
}

/// Parse a numeric table: a date column followed by one or more value
/// columns, header optional, with an optional JSON axis block in front.
///
/// Without a header the value columns are named by position, starting at
/// "1". Empty cells become NaN and are skipped when drawing.
pub fn parse_series_csv(data: &[u8], title: &str) -> Result<SeriesDatabase, CsvParseError> {
    let text = std::str::from_utf8(data)?;
    let (axes, body) = split_header(text)?;
    let (header, rows) = read_rows(body)?;

    let width = header
        .as_ref()
        .map(StringRecord::len)
        .into_iter()
        .chain(rows.iter().map(StringRecord::len))
        .max()
        .unwrap_or(0);
    let names: Vec<String> = (1..width)
        .map(|i| {
            header
                .as_ref()
                .and_then(|h| h.get(i))
                .filter(|s| !s.is_empty())
                .map_or_else(|| i.to_string(), String::from)
        })
        .collect();

    let mut dates = Vec::with_capacity(rows.len());
    let mut values: Vec<Vec<f64>> = vec![Vec::with_capacity(rows.len()); names.len()];
    for (row, record) in rows.iter().enumerate() {
        dates.push(number(row, 0, record.get(0).unwrap_or(""))?);
        for (i, column) in values.iter_mut().enumerate() {
            let value = optional_number(row, i + 1, record.get(i + 1))?;
            column.push(value.unwrap_or(f64::NAN));
        }
    }

    let columns = names
        .into_iter()
        .zip(values)
        .map(|(name, values)| Column { name, values })
        .collect();
    Ok(SeriesDatabase::new(title, dates, columns, axes)?)
}

/// Parse an event CSV: `date,brief`, header optional.
pub fn parse_events_csv(data: &[u8], title: &str) -> Result<EventDatabase, CsvParseError> {
    let text = std::str::from_utf8(data)?;
    let (_, rows) = read_rows(text)?;

    let mut events = Vec::with_capacity(rows.len());
    for (row, record) in rows.iter().enumerate() {
        let date = optional_number(row, 0, record.get(0))?.ok_or(MissingFieldError {
            index: row,
            field: "date",
        })?;
        let brief = record
            .get(1)
            .filter(|s| !s.is_empty())
            .ok_or(MissingFieldError {
                index: row,
                field: "brief",
            })?;
        events.push(Event::new(date, brief));
    }
    Ok(EventDatabase::new(title, events))
}
