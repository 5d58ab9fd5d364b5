pub mod dash;
pub mod database;
pub mod event;
pub mod lane;
pub mod series;

pub use dash::{Dash, DashRecord, MissingFieldError};
pub use database::{Column, EventDatabase, GanttDatabase, SeriesDatabase};
pub use event::Event;
pub use lane::Lane;
pub use series::{Axis, AxisSpec, ColumnSpec, Series, SeriesHeader};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
    #[error("axis spec names unknown column `{name}`")]
    UnknownColumn { name: String },
    #[error("column `{name}` has {found} values, expected {expected}")]
    ColumnLength {
        name: String,
        expected: usize,
        found: usize,
    },
}
