//! Interval model, gantt lane packing, the max-overlap metric, chart
//! parsers and views for tracklane figures.

pub mod config;
pub mod figure;
pub mod layout;
pub mod model;
pub mod parsers;
pub mod svg;
pub mod views;

pub use config::{ConfigError, RenderConfig};
pub use figure::{Figure, Panel};
