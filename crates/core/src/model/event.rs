use serde::{Deserialize, Serialize};

/// A labeled point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub date: f64,
    /// A brief description, used as the event's label.
    pub brief: String,
}

impl Event {
    pub fn new(date: f64, brief: impl Into<String>) -> Self {
        Self {
            date,
            brief: brief.into(),
        }
    }
}
