use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracklane_protocol::Theme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("figure size must be positive, got {width}x{height}")]
    Size { width: f64, height: f64 },
}

/// Space reserved around the plot area for axis labels and titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 24.0,
            right: 56.0,
            bottom: 8.0,
            left: 56.0,
        }
    }
}

/// Figure rendering options. Every field has a default, so a config
/// file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
    pub theme: Theme,
    /// Vertical space between neighbouring panels.
    pub panel_gap: f64,
    pub margins: Margins,
    /// Height of the shared date axis under the last panel.
    pub axis_height: f64,
    /// Draw gantt lane 0 as the top row instead of the bottom one.
    pub lane_zero_on_top: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            theme: Theme::Light,
            panel_gap: 16.0,
            margins: Margins::default(),
            axis_height: 28.0,
            lane_zero_on_top: true,
        }
    }
}

impl RenderConfig {
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width > 0.0 && self.height > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::Size {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Height left for panels once margins and the date axis are taken.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom - self.axis_height).max(0.0)
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }
}
