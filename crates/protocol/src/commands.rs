use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// Chart views emit a `Vec<RenderCommand>` per panel. Backends consume the
/// list sequentially; each command carries all the data it needs, in
/// absolute figure coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle, optionally with a hover label.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        label: Option<String>,
    },

    /// Draw a text string at a position, rotated counter-clockwise by
    /// `rotation` degrees around the anchor.
    DrawText {
        position: Point,
        text: String,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
        rotation: f64,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
        style: LineStyle,
    },

    /// Draw an open polyline through `points`.
    DrawPolyline {
        points: Vec<Point>,
        color: ThemeToken,
        width: f64,
        style: LineStyle,
    },

    /// Fill a closed polygon.
    FillPolygon { points: Vec<Point>, color: ThemeToken },

    /// Draw a small filled circle (event markers).
    DrawDot {
        center: Point,
        radius: f64,
        color: ThemeToken,
    },

    /// Begin a logical group (one panel or track). Backends may use this
    /// for layering or accessibility.
    BeginGroup { id: String, label: Option<String> },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Stroke pattern for lines and polylines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

impl RenderCommand {
    /// Whether this command paints anything (as opposed to grouping).
    pub fn is_drawing(&self) -> bool {
        !matches!(self, Self::BeginGroup { .. } | Self::EndGroup)
    }
}
