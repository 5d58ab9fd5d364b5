use tracklane_protocol::{
    BAR_PALETTE, Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport,
};

use crate::layout::TimeRange;
use crate::model::{Dash, Lane};

/// Fraction of the lane stride covered by a bar; the rest is spacing.
const BAR_FILL: f64 = 0.9;
/// Bars start their label a third of the way along.
const LABEL_POSITION: f64 = 0.33;
const FONT_SIZE: f64 = 11.0;
const MIN_RECT_WIDTH: f64 = 0.5;

/// Colors for the bars of one lane.
///
/// Each lane starts at a different palette entry and cycles from there,
/// so neighbouring bars in a lane never share a color.
fn lane_colors(lane_index: usize) -> impl Iterator<Item = ThemeToken> {
    BAR_PALETTE
        .iter()
        .copied()
        .cycle()
        .skip(lane_index % BAR_PALETTE.len())
}

/// Render packed gantt lanes as horizontal bars.
///
/// Every lane gets an equal share of the viewport height. With
/// `lane_zero_on_top` lane 0 is the top row; otherwise rows are stacked
/// upwards from the bottom edge. An interval's extension past its logical
/// end is drawn as a second rect with `ThemeToken::BarExtension`.
pub fn render_gantt_track(
    title: &str,
    lanes: &[Lane],
    viewport: &Viewport,
    window: TimeRange,
    lane_zero_on_top: bool,
) -> Vec<RenderCommand> {
    if lanes.is_empty() || window.duration() <= 0.0 || viewport.height <= 0.0 {
        return Vec::new();
    }

    let stride = viewport.height / lanes.len() as f64;
    let bar_height = stride * BAR_FILL;
    let dash_count: usize = lanes.iter().map(Lane::len).sum();
    let mut commands = Vec::with_capacity(dash_count * 3 + 4);

    commands.push(RenderCommand::BeginGroup {
        id: "gantt".into(),
        label: Some(title.to_string()),
    });
    commands.push(RenderCommand::DrawRect {
        rect: viewport.bounds(),
        color: ThemeToken::PanelBackground,
        border_color: Some(ThemeToken::PanelBorder),
        label: None,
    });

    for (index, lane) in lanes.iter().enumerate() {
        let row = if lane_zero_on_top {
            index
        } else {
            lanes.len() - 1 - index
        };
        let y = viewport.y + stride * row as f64 + (stride - bar_height) / 2.0;

        for (dash, color) in lane.dashes().iter().zip(lane_colors(index)) {
            push_dash(&mut commands, dash, color, viewport, window, y, bar_height);
        }
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

fn push_dash(
    commands: &mut Vec<RenderCommand>,
    dash: &Dash,
    color: ThemeToken,
    viewport: &Viewport,
    window: TimeRange,
    y: f64,
    height: f64,
) {
    let x_of = |t: f64| {
        viewport
            .time_to_x(t, window.start, window.end)
            .clamp(viewport.x, viewport.x + viewport.width)
    };

    let (x0, x1) = (x_of(dash.start), x_of(dash.end));
    if x1 - x0 >= MIN_RECT_WIDTH {
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x0, y, x1 - x0, height),
            color,
            border_color: None,
            label: Some(dash.to_string()),
        });
    }

    if let Some(extend_to) = dash.extend_to {
        let (e0, e1) = (x_of(dash.end), x_of(extend_to));
        if e1 - e0 >= MIN_RECT_WIDTH {
            commands.push(RenderCommand::DrawRect {
                rect: Rect::new(e0, y, e1 - e0, height),
                color: ThemeToken::BarExtension,
                border_color: Some(color),
                label: Some(format!("{} (extended to {extend_to})", dash.label)),
            });
        }
    }

    let label_t = dash.start + dash.duration() * LABEL_POSITION;
    if label_t >= window.start && label_t <= window.end {
        commands.push(RenderCommand::DrawText {
            position: Point::new(x_of(label_t), y + height / 2.0 + FONT_SIZE / 3.0),
            text: dash.label.clone(),
            color: ThemeToken::BarLabel,
            font_size: FONT_SIZE,
            align: TextAlign::Left,
            rotation: 0.0,
        });
    }
}
