use tracklane_protocol::{LineStyle, Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport};

use super::format_value;
use crate::layout::TimeRange;

const MAJOR_TICK_HEIGHT: f64 = 8.0;
const MINOR_TICK_HEIGHT: f64 = 4.0;
const FONT_SIZE: f64 = 10.0;
const MIN_MAJOR_SPACING_PX: f64 = 80.0;

/// Render a date axis ruler along the top of `viewport`, with major ticks,
/// labels, minor ticks, and vertical gridlines reaching `grid_height`
/// upwards from the axis line over the panels above it.
pub fn render_time_axis(
    viewport: &Viewport,
    window: TimeRange,
    grid_height: f64,
) -> Vec<RenderCommand> {
    let duration = window.duration();
    if duration <= 0.0 || viewport.width <= 0.0 {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(64);
    let axis_y = viewport.y;

    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(viewport.x, axis_y, viewport.width, viewport.height),
        color: ThemeToken::Background,
        border_color: None,
        label: None,
    });
    commands.push(RenderCommand::DrawLine {
        from: Point::new(viewport.x, axis_y),
        to: Point::new(viewport.x + viewport.width, axis_y),
        color: ThemeToken::AxisLine,
        width: 1.0,
        style: LineStyle::Solid,
    });

    let (major, subdivisions) = nice_interval(duration, viewport.width);
    let minor = major / subdivisions as f64;

    for t in ticks(window, minor) {
        if is_aligned(t, major) {
            continue;
        }
        let x = viewport.time_to_x(t, window.start, window.end);
        commands.push(RenderCommand::DrawLine {
            from: Point::new(x, axis_y),
            to: Point::new(x, axis_y + MINOR_TICK_HEIGHT),
            color: ThemeToken::AxisLine,
            width: 0.5,
            style: LineStyle::Solid,
        });
    }

    for t in ticks(window, major) {
        let x = viewport.time_to_x(t, window.start, window.end);
        commands.push(RenderCommand::DrawLine {
            from: Point::new(x, axis_y),
            to: Point::new(x, axis_y + MAJOR_TICK_HEIGHT),
            color: ThemeToken::AxisLine,
            width: 1.0,
            style: LineStyle::Solid,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x, axis_y + MAJOR_TICK_HEIGHT + FONT_SIZE + 2.0),
            text: format_value(t),
            color: ThemeToken::TickText,
            font_size: FONT_SIZE,
            align: TextAlign::Center,
            rotation: 0.0,
        });

        if grid_height > 0.0 {
            commands.push(RenderCommand::DrawLine {
                from: Point::new(x, axis_y - grid_height),
                to: Point::new(x, axis_y),
                color: ThemeToken::GridLine,
                width: 0.5,
                style: LineStyle::Dashed,
            });
        }
    }

    commands
}

/// Multiples of `interval` inside the window.
fn ticks(window: TimeRange, interval: f64) -> impl Iterator<Item = f64> {
    let first = (window.start / interval).ceil() as i64;
    let last = (window.end / interval + 1e-9).floor() as i64;
    (first..=last).map(move |k| k as f64 * interval)
}

fn is_aligned(t: f64, interval: f64) -> bool {
    let offset = t / interval;
    (offset - offset.round()).abs() < 0.001
}

/// Choose a major tick interval from the 1-2-5 series so that labels sit
/// roughly `MIN_MAJOR_SPACING_PX` apart. Returns (interval, subdivisions).
fn nice_interval(duration: f64, width_px: f64) -> (f64, u32) {
    let target_count = (width_px / MIN_MAJOR_SPACING_PX).max(2.0);
    let raw = duration / target_count;
    let magnitude = 10.0_f64.powf(raw.log10().floor());

    for (step, subdivisions) in [(1.0, 2), (2.0, 2), (5.0, 5), (10.0, 2)] {
        let interval = step * magnitude;
        if interval >= raw * (1.0 - 1e-9) {
            return (interval, subdivisions);
        }
    }
    (10.0 * magnitude, 2)
}
