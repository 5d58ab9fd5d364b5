use tracklane_protocol::{LineStyle, Point, RenderCommand, TextAlign, ThemeToken, Viewport};

use super::format_value;
use crate::layout::TimeRange;
use crate::model::{Axis, AxisSpec, Series, SeriesDatabase, series::finite_range};

const FONT_SIZE: f64 = 10.0;
const LEGEND_LINE_HEIGHT: f64 = 13.0;
const LEGEND_PADDING: f64 = 4.0;
const LINE_WIDTH: f64 = 1.5;

/// Resolved y-bounds for one axis.
fn axis_bounds(spec: &AxisSpec, series: &[&Series]) -> (f64, f64) {
    let data = finite_range(series.iter().flat_map(|s| s.values.iter().copied()));
    spec.bounds(data)
}

/// Split a series into polylines at missing (non-finite) values.
fn segments(
    series: &Series,
    viewport: &Viewport,
    window: TimeRange,
    (lo, hi): (f64, f64),
) -> Vec<Vec<Point>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for (date, value) in series.points() {
        if !date.is_finite() || !value.is_finite() {
            if current.len() > 1 {
                out.push(std::mem::take(&mut current));
            }
            current.clear();
            continue;
        }
        current.push(Point::new(
            viewport.time_to_x(date, window.start, window.end),
            viewport.value_to_y(value, lo, hi),
        ));
    }
    if current.len() > 1 {
        out.push(current);
    }
    out
}

/// Render a series table as line charts.
///
/// Primary-axis series are scaled against the left axis, secondary ones
/// against the right. Axis bounds come from the table's axis block when
/// given, otherwise from the data. Primary series are listed in a legend
/// at the upper left, secondary ones at the upper right.
pub fn render_line_track(
    db: &SeriesDatabase,
    viewport: &Viewport,
    window: TimeRange,
) -> Vec<RenderCommand> {
    if db.series().is_empty() || window.duration() <= 0.0 {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(db.series().len() * 3 + 8);
    commands.push(RenderCommand::BeginGroup {
        id: "line".into(),
        label: Some(db.title.clone()),
    });
    commands.push(RenderCommand::DrawRect {
        rect: viewport.bounds(),
        color: ThemeToken::PanelBackground,
        border_color: Some(ThemeToken::PanelBorder),
        label: None,
    });

    for axis in [Axis::Primary, Axis::Secondary] {
        let on_axis: Vec<&Series> = db.series().iter().filter(|s| s.axis == axis).collect();
        if on_axis.is_empty() {
            continue;
        }
        let spec = db.axis_spec(axis);
        let bounds = axis_bounds(spec, &on_axis);

        push_axis_labels(&mut commands, viewport, axis, spec, bounds);

        for series in &on_axis {
            let color = series_color(db, series);
            for points in segments(series, viewport, window, bounds) {
                commands.push(RenderCommand::DrawPolyline {
                    points,
                    color,
                    width: LINE_WIDTH,
                    style: series.style,
                });
            }
        }

        push_legend(&mut commands, db, viewport, axis, &on_axis);
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

/// Colors follow table order so a column keeps its color whichever axis
/// it lands on.
fn series_color(db: &SeriesDatabase, series: &Series) -> ThemeToken {
    let index = db
        .series()
        .iter()
        .position(|s| s.name == series.name)
        .unwrap_or(0);
    ThemeToken::series(index)
}

fn push_axis_labels(
    commands: &mut Vec<RenderCommand>,
    viewport: &Viewport,
    axis: Axis,
    spec: &AxisSpec,
    (lo, hi): (f64, f64),
) {
    let (x, align) = match axis {
        Axis::Primary => (viewport.x - 4.0, TextAlign::Right),
        Axis::Secondary => (viewport.x + viewport.width + 4.0, TextAlign::Left),
    };

    let mut ticks = vec![lo, hi];
    if let Some(interval) = spec.interval.filter(|i| *i > 0.0 && (hi - lo) / *i <= 100.0) {
        ticks.clear();
        let mut t = (lo / interval).ceil() * interval;
        while t <= hi + interval * 1e-9 {
            ticks.push(t);
            t += interval;
        }
    }

    for tick in ticks {
        let y = viewport.value_to_y(tick, lo, hi);
        if axis == Axis::Primary && tick > lo && tick < hi {
            commands.push(RenderCommand::DrawLine {
                from: Point::new(viewport.x, y),
                to: Point::new(viewport.x + viewport.width, y),
                color: ThemeToken::GridLine,
                width: 0.5,
                style: LineStyle::Solid,
            });
        }
        commands.push(RenderCommand::DrawText {
            position: Point::new(x, y + FONT_SIZE / 3.0),
            text: format_value(tick),
            color: ThemeToken::TickText,
            font_size: FONT_SIZE,
            align,
            rotation: 0.0,
        });
    }
}

fn push_legend(
    commands: &mut Vec<RenderCommand>,
    db: &SeriesDatabase,
    viewport: &Viewport,
    axis: Axis,
    series: &[&Series],
) {
    let (x, align) = match axis {
        Axis::Primary => (viewport.x + LEGEND_PADDING, TextAlign::Left),
        Axis::Secondary => (viewport.x + viewport.width - LEGEND_PADDING, TextAlign::Right),
    };
    for (i, s) in series.iter().enumerate() {
        commands.push(RenderCommand::DrawText {
            position: Point::new(
                x,
                viewport.y + LEGEND_PADDING + LEGEND_LINE_HEIGHT * (i + 1) as f64,
            ),
            text: s.name.clone(),
            color: series_color(db, s),
            font_size: FONT_SIZE,
            align,
            rotation: 0.0,
        });
    }
}
