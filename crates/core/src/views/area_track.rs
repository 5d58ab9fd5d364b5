use tracklane_protocol::{Point, RenderCommand, TextAlign, ThemeToken, Viewport};

use super::format_value;
use crate::layout::TimeRange;
use crate::model::SeriesDatabase;

const FONT_SIZE: f64 = 10.0;
const LEGEND_LINE_HEIGHT: f64 = 13.0;
const LEGEND_PADDING: f64 = 4.0;

/// Running totals per column: `stacks[k][i]` is the sum of columns
/// `0..=k` at row `i`. Missing values count as zero.
fn cumulative(db: &SeriesDatabase) -> Vec<Vec<f64>> {
    let mut totals = vec![0.0; db.num_items()];
    db.columns()
        .iter()
        .map(|column| {
            for (total, v) in totals.iter_mut().zip(&column.values) {
                if v.is_finite() {
                    *total += v;
                }
            }
            totals.clone()
        })
        .collect()
}

/// Render a series table as a stacked area chart, columns stacked in
/// table order from the baseline up.
pub fn render_area_track(
    db: &SeriesDatabase,
    viewport: &Viewport,
    window: TimeRange,
) -> Vec<RenderCommand> {
    if db.columns().is_empty() || db.num_items() < 2 || window.duration() <= 0.0 {
        return Vec::new();
    }

    let stacks = cumulative(db);
    let (lo, hi) = stacks
        .iter()
        .flatten()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let hi = if hi > lo { hi } else { lo + 1.0 };

    let dates = db.all_dates();
    let to_point = |date: f64, v: f64| {
        Point::new(
            viewport.time_to_x(date, window.start, window.end),
            viewport.value_to_y(v, lo, hi),
        )
    };

    let mut commands = Vec::with_capacity(db.columns().len() * 2 + 6);
    commands.push(RenderCommand::BeginGroup {
        id: "area".into(),
        label: Some(db.title.clone()),
    });
    commands.push(RenderCommand::DrawRect {
        rect: viewport.bounds(),
        color: ThemeToken::PanelBackground,
        border_color: Some(ThemeToken::PanelBorder),
        label: None,
    });

    let baseline = vec![0.0; dates.len()];
    for (k, top) in stacks.iter().enumerate() {
        let bottom = if k == 0 { &baseline } else { &stacks[k - 1] };
        let mut points: Vec<Point> = dates
            .iter()
            .zip(top)
            .map(|(&d, &v)| to_point(d, v))
            .collect();
        points.extend(
            dates
                .iter()
                .zip(bottom)
                .rev()
                .map(|(&d, &v)| to_point(d, v)),
        );
        commands.push(RenderCommand::FillPolygon {
            points,
            color: ThemeToken::series(k),
        });
    }

    for (value, y) in [(lo, viewport.y + viewport.height), (hi, viewport.y)] {
        commands.push(RenderCommand::DrawText {
            position: Point::new(viewport.x - 4.0, y + FONT_SIZE / 3.0),
            text: format_value(value),
            color: ThemeToken::TickText,
            font_size: FONT_SIZE,
            align: TextAlign::Right,
            rotation: 0.0,
        });
    }

    for (k, label) in db.column_labels().into_iter().enumerate() {
        commands.push(RenderCommand::DrawText {
            position: Point::new(
                viewport.x + viewport.width - LEGEND_PADDING,
                viewport.y + LEGEND_PADDING + LEGEND_LINE_HEIGHT * (k + 1) as f64,
            ),
            text: label.to_string(),
            color: ThemeToken::series(k),
            font_size: FONT_SIZE,
            align: TextAlign::Right,
            rotation: 0.0,
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}
