use tracklane_protocol::{LineStyle, Point, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::layout::TimeRange;
use crate::model::EventDatabase;

const FONT_SIZE: f64 = 10.0;
const MARKER_RADIUS: f64 = 3.0;
/// Stem heights alternate between these levels on a 0..`LEVEL_SCALE` axis
/// so neighbouring labels don't collide.
const LEVELS: [f64; 2] = [2.0, 1.0];
const LEVEL_SCALE: f64 = 3.0;
const LABEL_ROTATION: f64 = 45.0;

/// Stem level of the `index`-th event.
pub fn stem_level(index: usize) -> f64 {
    LEVELS[index % LEVELS.len()]
}

/// Render events as a stem plot: a marker on the baseline, a stem up to
/// an alternating level, and a rotated label at the top of the stem.
pub fn render_event_track(
    db: &EventDatabase,
    viewport: &Viewport,
    window: TimeRange,
) -> Vec<RenderCommand> {
    if db.events().is_empty() || window.duration() <= 0.0 {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(db.num_items() * 3 + 3);
    commands.push(RenderCommand::BeginGroup {
        id: "events".into(),
        label: Some(db.title.clone()),
    });

    let baseline = viewport.y + viewport.height;
    for (index, event) in db.events().iter().enumerate() {
        if event.date < window.start || event.date > window.end {
            continue;
        }
        let x = viewport.time_to_x(event.date, window.start, window.end);
        let top = viewport.value_to_y(stem_level(index), 0.0, LEVEL_SCALE);

        commands.push(RenderCommand::DrawLine {
            from: Point::new(x, baseline),
            to: Point::new(x, top),
            color: ThemeToken::EventStem,
            width: 1.0,
            style: LineStyle::Solid,
        });
        commands.push(RenderCommand::DrawDot {
            center: Point::new(x, baseline),
            radius: MARKER_RADIUS,
            color: ThemeToken::EventMarker,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x, top),
            text: event.brief.clone(),
            color: ThemeToken::EventText,
            font_size: FONT_SIZE,
            align: TextAlign::Left,
            rotation: LABEL_ROTATION,
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Event;

    fn db() -> EventDatabase {
        EventDatabase::new(
            "milestones",
            vec![
                Event::new(1.0, "alpha"),
                Event::new(2.0, "beta"),
                Event::new(3.0, "rc"),
                Event::new(20.0, "later"),
            ],
        )
    }

    #[test]
    fn levels_alternate() {
        let levels: Vec<_> = (0..5).map(stem_level).collect();
        assert_eq!(levels, vec![2.0, 1.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn stems_reach_their_level() {
        let vp = Viewport::new(0.0, 0.0, 100.0, 30.0);
        let cmds = render_event_track(&db(), &vp, TimeRange::new(0.0, 10.0));
        let stems: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawLine { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(stems.len(), 3);
        assert!((stems[0].0.y - 30.0).abs() < 1e-9);
        assert!((stems[0].1.y - 10.0).abs() < 1e-9);
        assert!((stems[1].1.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn labels_are_rotated() {
        let vp = Viewport::new(0.0, 0.0, 100.0, 30.0);
        let cmds = render_event_track(&db(), &vp, TimeRange::new(0.0, 10.0));
        let rotations: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { rotation, .. } => Some(*rotation),
                _ => None,
            })
            .collect();
        assert_eq!(rotations, vec![45.0; 3]);
    }

    #[test]
    fn empty_events_render_nothing() {
        let vp = Viewport::new(0.0, 0.0, 100.0, 30.0);
        let empty = EventDatabase::new("none", Vec::new());
        assert!(render_event_track(&empty, &vp, TimeRange::new(0.0, 1.0)).is_empty());
    }
}
