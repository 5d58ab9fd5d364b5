use serde::{Deserialize, Serialize};

/// The kind of a panel in a figure, carrying what layout needs from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelKind {
    /// A gantt chart and its overlap metric.
    Gantt { max_overlaps: usize },
    Line,
    Area,
    Events,
}

/// Relative height of an event track compared to a numeric chart.
pub const EVENT_PANEL_RATIO: f64 = 0.5;

/// Relative height of each panel.
///
/// Gantt panels are scaled by their overlap metric against the largest
/// one in the figure, so a chart with fewer concurrent lanes gets a
/// shorter panel. Line and area panels get 1.0, event panels 0.5. When
/// no gantt chart has any interval, gantt panels get 0. A figure without
/// gantt panels gives every panel the same share.
pub fn height_ratios(panels: &[PanelKind]) -> Vec<f64> {
    if !panels.iter().any(|p| matches!(p, PanelKind::Gantt { .. })) {
        return vec![1.0; panels.len()];
    }
    let max_gantt = panels
        .iter()
        .filter_map(|p| match p {
            PanelKind::Gantt { max_overlaps } => Some(*max_overlaps),
            _ => None,
        })
        .max()
        .unwrap_or(0);

    panels
        .iter()
        .map(|panel| match panel {
            PanelKind::Gantt { max_overlaps } if max_gantt > 0 => {
                *max_overlaps as f64 / max_gantt as f64
            }
            PanelKind::Gantt { .. } => 0.0,
            PanelKind::Line | PanelKind::Area => 1.0,
            PanelKind::Events => EVENT_PANEL_RATIO,
        })
        .collect()
}

/// Vertical slice of the figure assigned to one panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSlot {
    pub y: f64,
    pub height: f64,
}

/// Split `total_height` into consecutive slots proportional to `ratios`,
/// with `gap` pixels between neighbours. All-zero ratios share the
/// height equally.
pub fn stack_panels(ratios: &[f64], total_height: f64, gap: f64) -> Vec<PanelSlot> {
    if ratios.is_empty() {
        return Vec::new();
    }
    let usable = (total_height - gap * (ratios.len() - 1) as f64).max(0.0);
    let sum: f64 = ratios.iter().filter(|r| r.is_finite() && **r > 0.0).sum();

    let mut y = 0.0;
    ratios
        .iter()
        .map(|&ratio| {
            let height = if sum > 0.0 {
                let ratio = if ratio.is_finite() { ratio.max(0.0) } else { 0.0 };
                usable * ratio / sum
            } else {
                usable / ratios.len() as f64
            };
            let slot = PanelSlot { y, height };
            y += height + gap;
            slot
        })
        .collect()
}

/// A closed time window shared by all panels of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Smallest window covering every `(min, max)` bound; `None` when no
    /// bound is known.
    pub fn union(bounds: impl IntoIterator<Item = (Option<f64>, Option<f64>)>) -> Option<Self> {
        let mut range: Option<Self> = None;
        for (lo, hi) in bounds {
            let (Some(lo), Some(hi)) = (lo, hi) else {
                continue;
            };
            range = Some(match range {
                None => Self::new(lo, hi),
                Some(r) => Self::new(r.start.min(lo), r.end.max(hi)),
            });
        }
        range
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// A non-degenerate copy: a zero-width window is widened by one unit
    /// on each side.
    pub fn padded(self) -> Self {
        if self.duration() > 0.0 {
            self
        } else {
            Self::new(self.start - 1.0, self.end + 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gantt_ratios_scale_by_largest() {
        let ratios = height_ratios(&[
            PanelKind::Gantt { max_overlaps: 2 },
            PanelKind::Gantt { max_overlaps: 4 },
            PanelKind::Line,
            PanelKind::Area,
            PanelKind::Events,
        ]);
        assert_eq!(ratios, vec![0.5, 1.0, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn empty_gantt_charts_get_zero() {
        let ratios = height_ratios(&[PanelKind::Gantt { max_overlaps: 0 }, PanelKind::Line]);
        assert_eq!(ratios, vec![0.0, 1.0]);
    }

    #[test]
    fn without_gantt_every_panel_is_equal() {
        let ratios = height_ratios(&[PanelKind::Line, PanelKind::Events]);
        assert_eq!(ratios, vec![1.0, 1.0]);
    }

    #[test]
    fn slots_are_proportional() {
        let slots = stack_panels(&[1.0, 0.5], 300.0, 0.0);
        assert_eq!(slots.len(), 2);
        assert!((slots[0].height - 200.0).abs() < 1e-9);
        assert!((slots[1].y - 200.0).abs() < 1e-9);
        assert!((slots[1].height - 100.0).abs() < 1e-9);
    }

    #[test]
    fn gaps_are_subtracted() {
        let slots = stack_panels(&[1.0, 1.0], 210.0, 10.0);
        assert!((slots[0].height - 100.0).abs() < 1e-9);
        assert!((slots[1].y - 110.0).abs() < 1e-9);
    }

    #[test]
    fn zero_ratios_share_equally() {
        let slots = stack_panels(&[0.0, 0.0], 100.0, 0.0);
        assert!((slots[0].height - 50.0).abs() < 1e-9);
        assert!((slots[1].height - 50.0).abs() < 1e-9);
    }

    #[test]
    fn range_union_skips_unknown_bounds() {
        let range = TimeRange::union([
            (Some(3.0), Some(5.0)),
            (None, None),
            (Some(-1.0), Some(4.0)),
        ]);
        assert_eq!(range, Some(TimeRange::new(-1.0, 5.0)));
        assert_eq!(TimeRange::union([(None, Some(1.0))]), None);
    }

    #[test]
    fn padded_widens_degenerate_range() {
        assert_eq!(TimeRange::new(2.0, 2.0).padded(), TimeRange::new(1.0, 3.0));
        assert_eq!(TimeRange::new(0.0, 2.0).padded(), TimeRange::new(0.0, 2.0));
    }
}
