use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::model::Dash;

/// What happened at one step of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepEvent {
    Begin,
    End,
}

/// Counter state right after one sweep event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStep {
    pub event: SweepEvent,
    /// Index of the interval in the input slice.
    pub dash: usize,
    pub occupied_pinned_lanes: usize,
    pub free_active: usize,
}

impl SweepStep {
    pub fn in_use(&self) -> usize {
        self.occupied_pinned_lanes + self.free_active
    }
}

/// End of the span an interval occupies for layout purposes.
///
/// Inverted intervals (rendered end before start) collapse to zero length
/// at their start.
fn occupied_end(dash: &Dash) -> f64 {
    dash.rendered_end().max(dash.start)
}

/// Running counters of the sweep.
///
/// A pinned lane counts once while it holds at least one active
/// interval, however many overlap inside it; every active free interval
/// counts on its own.
#[derive(Debug, Default)]
struct Occupancy {
    lane_active: BTreeMap<usize, usize>,
    occupied_pinned_lanes: usize,
    free_active: usize,
}

impl Occupancy {
    fn begin(&mut self, dash: &Dash) {
        match dash.lane {
            Some(lane) => {
                let active = self.lane_active.entry(lane).or_default();
                if *active == 0 {
                    self.occupied_pinned_lanes += 1;
                }
                *active += 1;
            }
            None => self.free_active += 1,
        }
    }

    fn end(&mut self, dash: &Dash) {
        match dash.lane {
            Some(lane) => {
                if let Some(active) = self.lane_active.get_mut(&lane) {
                    *active = active.saturating_sub(1);
                    if *active == 0 {
                        self.occupied_pinned_lanes = self.occupied_pinned_lanes.saturating_sub(1);
                    }
                }
            }
            None => self.free_active = self.free_active.saturating_sub(1),
        }
    }

    fn in_use(&self) -> usize {
        self.occupied_pinned_lanes + self.free_active
    }
}

/// Maximum number of lanes in use at once.
///
/// At any instant, each pinned lane holding an active interval counts
/// once and each active free interval counts once; the result is the
/// maximum of that sum over time. An interval ending at `t` is not
/// concurrent with one starting at `t`. Returns 0 for empty input.
///
/// Runs in O(n log n): two sorts, then a single two-pointer sweep over
/// start and end events.
pub fn max_overlap(dashes: &[Dash]) -> usize {
    let max = sweep(dashes, |_| {});
    tracing::debug!(dashes = dashes.len(), max_overlap = max, "swept gantt intervals");
    max
}

/// Run the sweep and record the counters after every event.
///
/// Trailing end events after the last begin are not part of the trace;
/// they cannot raise the maximum.
pub fn sweep_trace(dashes: &[Dash]) -> (usize, Vec<SweepStep>) {
    let mut trace = Vec::with_capacity(dashes.len() * 2);
    let max = sweep(dashes, |step| trace.push(step));
    (max, trace)
}

fn sweep(dashes: &[Dash], mut on_step: impl FnMut(SweepStep)) -> usize {
    let n = dashes.len();

    let mut starts: Vec<usize> = (0..n).collect();
    starts.sort_by(|&a, &b| dashes[a].start.total_cmp(&dashes[b].start));

    // Among equal ends, earlier starts end first so a zero-length interval
    // at `t` never outlives one that began before `t`.
    let mut ends: Vec<usize> = (0..n).collect();
    ends.sort_by(|&a, &b| by_occupied_end(&dashes[a], &dashes[b]));

    let mut begun = vec![false; n];
    let mut occupancy = Occupancy::default();
    let mut max = 0;
    let (mut i, mut j) = (0, 0);

    // Ends are only consumed for begun intervals, so `j <= i < n` here.
    while i < n {
        let next = starts[i];
        let due = ends[j];

        let event = if dashes[next].start < occupied_end(&dashes[due]) || !begun[due] {
            occupancy.begin(&dashes[next]);
            begun[next] = true;
            max = max.max(occupancy.in_use());
            i += 1;
            (SweepEvent::Begin, next)
        } else {
            occupancy.end(&dashes[due]);
            j += 1;
            (SweepEvent::End, due)
        };

        on_step(SweepStep {
            event: event.0,
            dash: event.1,
            occupied_pinned_lanes: occupancy.occupied_pinned_lanes,
            free_active: occupancy.free_active,
        });
    }

    max
}

fn by_occupied_end(a: &Dash, b: &Dash) -> Ordering {
    occupied_end(a)
        .total_cmp(&occupied_end(b))
        .then(a.start.total_cmp(&b.start))
}

/// Quadratic reference for [`max_overlap`].
///
/// For each interval in start order, counts the intervals already started
/// whose occupied span still covers its start, plus itself. Slower, but
/// simple enough to check by hand; both functions return the same value
/// for every input.
pub fn max_overlap_naive(dashes: &[Dash]) -> usize {
    let mut order: Vec<&Dash> = dashes.iter().collect();
    order.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut max = 0;
    for (k, current) in order.iter().enumerate() {
        let mut lanes = BTreeSet::new();
        let mut free = 0;
        for (m, dash) in order[..=k].iter().enumerate() {
            if m != k && occupied_end(dash) <= current.start {
                continue;
            }
            match dash.lane {
                Some(lane) => {
                    lanes.insert(lane);
                }
                None => free += 1,
            }
        }
        max = max.max(lanes.len() + free);
    }
    max
}
