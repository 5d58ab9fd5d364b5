//! Property-based invariant tests for lane packing and the overlap metric.
//!
//! 1. The sweep agrees with the quadratic reference on free intervals.
//! 2. It also agrees on mixed sets with pinned lanes and extensions.
//! 3. Re-packing the flattened output reproduces the same lanes.
//! 4. Pinned intervals land in their lane and lanes cover every pin.
//! 5. Lanes never hold overlapping intervals.
//! 6. Free intervals need no more lanes than the metric.

use proptest::prelude::*;
use tracklane_core::layout::{free_lane_count, max_overlap, max_overlap_naive, pack};
use tracklane_core::model::Dash;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Small integer grid so ties and touching ends come up often.
fn free_dash() -> impl Strategy<Value = (i32, i32)> {
    (0i32..40, 0i32..12).prop_map(|(start, len)| (start, start + len))
}

fn free_set() -> impl Strategy<Value = Vec<Dash>> {
    prop::collection::vec(free_dash(), 0..24).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (s, e))| Dash::new(format!("d{i}"), f64::from(s), f64::from(e)))
            .collect()
    })
}

fn mixed_set() -> impl Strategy<Value = Vec<Dash>> {
    let one = (
        free_dash(),
        prop::option::weighted(0.4, 0usize..4),
        prop::option::weighted(0.3, 0i32..10),
    );
    prop::collection::vec(one, 0..24).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, ((s, e), lane, extra))| {
                let mut dash = Dash::new(format!("d{i}"), f64::from(s), f64::from(e));
                if let Some(lane) = lane {
                    dash = dash.pinned(lane);
                }
                if let Some(extra) = extra {
                    dash = dash.extended(f64::from(e + extra));
                }
                dash
            })
            .collect()
    })
}

fn lane_keys(lanes: &[tracklane_core::model::Lane]) -> Vec<Vec<(String, u64, u64)>> {
    lanes
        .iter()
        .map(|lane| {
            lane.dashes()
                .iter()
                .map(|d| (d.label.clone(), d.start.to_bits(), d.end.to_bits()))
                .collect()
        })
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Sweep equals the reference
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sweep_matches_reference_on_free_sets(dashes in free_set()) {
        prop_assert_eq!(max_overlap(&dashes), max_overlap_naive(&dashes));
    }

    #[test]
    fn sweep_matches_reference_on_mixed_sets(dashes in mixed_set()) {
        prop_assert_eq!(max_overlap(&dashes), max_overlap_naive(&dashes));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Packing is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn repacking_is_stable(dashes in free_set()) {
        let lanes = pack(&dashes);
        let mut flat: Vec<Dash> = lanes.iter().flat_map(|l| l.dashes().iter().cloned()).collect();
        flat.sort_by(|a, b| a.start.total_cmp(&b.start));
        let again = pack(&flat);
        prop_assert_eq!(lane_keys(&lanes), lane_keys(&again));
    }

    #[test]
    fn repacking_is_stable_with_pins_and_extensions(dashes in mixed_set()) {
        let lanes = pack(&dashes);
        let mut flat: Vec<Dash> = lanes.iter().flat_map(|l| l.dashes().iter().cloned()).collect();
        flat.sort_by(|a, b| a.start.total_cmp(&b.start));
        let again = pack(&flat);
        prop_assert_eq!(lane_keys(&lanes), lane_keys(&again));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–5. Lane placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pinned_dashes_stay_in_their_lane(dashes in mixed_set()) {
        let lanes = pack(&dashes);
        let max_pin = dashes.iter().filter_map(|d| d.lane).max();
        if let Some(max_pin) = max_pin {
            prop_assert!(lanes.len() > max_pin);
        }
        for (index, lane) in lanes.iter().enumerate() {
            for dash in lane.dashes() {
                if let Some(pin) = dash.lane {
                    prop_assert_eq!(pin, index, "{} pinned to {} found in {}", dash.label, pin, index);
                }
            }
        }
        let placed: usize = lanes.iter().map(|l| l.len()).sum();
        prop_assert_eq!(placed, dashes.len());
    }

    #[test]
    fn free_dashes_never_overlap_their_lane(dashes in mixed_set()) {
        for lane in pack(&dashes) {
            let mut frontier: Option<f64> = None;
            for dash in lane.dashes() {
                if dash.lane.is_none() {
                    if let Some(f) = frontier {
                        prop_assert!(f <= dash.start, "{} starts before {}", dash.label, f);
                    }
                }
                let end = dash.rendered_end();
                frontier = Some(frontier.map_or(end, |f| f.max(end)));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Free lanes are bounded by the metric
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn free_lanes_bounded_by_metric(dashes in free_set()) {
        prop_assert!(free_lane_count(&dashes) <= max_overlap(&dashes));
    }

    #[test]
    fn free_lanes_bounded_by_metric_with_pins(dashes in mixed_set()) {
        prop_assert!(free_lane_count(&dashes) <= max_overlap(&dashes));
    }
}
