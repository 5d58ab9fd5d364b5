use crate::model::dash::MAX_LANE;
use crate::model::{Dash, Lane};

/// Assign intervals to display lanes.
///
/// Pinned intervals go to their requested lane, with lanes
/// `0..=max_requested` created up front so sparse indices keep their
/// position; overlapping pinned intervals in one lane are left as they
/// are. Free intervals are then placed greedily in ascending start order
/// into the first lane (in creation order) that is empty or whose
/// occupants all end at or before the interval's start, and a new lane is
/// appended when none fits.
///
/// Ties on start keep input order. Lanes are returned ordered by lane
/// index. A pin past [`MAX_LANE`] is placed in [`MAX_LANE`].
pub fn pack(dashes: &[Dash]) -> Vec<Lane> {
    let (mut pinned, mut free): (Vec<&Dash>, Vec<&Dash>) =
        dashes.iter().partition(|d| d.is_pinned());
    pinned.sort_by(|a, b| a.start.total_cmp(&b.start));
    free.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut lanes = place_pinned(&pinned);
    let pinned_lane_count = lanes.len();
    place_free(&mut lanes, &free);

    tracing::debug!(
        dashes = dashes.len(),
        pinned = pinned.len(),
        pinned_lanes = pinned_lane_count,
        lanes = lanes.len(),
        "packed gantt lanes"
    );
    lanes
}

fn place_pinned(pinned: &[&Dash]) -> Vec<Lane> {
    let lane_count = pinned
        .iter()
        .filter_map(|d| pinned_lane(d))
        .max()
        .map_or(0, |max| max + 1);
    let mut lanes = vec![Lane::new(); lane_count];
    for dash in pinned {
        if let Some(index) = pinned_lane(dash) {
            lanes[index].push((*dash).clone());
        }
    }
    lanes
}

fn pinned_lane(dash: &Dash) -> Option<usize> {
    dash.lane.map(|lane| lane.min(MAX_LANE))
}

fn place_free(lanes: &mut Vec<Lane>, free: &[&Dash]) {
    for dash in free {
        match lanes.iter_mut().find(|lane| lane.accepts(dash)) {
            Some(lane) => lane.push((*dash).clone()),
            None => lanes.push(std::iter::once((*dash).clone()).collect()),
        }
    }
}

/// Number of lanes the packer had to create for free intervals, beyond
/// the ones reserved for pinned intervals.
pub fn free_lane_count(dashes: &[Dash]) -> usize {
    let reserved = dashes
        .iter()
        .filter_map(pinned_lane)
        .max()
        .map_or(0, |max| max + 1);
    pack(dashes).len() - reserved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(lanes: &[Lane]) -> Vec<Vec<&str>> {
        lanes
            .iter()
            .map(|lane| lane.dashes().iter().map(|d| d.label.as_str()).collect())
            .collect()
    }

    #[test]
    fn empty_input_has_no_lanes() {
        assert!(pack(&[]).is_empty());
    }

    #[test]
    fn single_interval_single_lane() {
        let lanes = pack(&[Dash::new("only", 0.0, 1.0)]);
        assert_eq!(labels(&lanes), vec![vec!["only"]]);
    }

    #[test]
    fn greedy_first_fit() {
        let dashes = [
            Dash::new("a", 0.0, 2.0),
            Dash::new("b", 1.0, 3.0),
            Dash::new("c", 2.0, 4.0),
            Dash::new("d", 3.5, 5.0),
        ];
        let lanes = pack(&dashes);
        assert_eq!(labels(&lanes), vec![vec!["a", "c"], vec!["b", "d"]]);
    }

    #[test]
    fn free_input_is_sorted_before_packing() {
        let dashes = [Dash::new("late", 5.0, 6.0), Dash::new("early", 0.0, 1.0)];
        let lanes = pack(&dashes);
        assert_eq!(labels(&lanes), vec![vec!["early", "late"]]);
    }

    #[test]
    fn extension_blocks_lane() {
        let dashes = [
            Dash::new("a", 0.0, 1.0).extended(3.0),
            Dash::new("b", 2.0, 4.0),
        ];
        assert_eq!(pack(&dashes).len(), 2);
    }

    #[test]
    fn equal_starts_keep_input_order() {
        let dashes = [Dash::new("x", 0.0, 5.0), Dash::new("y", 0.0, 1.0)];
        let lanes = pack(&dashes);
        assert_eq!(labels(&lanes), vec![vec!["x"], vec!["y"]]);
    }

    #[test]
    fn sparse_pinned_lanes_are_padded() {
        let dashes = [Dash::new("p", 0.0, 1.0).pinned(3)];
        let lanes = pack(&dashes);
        assert_eq!(lanes.len(), 4);
        assert!(lanes[..3].iter().all(Lane::is_empty));
        assert_eq!(lanes[3].dashes()[0].label, "p");
    }

    #[test]
    fn out_of_range_pin_lands_in_last_lane() {
        let mut far = Dash::new("far", 0.0, 1.0);
        far.lane = Some(100_000_000_000);
        let lanes = pack(&[far, Dash::new("free", 0.0, 1.0)]);
        assert_eq!(lanes.len(), MAX_LANE + 1);
        assert_eq!(lanes[MAX_LANE].dashes()[0].label, "far");
        assert_eq!(lanes[0].dashes()[0].label, "free");
        assert_eq!(free_lane_count(&[lanes[MAX_LANE].dashes()[0].clone()]), 0);
    }

    #[test]
    fn pinned_overlap_is_tolerated() {
        let dashes = [
            Dash::new("a", 0.0, 5.0).pinned(0),
            Dash::new("b", 1.0, 2.0).pinned(0),
        ];
        let lanes = pack(&dashes);
        assert_eq!(labels(&lanes), vec![vec!["a", "b"]]);
    }

    #[test]
    fn free_intervals_fill_padding_lanes() {
        let dashes = [
            Dash::new("p", 0.0, 10.0).pinned(1),
            Dash::new("f1", 1.0, 2.0),
            Dash::new("f2", 1.5, 3.0),
        ];
        let lanes = pack(&dashes);
        assert_eq!(labels(&lanes), vec![vec!["f1"], vec!["p"], vec!["f2"]]);
    }

    #[test]
    fn free_never_overlaps_earlier_pinned_occupant() {
        // Lane 0's last-appended bar ends at 3, but the first one runs to 10.
        let dashes = [
            Dash::new("long", 0.0, 10.0).pinned(0),
            Dash::new("short", 1.0, 3.0).pinned(0),
            Dash::new("free", 4.0, 5.0),
        ];
        let lanes = pack(&dashes);
        assert_eq!(labels(&lanes), vec![vec!["long", "short"], vec!["free"]]);
    }

    #[test]
    fn free_lane_count_excludes_reserved_lanes() {
        let dashes = [
            Dash::new("p", 0.0, 10.0).pinned(0),
            Dash::new("f1", 1.0, 2.0),
            Dash::new("f2", 3.0, 4.0),
            Dash::new("f3", 5.0, 6.0),
        ];
        assert_eq!(free_lane_count(&dashes), 1);
    }
}
