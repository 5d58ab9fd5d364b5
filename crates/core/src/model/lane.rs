use serde::{Deserialize, Serialize};

use super::Dash;

/// A lane is one horizontal display row of a gantt chart, holding its
/// intervals in the order they were placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    dashes: Vec<Dash>,
    /// Furthest rendered end among the occupants.
    frontier: Option<f64>,
}

impl Lane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interval without any collision check.
    pub fn push(&mut self, dash: Dash) {
        let end = dash.rendered_end();
        self.frontier = Some(self.frontier.map_or(end, |f| f.max(end)));
        self.dashes.push(dash);
    }

    /// Whether `dash` can be appended without overlapping any occupant.
    ///
    /// An empty lane accepts anything; otherwise the lane's frontier must
    /// not pass the new interval's start.
    pub fn accepts(&self, dash: &Dash) -> bool {
        self.frontier.is_none_or(|f| f <= dash.start)
    }

    pub fn dashes(&self) -> &[Dash] {
        &self.dashes
    }

    pub fn len(&self) -> usize {
        self.dashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dashes.is_empty()
    }
}

impl FromIterator<Dash> for Lane {
    fn from_iter<I: IntoIterator<Item = Dash>>(iter: I) -> Self {
        let mut lane = Lane::new();
        for dash in iter {
            lane.push(dash);
        }
        lane
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lane_accepts_anything() {
        let lane = Lane::new();
        assert!(lane.accepts(&Dash::new("a", -10.0, -5.0)));
        assert_eq!(lane.frontier, None);
    }

    #[test]
    fn touching_intervals_fit() {
        let lane: Lane = [Dash::new("a", 0.0, 2.0)].into_iter().collect();
        assert!(lane.accepts(&Dash::new("b", 2.0, 4.0)));
        assert!(!lane.accepts(&Dash::new("c", 1.5, 4.0)));
    }

    #[test]
    fn frontier_tracks_furthest_end() {
        let lane: Lane = [
            Dash::new("long", 0.0, 10.0),
            Dash::new("short", 1.0, 2.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(lane.dashes()[1].label, "short");
        assert_eq!(lane.frontier, Some(10.0));
        assert!(!lane.accepts(&Dash::new("after-short", 3.0, 4.0)));
    }

    #[test]
    fn frontier_uses_extension() {
        let lane: Lane = [Dash::new("a", 0.0, 2.0).extended(5.0)].into_iter().collect();
        assert!(!lane.accepts(&Dash::new("b", 3.0, 4.0)));
        assert!(lane.accepts(&Dash::new("c", 5.0, 6.0)));
    }
}
