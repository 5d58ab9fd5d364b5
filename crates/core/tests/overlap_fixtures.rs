//! Worked examples for the overlap metric and lane packing, loaded through
//! the chart-definition parser the way a user's file would be.

use tracklane_core::layout::{max_overlap, max_overlap_naive, pack};
use tracklane_core::model::{Dash, GanttDatabase};
use tracklane_core::parsers::parse_gantt_auto;

fn load(json: &str) -> GanttDatabase {
    parse_gantt_auto(json.as_bytes(), "fallback").expect("fixture parses")
}

#[test]
fn three_intervals_sharing_a_pinned_lane() {
    let db = load(
        r#"{
            "type": "gantt",
            "title": "Test",
            "data": [
                { "label": "Test", "start": 0, "end": 2, "column": 0 },
                { "label": "Test", "start": 1, "end": 3, "column": 0 },
                { "label": "Test", "start": 4, "end": 5 }
            ]
        }"#,
    );
    assert_eq!(db.title, "Test");
    assert_eq!(db.max_overlaps(), 1);
    assert_eq!(max_overlap_naive(db.dashes()), 1);
}

#[test]
fn five_interval_mixed_set() {
    let db = load(
        r#"{
            "type": "gantt",
            "title": "Test",
            "data": [
                { "label": "Test", "start": 0, "end": 2, "column": 1 },
                { "label": "Test", "start": 1, "end": 5, "column": 0 },
                { "label": "Test", "start": 3, "end": 6 },
                { "label": "Test", "start": 4, "end": 8, "column": 0 },
                { "label": "Test", "start": 7, "end": 9, "column": 1 }
            ]
        }"#,
    );
    assert_eq!(db.max_overlaps(), 2);
    assert_eq!(max_overlap_naive(db.dashes()), 2);
}

#[test]
fn eight_interval_mixed_set() {
    let db = load(
        r#"{
            "type": "gantt",
            "title": "Test",
            "data": [
                { "label": "Test", "start": 0, "end": 2, "column": 1 },
                { "label": "Test", "start": 1, "end": 5, "column": 0 },
                { "label": "Test", "start": 3, "end": 6 },
                { "label": "Test", "start": 4, "end": 8, "column": 0 },
                { "label": "Test", "start": 7, "end": 9, "column": 1 },
                { "label": "Test", "start": 10, "end": 12, "column": 1 },
                { "label": "Test", "start": 11, "end": 13, "column": 0 },
                { "label": "Test", "start": 14, "end": 15 }
            ]
        }"#,
    );
    assert_eq!(db.max_overlaps(), 2);
    assert_eq!(max_overlap_naive(db.dashes()), 2);
}

#[test]
fn overlapping_pair_needs_two_lanes() {
    let dashes = [Dash::new("a", 0.0, 2.0), Dash::new("b", 1.0, 3.0)];
    assert_eq!(max_overlap(&dashes), 2);
    assert_eq!(pack(&dashes).len(), 2);
}

#[test]
fn touching_pair_shares_a_lane() {
    let dashes = [Dash::new("a", 0.0, 2.0), Dash::new("b", 2.0, 4.0)];
    assert_eq!(max_overlap(&dashes), 1);
    assert_eq!(pack(&dashes).len(), 1);
}

#[test]
fn pinned_span_over_disjoint_free_intervals() {
    let dashes = [
        Dash::new("pinned", 0.0, 10.0).pinned(0),
        Dash::new("a", 1.0, 2.0),
        Dash::new("b", 3.0, 4.0),
        Dash::new("c", 5.0, 6.0),
    ];
    assert_eq!(max_overlap(&dashes), 2);
    assert_eq!(max_overlap_naive(&dashes), 2);

    let lanes = pack(&dashes);
    assert_eq!(lanes.len(), 2);
    assert_eq!(lanes[0].dashes().len(), 1);
    assert_eq!(lanes[0].dashes()[0].label, "pinned");
    let free: Vec<_> = lanes[1].dashes().iter().map(|d| d.label.as_str()).collect();
    assert_eq!(free, vec!["a", "b", "c"]);
}

#[test]
fn csv_and_json_fixtures_agree() {
    let csv = "label,start,end,column\nTest,0,2,1\nTest,1,5,0\nTest,3,6,\nTest,4,8,0\nTest,7,9,1\n";
    let db = parse_gantt_auto(csv.as_bytes(), "csv").expect("csv parses");
    assert_eq!(db.len(), 5);
    assert_eq!(db.max_overlaps(), 2);
}
