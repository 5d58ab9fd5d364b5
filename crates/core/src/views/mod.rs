pub mod area_track;
pub mod event_track;
pub mod gantt_track;
pub mod line_track;
pub mod time_axis;

pub use area_track::render_area_track;
pub use event_track::render_event_track;
pub use gantt_track::render_gantt_track;
pub use line_track::render_line_track;
pub use time_axis::render_time_axis;

/// Format an axis value: whole numbers without decimals, anything else
/// with at most three, trailing zeros trimmed.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if (v - v.round()).abs() < 1e-9 {
        let rounded = v.round();
        // -0 prints as "-0"
        return format!("{:.0}", if rounded == 0.0 { 0.0 } else { rounded });
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
