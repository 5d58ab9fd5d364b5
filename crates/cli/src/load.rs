use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracklane_core::parsers::{parse_events_auto, parse_gantt_auto, parse_series};
use tracklane_core::{Figure, Panel, RenderConfig};

/// Chart title for a file: its name without the extension. JSON chart
/// definitions may carry their own title, which takes precedence.
fn title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn config(path: &Path) -> Result<RenderConfig> {
    let data = read(path)?;
    RenderConfig::from_json(&data).with_context(|| format!("invalid config {}", path.display()))
}

/// Load every input file into one figure, gantt panels first, then line,
/// stacked area and event panels, each group in command-line order.
pub fn figure(
    gantt: &[PathBuf],
    line: &[PathBuf],
    area: &[PathBuf],
    events: &[PathBuf],
) -> Result<Figure> {
    let mut figure = Figure::new();
    let parse_err = |path: &Path| format!("failed to parse {}", path.display());

    for path in gantt {
        let db = parse_gantt_auto(&read(path)?, &title(path)).with_context(|| parse_err(path))?;
        tracing::debug!(
            path = %path.display(),
            dashes = db.len(),
            max_overlaps = db.max_overlaps(),
            "loaded gantt data"
        );
        figure.push(Panel::Gantt(db));
    }
    for path in line {
        let db = parse_series(&read(path)?, &title(path)).with_context(|| parse_err(path))?;
        tracing::debug!(path = %path.display(), rows = db.num_items(), "loaded line data");
        figure.push(Panel::Line(db));
    }
    for path in area {
        let db = parse_series(&read(path)?, &title(path)).with_context(|| parse_err(path))?;
        tracing::debug!(path = %path.display(), rows = db.num_items(), "loaded area data");
        figure.push(Panel::Area(db));
    }
    for path in events {
        let db = parse_events_auto(&read(path)?, &title(path)).with_context(|| parse_err(path))?;
        tracing::debug!(path = %path.display(), events = db.num_items(), "loaded event data");
        figure.push(Panel::Events(db));
    }
    Ok(figure)
}
