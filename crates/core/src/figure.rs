//! A figure: panels stacked top to bottom over one shared date axis.

use tracklane_protocol::{Point, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::config::RenderConfig;
use crate::layout::{PanelKind, TimeRange, height_ratios, stack_panels};
use crate::model::{EventDatabase, GanttDatabase, SeriesDatabase};
use crate::svg;
use crate::views;

const TITLE_FONT_SIZE: f64 = 12.0;

/// One chart of a figure.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Gantt(GanttDatabase),
    Line(SeriesDatabase),
    Area(SeriesDatabase),
    Events(EventDatabase),
}

impl Panel {
    pub fn kind(&self) -> PanelKind {
        match self {
            Self::Gantt(db) => PanelKind::Gantt {
                max_overlaps: db.max_overlaps(),
            },
            Self::Line(_) => PanelKind::Line,
            Self::Area(_) => PanelKind::Area,
            Self::Events(_) => PanelKind::Events,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Gantt(db) => &db.title,
            Self::Line(db) | Self::Area(db) => &db.title,
            Self::Events(db) => &db.title,
        }
    }

    fn date_bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Gantt(db) => (db.min_date(), db.max_date()),
            Self::Line(db) | Self::Area(db) => (db.min_date(), db.max_date()),
            Self::Events(db) => (db.min_date(), db.max_date()),
        }
    }

    fn render(
        &self,
        viewport: &Viewport,
        window: TimeRange,
        config: &RenderConfig,
    ) -> Vec<RenderCommand> {
        match self {
            Self::Gantt(db) => views::render_gantt_track(
                &db.title,
                &db.lanes(),
                viewport,
                window,
                config.lane_zero_on_top,
            ),
            Self::Line(db) => views::render_line_track(db, viewport, window),
            Self::Area(db) => views::render_area_track(db, viewport, window),
            Self::Events(db) => views::render_event_track(db, viewport, window),
        }
    }
}

/// An ordered list of panels sharing one time window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    panels: Vec<Panel>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn height_ratios(&self) -> Vec<f64> {
        let kinds: Vec<PanelKind> = self.panels.iter().map(Panel::kind).collect();
        height_ratios(&kinds)
    }

    /// The window shared by every panel.
    ///
    /// Gantt, line and event panels decide the window; area panels only
    /// when nothing else has data. A zero-width window is padded.
    pub fn time_range(&self) -> Option<TimeRange> {
        let bounds = |area: bool| {
            self.panels
                .iter()
                .filter(move |p| matches!(p, Panel::Area(_)) == area)
                .map(Panel::date_bounds)
        };
        TimeRange::union(bounds(false))
            .or_else(|| TimeRange::union(bounds(true)))
            .map(TimeRange::padded)
    }

    /// Lay out and render every panel plus the date axis.
    pub fn render(&self, config: &RenderConfig) -> Vec<RenderCommand> {
        let Some(window) = self.time_range() else {
            tracing::warn!("figure has no dated data, nothing to render");
            return Vec::new();
        };

        let plot_height = config.plot_height();
        let plot_width = config.plot_width();
        let ratios = self.height_ratios();
        let slots = stack_panels(&ratios, plot_height, config.panel_gap);
        tracing::debug!(
            panels = self.panels.len(),
            start = window.start,
            end = window.end,
            ?ratios,
            "laying out figure"
        );

        let mut commands = Vec::new();
        for (panel, slot) in self.panels.iter().zip(&slots) {
            if slot.height <= 0.0 {
                continue;
            }
            let viewport = Viewport::new(
                config.margins.left,
                config.margins.top + slot.y,
                plot_width,
                slot.height,
            );
            if !panel.title().is_empty() {
                commands.push(RenderCommand::DrawText {
                    position: Point::new(viewport.x, viewport.y - 4.0),
                    text: panel.title().to_string(),
                    color: ThemeToken::TitleText,
                    font_size: TITLE_FONT_SIZE,
                    align: TextAlign::Left,
                    rotation: 0.0,
                });
            }
            commands.extend(panel.render(&viewport, window, config));
        }

        let axis = Viewport::new(
            config.margins.left,
            config.margins.top + plot_height,
            plot_width,
            config.axis_height,
        );
        commands.extend(views::render_time_axis(&axis, window, plot_height));
        commands
    }

    pub fn to_svg(&self, config: &RenderConfig) -> String {
        svg::render_svg(&self.render(config), config.width, config.height, config.theme)
    }
}
