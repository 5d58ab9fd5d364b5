//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use std::fmt::Write as _;

use tracklane_protocol::{LineStyle, Point, RenderCommand, TextAlign, Theme, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `theme` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, theme: Theme) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif;font-size:11px">"#,
    );
    let _ = write!(
        svg,
        r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
        resolve_color(ThemeToken::Background, theme),
    );

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                label,
            } => {
                let fill = resolve_color(*color, theme);
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}""#,
                    rect.x, rect.y, rect.w, rect.h,
                );
                if let Some(border) = border_color {
                    let _ = write!(
                        svg,
                        r#" stroke="{}" stroke-width="0.5""#,
                        resolve_color(*border, theme)
                    );
                }
                match label {
                    Some(label) => {
                        let _ = write!(svg, "><title>{}</title></rect>", escape_xml(label));
                    }
                    None => svg.push_str("/>"),
                }
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
                style,
            } => {
                let _ = write!(
                    svg,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{line_width}"{}/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    resolve_color(*color, theme),
                    dash_attr(*style),
                );
            }
            RenderCommand::DrawPolyline {
                points,
                color,
                width: line_width,
                style,
            } => {
                let _ = write!(
                    svg,
                    r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{line_width}"{}/>"#,
                    points_attr(points),
                    resolve_color(*color, theme),
                    dash_attr(*style),
                );
            }
            RenderCommand::FillPolygon { points, color } => {
                let _ = write!(
                    svg,
                    r#"<polygon points="{}" fill="{}" fill-opacity="0.85"/>"#,
                    points_attr(points),
                    resolve_color(*color, theme),
                );
            }
            RenderCommand::DrawDot {
                center,
                radius,
                color,
            } => {
                let _ = write!(
                    svg,
                    r#"<circle cx="{}" cy="{}" r="{radius}" fill="{}"/>"#,
                    center.x,
                    center.y,
                    resolve_color(*color, theme),
                );
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
                rotation,
            } => {
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                let _ = write!(
                    svg,
                    r#"<text x="{}" y="{}" fill="{}" font-size="{font_size}" text-anchor="{anchor}""#,
                    position.x,
                    position.y,
                    resolve_color(*color, theme),
                );
                if *rotation != 0.0 {
                    // SVG rotates clockwise; positive rotation tilts text upwards.
                    let _ = write!(
                        svg,
                        r#" transform="rotate({} {} {})""#,
                        -rotation, position.x, position.y
                    );
                }
                let _ = write!(svg, ">{}</text>", escape_xml(text));
            }
            RenderCommand::BeginGroup { id, label } => {
                let _ = write!(svg, r#"<g id="{}">"#, escape_xml(id));
                if let Some(label) = label {
                    let _ = write!(svg, "<title>{}</title>", escape_xml(label));
                }
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str("</svg>");
    svg
}

fn points_attr(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len() * 12);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", p.x, p.y);
    }
    out
}

fn dash_attr(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Solid => "",
        LineStyle::Dashed => r#" stroke-dasharray="6 3""#,
    }
}

fn resolve_color(token: ThemeToken, theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => match token {
            ThemeToken::BarGreen => "#2e8b57",
            ThemeToken::BarPurple => "#9370db",
            ThemeToken::BarOlive => "#9a9a3a",
            ThemeToken::BarBlue => "#4682b4",
            ThemeToken::BarExtension => "#3a3a3a",
            ThemeToken::BarLabel | ThemeToken::TitleText | ThemeToken::LegendText => "#ececec",
            ThemeToken::Series0 => "#5fa8ff",
            ThemeToken::Series1 => "#ffa726",
            ThemeToken::Series2 => "#66bb6a",
            ThemeToken::Series3 => "#ef5350",
            ThemeToken::Series4 => "#ab47bc",
            ThemeToken::Series5 => "#8d6e63",
            ThemeToken::EventStem => "#9e9e9e",
            ThemeToken::EventMarker => "#ffd600",
            ThemeToken::EventText | ThemeToken::TickText => "#cfcfcf",
            ThemeToken::AxisLine | ThemeToken::PanelBorder => "#616161",
            ThemeToken::GridLine => "#303030",
            ThemeToken::PanelBackground => "#202020",
            ThemeToken::Background => "#181818",
        },
        Theme::Light => match token {
            ThemeToken::BarGreen => "#008000",
            ThemeToken::BarPurple => "#800080",
            ThemeToken::BarOlive => "#808000",
            ThemeToken::BarBlue => "#000080",
            ThemeToken::BarExtension => "#e0e0e0",
            ThemeToken::BarLabel => "#ffffff",
            ThemeToken::TitleText | ThemeToken::LegendText => "#1a1a2e",
            ThemeToken::Series0 => "#1f77b4",
            ThemeToken::Series1 => "#ff7f0e",
            ThemeToken::Series2 => "#2ca02c",
            ThemeToken::Series3 => "#d62728",
            ThemeToken::Series4 => "#9467bd",
            ThemeToken::Series5 => "#8c564b",
            ThemeToken::EventStem => "#666677",
            ThemeToken::EventMarker => "#e67e22",
            ThemeToken::EventText | ThemeToken::TickText => "#333344",
            ThemeToken::AxisLine | ThemeToken::PanelBorder => "#999999",
            ThemeToken::GridLine => "#dee2e6",
            ThemeToken::PanelBackground => "#f8f9fa",
            ThemeToken::Background => "#ffffff",
        },
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
