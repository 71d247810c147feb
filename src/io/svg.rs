use crate::chart::{Chart, Viewport, format_tick, ticks};
use crate::float_types::Real;
use crate::io::IoError;
use std::path::Path;

use ::svg::Document;
use ::svg::node::element::{Group, Line, Polyline, Rectangle, Text};

const PAD_LEFT: Real = 90.0;
// room for the legend
const PAD_RIGHT: Real = 220.0;
const LEGEND_GAP: Real = 12.0;
const PAD_TOP: Real = 40.0;
const PAD_BOTTOM: Real = 40.0;
const FONT: &str = "sans-serif";
const FONT_SIZE: Real = 11.0;
const GRID_COLOR: &str = "#d0d0d0";

/// Render a [`Chart`] as an SVG document whose plot area has `size_px` pixels
/// along its longer side.
///
/// Data coordinates are shifted to the viewport origin before scaling, so
/// large absolute values (arcs of radius 2·10⁵) keep sub-pixel precision in
/// the output.
///
/// ```rust
/// # use gore_outline::{band::GoreBand, chart::Chart};
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let band = GoreBand::with_defaults()?;
/// let document = gore_outline::io::to_svg(&Chart::from(&band), 800.0)?;
/// assert!(document.to_string().contains("<polyline"));
/// # Ok(())
/// # }
/// ```
pub fn to_svg(chart: &Chart, size_px: Real) -> Result<Document, IoError> {
    let viewport = chart.viewport(size_px)?;
    let width = viewport.width_px + PAD_LEFT + PAD_RIGHT;
    let height = viewport.height_px + PAD_TOP + PAD_BOTTOM;

    let mut plot = Group::new().set("transform", format!("translate({PAD_LEFT},{PAD_TOP})"));
    if chart.grid {
        plot = plot.add(grid(&viewport));
    }
    plot = plot.add(
        Rectangle::new()
            .set("width", viewport.width_px)
            .set("height", viewport.height_px)
            .set("fill", "none")
            .set("stroke", "black"),
    );
    for series in &chart.series {
        let points = series
            .line
            .coords()
            .map(|&coord| {
                let (x, y) = viewport.to_canvas(coord);
                format!("{x:.3},{y:.3}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        plot = plot.add(
            Polyline::new()
                .set("points", points)
                .set("fill", "none")
                .set("stroke", series.hex_color())
                .set("stroke-width", 1.5),
        );
    }
    plot = plot.add(legend(chart, &viewport));

    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", format!("0 0 {width} {height}"))
        .add(
            Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("fill", "white"),
        );
    if let Some(title) = &chart.title {
        document = document.add(
            label(title.as_str(), width / 2.0, PAD_TOP / 2.0, "middle").set("font-size", FONT_SIZE + 2.0),
        );
    }
    Ok(document.add(plot))
}

/// Render `chart` and write it to `path`.
pub fn write_svg(chart: &Chart, size_px: Real, path: impl AsRef<Path>) -> Result<(), IoError> {
    let document = to_svg(chart, size_px)?;
    ::svg::save(path.as_ref(), &document)?;
    log::info!("wrote {}", path.as_ref().display());
    Ok(())
}

impl Chart {
    pub fn to_svg(&self, size_px: Real) -> Result<Document, IoError> {
        self::to_svg(self, size_px)
    }
    pub fn write_svg(&self, size_px: Real, path: impl AsRef<Path>) -> Result<(), IoError> {
        self::write_svg(self, size_px, path)
    }
}

fn label(content: &str, x: Real, y: Real, anchor: &str) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
        .set("font-family", FONT)
        .set("font-size", FONT_SIZE)
}

// Grid lines with their tick labels outside the plot frame.
fn grid(viewport: &Viewport) -> Group {
    let (step_x, step_y) = viewport.grid_steps();
    let mut group = Group::new();

    for x in ticks(viewport.min.x, viewport.max.x, step_x) {
        let (cx, _) = viewport.to_canvas(geo::Coord { x, y: viewport.min.y });
        group = group
            .add(
                Line::new()
                    .set("x1", cx)
                    .set("y1", 0.0)
                    .set("x2", cx)
                    .set("y2", viewport.height_px)
                    .set("stroke", GRID_COLOR),
            )
            .add(label(&format_tick(x, step_x), cx, viewport.height_px + 16.0, "middle"));
    }
    for y in ticks(viewport.min.y, viewport.max.y, step_y) {
        let (_, cy) = viewport.to_canvas(geo::Coord { x: viewport.min.x, y });
        group = group
            .add(
                Line::new()
                    .set("x1", 0.0)
                    .set("y1", cy)
                    .set("x2", viewport.width_px)
                    .set("y2", cy)
                    .set("stroke", GRID_COLOR),
            )
            .add(label(&format_tick(y, step_y), -6.0, cy + FONT_SIZE / 3.0, "end"));
    }
    group
}

// Legend in the right padding, clear of the plot frame.
fn legend(chart: &Chart, viewport: &Viewport) -> Group {
    let mut group = Group::new()
        .set("class", "legend")
        .set("transform", format!("translate({},0)", viewport.width_px + LEGEND_GAP));
    for (i, series) in chart.series.iter().enumerate() {
        let y = 14.0 + i as Real * (FONT_SIZE + 6.0);
        group = group
            .add(
                Line::new()
                    .set("x1", 0.0)
                    .set("y1", y)
                    .set("x2", 20.0)
                    .set("y2", y)
                    .set("stroke", series.hex_color())
                    .set("stroke-width", 2.0),
            )
            .add(label(&series.label, 26.0, y + FONT_SIZE / 3.0, "start"));
    }
    group
}
