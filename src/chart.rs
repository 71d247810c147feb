//! A minimal line chart: polylines in data space, an optional grid, and an
//! equal-aspect viewport that maps data coordinates onto a pixel canvas.
//!
//! Rendering to a concrete format lives in [`crate::io`].

use crate::band::GoreBand;
use crate::float_types::{Real, tolerance};
use crate::io::IoError;
use geo::{BoundingRect, Coord, LineString, Rect};

// for colorizer plugins in editors
const fn rgb(x: u8, y: u8, z: u8) -> (u8, u8, u8) {
    (x, y, z)
}

/// Line colours, cycled in insertion order.
pub const COLOR_PALETTE: [(u8, u8, u8); 8] = [
    rgb(31, 119, 180),
    rgb(255, 127, 14),
    rgb(44, 160, 44),
    rgb(214, 39, 40),
    rgb(148, 103, 189),
    rgb(140, 86, 75),
    rgb(227, 119, 194),
    rgb(127, 127, 127),
];

/// Preferred number of grid intervals along the longer axis.
const TARGET_TICKS: Real = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub line: LineString<Real>,
    pub color: (u8, u8, u8),
}

impl Series {
    /// `#rrggbb` form of the line colour.
    pub fn hex_color(&self) -> String {
        let (r, g, b) = self.color;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub grid: bool,
    pub equal_aspect: bool,
    /// Padding around the data, as a fraction of the larger data extent
    pub margin: Real,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            grid: true,
            equal_aspect: true,
            margin: 0.05,
        }
    }
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a series, colouring it with the next palette entry.
    pub fn add_series(&mut self, label: impl Into<String>, line: LineString<Real>) {
        let color = COLOR_PALETTE[self.series.len() % COLOR_PALETTE.len()];
        self.series.push(Series {
            label: label.into(),
            line,
            color,
        });
    }

    /// Union of the bounding boxes of every non-empty series.
    pub fn bounds(&self) -> Option<Rect<Real>> {
        self.series
            .iter()
            .filter_map(|series| series.line.bounding_rect())
            .reduce(|a, b| {
                Rect::new(
                    Coord {
                        x: a.min().x.min(b.min().x),
                        y: a.min().y.min(b.min().y),
                    },
                    Coord {
                        x: a.max().x.max(b.max().x),
                        y: a.max().y.max(b.max().y),
                    },
                )
            })
    }

    /// Fits the data into a canvas whose longer side is `size_px` pixels.
    ///
    /// With `equal_aspect` both axes share a scale, so the shorter side of the
    /// canvas shrinks to keep circles round.
    pub fn viewport(&self, size_px: Real) -> Result<Viewport, IoError> {
        if !(size_px.is_finite() && size_px > 0.0) {
            return Err(IoError::InvalidSize(size_px));
        }
        let bounds = self.bounds().ok_or(IoError::EmptyChart)?;
        let (dx, dy) = (bounds.width(), bounds.height());
        let extent = dx.max(dy);
        if extent <= tolerance() {
            return Err(IoError::DegenerateBounds { width: dx, height: dy });
        }

        let pad = extent * self.margin;
        let min = Coord {
            x: bounds.min().x - pad,
            y: bounds.min().y - pad,
        };
        let max = Coord {
            x: bounds.max().x + pad,
            y: bounds.max().y + pad,
        };
        let (span_x, span_y) = (max.x - min.x, max.y - min.y);

        let (scale_x, scale_y) = if self.equal_aspect {
            let scale = size_px / span_x.max(span_y);
            (scale, scale)
        } else {
            (size_px / span_x, size_px / span_y)
        };

        let viewport = Viewport {
            min,
            max,
            scale_x,
            scale_y,
            width_px: span_x * scale_x,
            height_px: span_y * scale_y,
        };
        log::debug!(
            "viewport x {}..{}, y {}..{} on {:.1}x{:.1} px",
            min.x,
            max.x,
            min.y,
            max.y,
            viewport.width_px,
            viewport.height_px
        );
        Ok(viewport)
    }
}

/// The inner and outer arc of a band, equal aspect, with a grid.
impl From<&GoreBand> for Chart {
    fn from(band: &GoreBand) -> Self {
        let mut chart = Chart::new().with_title(format!(
            "Gore band, {} gores, {:e} rad",
            band.gores, band.angle_span
        ));
        chart.add_series(format!("inner r = {}", band.inner_radius), band.inner_arc.clone());
        chart.add_series(format!("outer r = {}", band.outer_radius), band.outer_arc.clone());
        chart
    }
}

/// Data-space window and its mapping onto a pixel canvas (y pointing down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub min: Coord<Real>,
    pub max: Coord<Real>,
    pub scale_x: Real,
    pub scale_y: Real,
    pub width_px: Real,
    pub height_px: Real,
}

impl Viewport {
    pub fn to_canvas(&self, point: Coord<Real>) -> (Real, Real) {
        (
            (point.x - self.min.x) * self.scale_x,
            (self.max.y - point.y) * self.scale_y,
        )
    }

    /// Grid steps for x and y. Equal scales share the step so grid cells are square.
    pub fn grid_steps(&self) -> (Real, Real) {
        let (span_x, span_y) = (self.max.x - self.min.x, self.max.y - self.min.y);
        if self.scale_x == self.scale_y {
            let step = nice_step(span_x.max(span_y) / TARGET_TICKS);
            (step, step)
        } else {
            (nice_step(span_x / TARGET_TICKS), nice_step(span_y / TARGET_TICKS))
        }
    }
}

/// Rounds `raw` up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: Real) -> Real {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = (10.0 as Real).powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Multiples of `step` within `[min, max]`.
pub fn ticks(min: Real, max: Real, step: Real) -> Vec<Real> {
    if step.is_nan() || step <= 0.0 || max < min {
        return Vec::new();
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|i| i as Real * step).collect()
}

/// Formats a tick value with just enough decimals to tell neighbours apart.
pub fn format_tick(value: Real, step: Real) -> String {
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        for (raw, expected) in [(0.7, 1.0), (1.3, 2.0), (3.0, 5.0), (7.5, 10.0), (30.0, 50.0), (0.013, 0.02)] {
            assert!((nice_step(raw) - expected).abs() < 1e-12, "nice_step({raw})");
        }
    }

    #[test]
    fn nice_step_rejects_nonsense() {
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(nice_step(Real::NAN), 1.0);
    }

    #[test]
    fn ticks_cover_range() {
        assert_eq!(ticks(-1.0, 2.5, 1.0), vec![-1.0, 0.0, 1.0, 2.0]);
        assert!(ticks(1.0, 0.0, 1.0).is_empty());
        assert!(ticks(0.0, 1.0, 0.0).is_empty());
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(199999.2, 0.2), "199999.2");
        assert_eq!(format_tick(50.0, 10.0), "50");
        assert_eq!(format_tick(0.05, 0.05), "0.05");
    }

    #[test]
    fn palette_cycles() {
        let mut chart = Chart::new();
        for i in 0..=COLOR_PALETTE.len() {
            chart.add_series(format!("s{i}"), LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]));
        }
        assert_eq!(chart.series[0].color, chart.series[COLOR_PALETTE.len()].color);
        assert_eq!(chart.series[0].hex_color(), "#1f77b4");
    }
}
