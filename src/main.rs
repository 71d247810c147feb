//! Gore band outline
//!
//! Computes the inner and outer arc of one gore band and shows them on an
//! equal-aspect chart with a grid. Without flags it draws the reference band
//! from `(1.99999, 0)` to `(2, -1)` with two gores and waits until the window
//! is closed. `--output` also writes the chart as SVG.
//!
//! Set `RUST_LOG=debug` to see the chart layout.

use clap::Parser;
use gore_outline::band::{self, GoreBand};
use gore_outline::float_types::Real;
use nalgebra::Point2;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A point written as `X,Y` on the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PointArg(Point2<Real>);

impl From<[Real; 2]> for PointArg {
    fn from(value: [Real; 2]) -> Self {
        Self(Point2::from(value))
    }
}

impl fmt::Display for PointArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0.x, self.0.y)
    }
}

impl FromStr for PointArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_point(s).map(Self)
    }
}

#[derive(Parser, Debug)]
#[command(name = "gore-outline", version)]
#[command(about = "Inner and outer arcs of a gore band, drawn on an equal-aspect chart")]
struct Args {
    /// First point of the segment, as `X,Y`.
    #[arg(long, default_value_t = PointArg::from(band::DEFAULT_PT1), allow_hyphen_values = true)]
    pt1: PointArg,

    /// Second point of the segment, as `X,Y`.
    #[arg(long, default_value_t = PointArg::from(band::DEFAULT_PT2), allow_hyphen_values = true)]
    pt2: PointArg,

    /// Number of gores sharing the full turn.
    #[arg(long, default_value_t = band::DEFAULT_GORES)]
    gores: u16,

    /// Angles sampled along each arc, both ends included.
    #[arg(long, default_value_t = band::DEFAULT_SAMPLES)]
    samples: usize,

    /// Also write the chart as SVG to this path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pixels along the longer side of the SVG plot area.
    #[arg(long, default_value_t = 800.0, value_parser = parse_width)]
    width: Real,

    /// Skip the chart window.
    #[arg(long)]
    no_view: bool,
}

fn parse_point(s: &str) -> Result<Point2<Real>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{s}`"))?;
    let x = x.trim().parse::<Real>().map_err(|e| format!("bad x `{x}`: {e}"))?;
    let y = y.trim().parse::<Real>().map_err(|e| format!("bad y `{y}`: {e}"))?;
    Ok(Point2::new(x, y))
}

fn parse_width(s: &str) -> Result<Real, String> {
    let width = s.trim().parse::<Real>().map_err(|e| format!("bad width `{s}`: {e}"))?;
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(format!("width must be a positive number, got `{s}`"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let args = Args::parse();

    let band = GoreBand::compute(args.pt1.0, args.pt2.0, args.gores, args.samples)?;
    log::info!("{band}");
    let chart = gore_outline::Chart::from(&band);

    if let Some(output) = &args.output {
        #[cfg(feature = "svg-io")]
        chart.write_svg(args.width, output)?;

        #[cfg(not(feature = "svg-io"))]
        log::warn!("built without the `svg-io` feature, {} was not written", output.display());
    }

    if args.no_view {
        return Ok(());
    }

    #[cfg(feature = "viewer")]
    gore_outline::viewer::show(chart, "Gore band outline").map_err(|e| e.to_string())?;

    #[cfg(not(feature = "viewer"))]
    log::warn!("built without the `viewer` feature, {} series not shown", chart.series.len());

    Ok(())
}
