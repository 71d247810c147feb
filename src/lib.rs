//! Computes the **inner and outer arcs of a gore band** and renders them on an
//! equal-aspect chart.
//!
//! A segment between two points is extended to the y axis. The distance from
//! the origin to `(pt1.x, y_intercept)` gives the inner radius, the segment
//! length gives the band width, and the share of a full turn one gore occupies
//! gives the angle span. Both edges are sampled as polylines ([`band`]) and
//! drawn with a grid ([`chart`], [`io`], and the `viewer` window).
//!
//! # Features
//! #### Default
//! - **svg-io**: write charts as SVG documents
//! - **viewer**: show charts in a window (eframe + egui_plot)

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod band;
pub mod chart;
pub mod errors;
pub mod float_types;
pub mod io;

#[cfg(feature = "viewer")]
pub mod viewer;

pub use band::GoreBand;
pub use chart::Chart;
pub use errors::GeometryError;
