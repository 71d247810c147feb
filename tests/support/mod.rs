//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use gore_outline::float_types::Real;
use geo::LineString;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Largest deviation of the polyline's points from a circle of `radius` about the origin.
pub fn max_radial_error(line: &LineString<Real>, radius: Real) -> Real {
    line.coords()
        .map(|c| (c.x.hypot(c.y) - radius).abs())
        .fold(0.0, Real::max)
}
