//! The gore band construction.
//!
//! A segment `pt1 -> pt2` is extended until it meets the y axis. The distance
//! from the origin to `(pt1.x, y_intercept)` becomes the inner radius of a
//! circular band and the segment length becomes its width. The band is then cut
//! to the angle a single gore of the flattened surface occupies, and both edges
//! are sampled as polylines.
//!
//! ```
//! # use gore_outline::band::GoreBand;
//! # use gore_outline::errors::GeometryError;
//! # fn main() -> Result<(), GeometryError> {
//! let band = GoreBand::with_defaults()?;
//! assert_eq!(band.angles.len(), 100);
//! assert_eq!(band.inner_arc.0.len(), band.outer_arc.0.len());
//! # Ok(())
//! # }
//! ```

use crate::errors::{GeometryError, finite};
use crate::float_types::{Real, TAU};
use geo::LineString;
use nalgebra::Point2;
use std::fmt;

/// First point of the reference construction.
pub const DEFAULT_PT1: [Real; 2] = [1.99999, 0.0];
/// Second point of the reference construction.
pub const DEFAULT_PT2: [Real; 2] = [2.0, -1.0];
/// With two gores each gore spans half of the flattened circle.
pub const DEFAULT_GORES: u16 = 2;
/// Number of angles sampled along each arc.
pub const DEFAULT_SAMPLES: usize = 100;

/// Euclidean distance between the two points; this is the band width.
pub fn distance(p1: &Point2<Real>, p2: &Point2<Real>) -> Real {
    ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}

/// Value of y where the line through `p1` and `p2` crosses x = 0.
///
/// Fails with [`GeometryError::VerticalSegment`] when both points share an x
/// coordinate.
pub fn y_intercept(p1: &Point2<Real>, p2: &Point2<Real>) -> Result<Real, GeometryError> {
    let dx = p2.x - p1.x;
    if dx == 0.0 {
        return Err(GeometryError::VerticalSegment { x: p1.x });
    }
    finite("y-intercept", -p1.x * ((p2.y - p1.y) / dx))
}

/// Distance from the origin to `(p1.x, y_intercept)`.
pub fn inner_radius(p1: &Point2<Real>, y_intercept: Real) -> Real {
    (p1.x.powi(2) + y_intercept.powi(2)).sqrt()
}

pub fn outer_radius(distance: Real, inner_radius: Real) -> Real {
    distance + inner_radius
}

/// Angle (radians) one gore occupies on the band: the arc length `p1.x` makes
/// on a full turn, divided among `gores` pieces.
pub fn angle_span(p1: &Point2<Real>, inner_radius: Real, gores: u16) -> Result<Real, GeometryError> {
    if gores == 0 {
        return Err(GeometryError::ZeroGores);
    }
    if inner_radius == 0.0 {
        return Err(GeometryError::ZeroRadius);
    }
    finite("angle span", (p1.x / inner_radius) * TAU / Real::from(gores))
}

/// `samples` evenly spaced values from `start` to `stop`, both included.
///
/// The last value is exactly `stop`. Zero samples give an empty vector and a
/// single sample gives `[start]`.
pub fn linspace(start: Real, stop: Real, samples: usize) -> Vec<Real> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = samples - 1;
            let step = (stop - start) / last as Real;
            (0..samples)
                .map(|i| if i == last { stop } else { start + step * i as Real })
                .collect()
        },
    }
}

/// Points `(cos θ · radius, sin θ · radius)` for each angle, in order.
pub fn sample_arc(radius: Real, angles: &[Real]) -> LineString<Real> {
    angles
        .iter()
        .map(|&angle| (angle.cos() * radius, angle.sin() * radius))
        .collect()
}

/// Every quantity of one gore band plus its two sampled edges.
#[derive(Clone, Debug, PartialEq)]
pub struct GoreBand {
    pub pt1: Point2<Real>,
    pub pt2: Point2<Real>,
    pub gores: u16,
    pub distance: Real,
    pub y_intercept: Real,
    pub inner_radius: Real,
    pub outer_radius: Real,
    /// Radians, starting at 0
    pub angle_span: Real,
    pub angles: Vec<Real>,
    pub inner_arc: LineString<Real>,
    pub outer_arc: LineString<Real>,
}

impl GoreBand {
    /// Runs the whole construction. Nothing is sampled unless every quantity is
    /// finite and no division by zero occurred.
    pub fn compute(
        pt1: Point2<Real>,
        pt2: Point2<Real>,
        gores: u16,
        samples: usize,
    ) -> Result<Self, GeometryError> {
        let distance = finite("distance", distance(&pt1, &pt2))?;
        let y_intercept = y_intercept(&pt1, &pt2)?;
        let inner_radius = finite("inner radius", inner_radius(&pt1, y_intercept))?;
        let outer_radius = finite("outer radius", outer_radius(distance, inner_radius))?;
        let angle_span = angle_span(&pt1, inner_radius, gores)?;

        let angles = linspace(0.0, angle_span, samples);
        let inner_arc = sample_arc(inner_radius, &angles);
        let outer_arc = sample_arc(outer_radius, &angles);

        log::debug!(
            "sampled {} angles over {:e} rad for radii {} and {}",
            angles.len(),
            angle_span,
            inner_radius,
            outer_radius
        );

        Ok(Self {
            pt1,
            pt2,
            gores,
            distance,
            y_intercept,
            inner_radius,
            outer_radius,
            angle_span,
            angles,
            inner_arc,
            outer_arc,
        })
    }

    /// The reference construction: `(1.99999, 0)` to `(2, -1)`, two gores,
    /// 100 samples. The segment is almost vertical, so the band is a very thin
    /// slice of a very large circle.
    pub fn with_defaults() -> Result<Self, GeometryError> {
        Self::compute(
            Point2::from(DEFAULT_PT1),
            Point2::from(DEFAULT_PT2),
            DEFAULT_GORES,
            DEFAULT_SAMPLES,
        )
    }
}

impl fmt::Display for GoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "band ({}, {}) -> ({}, {}): distance {}, y-intercept {}, radii {} .. {}, {} gores spanning {:e} rad",
            self.pt1.x,
            self.pt1.y,
            self.pt2.x,
            self.pt2.y,
            self.distance,
            self.y_intercept,
            self.inner_radius,
            self.outer_radius,
            self.gores,
            self.angle_span
        )
    }
}
