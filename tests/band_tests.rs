mod support;

use gore_outline::band::{
    self, DEFAULT_PT1, GoreBand, angle_span, distance, inner_radius, linspace, y_intercept,
};
use gore_outline::errors::GeometryError;
use gore_outline::float_types::PI;
use nalgebra::Point2;

use crate::support::{approx_eq, max_radial_error};

fn reference() -> GoreBand {
    GoreBand::with_defaults().unwrap()
}

#[test]
fn reference_distance() {
    let band = reference();
    // sqrt(0.00001^2 + 1^2)
    assert!(approx_eq(band.distance, (1.0 + 1e-10_f64).sqrt(), 1e-9));
    assert!(approx_eq(band.distance, 1.0000000125, 1e-7));
}

#[test]
fn reference_y_intercept() {
    let band = reference();
    // The line falls steeply to the right, so it crosses x = 0 far above the origin.
    assert!(approx_eq(band.y_intercept, 199999.0, 1e-3));
    assert!(approx_eq(band.y_intercept.abs(), 199999.0, 1e-3));
}

#[test]
fn reference_radii() {
    let band = reference();
    let expected = (1.99999_f64.powi(2) + 199999.0_f64.powi(2)).sqrt();
    assert!(approx_eq(band.inner_radius, expected, 1e-3));
    assert!(band.inner_radius > 1.9e5 && band.inner_radius < 2.1e5);
    assert!(approx_eq(band.outer_radius - band.inner_radius, band.distance, 1e-9));
}

#[test]
fn reference_angle_span() {
    let band = reference();
    // Two gores cancel the factor of two in 2π.
    let expected = DEFAULT_PT1[0] / band.inner_radius * PI;
    assert!(approx_eq(band.angle_span, expected, 1e-15));
    assert!(band.angle_span > 0.0 && band.angle_span < 1e-4);
}

#[test]
fn reference_angles() {
    let band = reference();
    assert_eq!(band.angles.len(), 100);
    assert_eq!(band.angles[0], 0.0);
    assert!(approx_eq(*band.angles.last().unwrap(), band.angle_span, 1e-18));
    assert!(band.angles.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn arcs_keep_their_radius() {
    let band = reference();
    assert_eq!(band.inner_arc.0.len(), band.angles.len());
    assert_eq!(band.outer_arc.0.len(), band.angles.len());
    // relative error of cos/sin scaled by ~2e5
    assert!(max_radial_error(&band.inner_arc, band.inner_radius) < 1e-9 * band.inner_radius);
    assert!(max_radial_error(&band.outer_arc, band.outer_radius) < 1e-9 * band.outer_radius);
}

#[test]
fn arcs_start_on_x_axis() {
    let band = reference();
    let first = band.inner_arc.0[0];
    assert_eq!(first.x, band.inner_radius);
    assert_eq!(first.y, 0.0);
}

#[test]
fn vertical_segment_is_a_division_by_zero() {
    let p1 = Point2::new(2.0, 0.0);
    let p2 = Point2::new(2.0, -1.0);
    assert_eq!(y_intercept(&p1, &p2), Err(GeometryError::VerticalSegment { x: 2.0 }));
    assert_eq!(
        GoreBand::compute(p1, p2, 2, 100),
        Err(GeometryError::VerticalSegment { x: 2.0 })
    );
}

#[test]
fn zero_gores_is_a_division_by_zero() {
    let result = GoreBand::compute(
        Point2::from(band::DEFAULT_PT1),
        Point2::from(band::DEFAULT_PT2),
        0,
        100,
    );
    assert_eq!(result, Err(GeometryError::ZeroGores));
}

#[test]
fn overflow_is_reported() {
    // slope of ~1e308 / 1e-300 overflows the intercept
    let p1 = Point2::new(1.0, 0.0);
    let p2 = Point2::new(1.0 + 1e-15, 1e300);
    match GoreBand::compute(p1, p2, 2, 10) {
        Err(GeometryError::NonFinite { .. }) => {},
        other => panic!("expected NonFinite, got {other:?}"),
    }
}

#[test]
fn gentle_slope() {
    // Line through (1, 0) and (2, -1) crosses x = 0 at y = 1
    let p1 = Point2::new(1.0, 0.0);
    let p2 = Point2::new(2.0, -1.0);
    let y = y_intercept(&p1, &p2).unwrap();
    assert!(approx_eq(y, 1.0, 1e-12));
    let r = inner_radius(&p1, y);
    assert!(approx_eq(r, 2.0_f64.sqrt(), 1e-12));
    assert!(approx_eq(distance(&p1, &p2), 2.0_f64.sqrt(), 1e-12));
    let span = angle_span(&p1, r, 4).unwrap();
    assert!(approx_eq(span, 1.0 / 2.0_f64.sqrt() * PI / 2.0, 1e-12));
}

#[test]
fn sample_counts() {
    let p1 = Point2::new(1.0, 0.0);
    let p2 = Point2::new(2.0, -1.0);
    let band = GoreBand::compute(p1, p2, 2, 0).unwrap();
    assert!(band.angles.is_empty());
    assert!(band.inner_arc.0.is_empty());

    let band = GoreBand::compute(p1, p2, 2, 1).unwrap();
    assert_eq!(band.angles, vec![0.0]);

    assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
}
