// Our Real scalar type:
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

/// Smallest chart extent treated as non-degenerate.
///
/// Defaults to `1e-6`; set `GORE_OUTLINE_TOLERANCE` at build time to override
/// (e.g. `GORE_OUTLINE_TOLERANCE=1e-9 cargo build`).
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        option_env!("GORE_OUTLINE_TOLERANCE")
            .and_then(|value| Real::from_str(value).ok())
            .map_or(1e-6, |value| value.max(Real::EPSILON))
    })
}

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;
