//! Arithmetic errors of the gore band construction

use crate::float_types::Real;

/// Everything that can stop a [`GoreBand`](crate::band::GoreBand) from being computed.
///
/// Each variant is a division by zero or a non-finite intermediate value; the
/// construction has no other failure paths.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Both points share the same x coordinate, so the line through them has no slope
    #[error("(VerticalSegment) Both points lie on x = {x}; the y-intercept divides by zero")]
    VerticalSegment { x: Real },
    /// The gore count divides the angle span
    #[error("(ZeroGores) The number of gores must be at least 1")]
    ZeroGores,
    /// The inner radius divides the angle span
    #[error("(ZeroRadius) The inner radius is zero; the angle span divides by zero")]
    ZeroRadius,
    /// An intermediate quantity overflowed or became NaN
    #[error("(NonFinite) {quantity} is not finite ({value})")]
    NonFinite { quantity: &'static str, value: Real },
}

/// Rejects NaN and infinities so they never reach the sampled arcs.
pub(crate) fn finite(quantity: &'static str, value: Real) -> Result<Real, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { quantity, value })
    }
}
