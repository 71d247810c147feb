#[cfg(feature = "svg-io")]
mod svg;

#[cfg(feature = "svg-io")]
pub use self::svg::{to_svg, write_svg};

use crate::float_types::Real;

/// Chart layout and output errors.
///
/// The SVG writer is behind the `svg-io` cargo feature; the layout variants are
/// produced by [`Chart::viewport`](crate::chart::Chart::viewport) regardless.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    /// No series has any point to draw.
    EmptyChart,
    /// Every point sits within tolerance of the same spot, so no scale fits.
    DegenerateBounds { width: Real, height: Real },
    /// The requested canvas size is zero, negative or not a number.
    InvalidSize(Real),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            EmptyChart => write!(f, "The chart has no points to draw"),
            DegenerateBounds { width, height } => {
                write!(f, "The chart bounds are degenerate ({width} x {height})")
            },
            InvalidSize(size) => write!(f, "The canvas size must be finite and positive, got {size}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}
