pub mod error;
pub mod grid;
pub mod surface;

pub use error::InvalidConfiguration;
pub use grid::{generate_control_grid, round_to_places, validate_grid, COORDINATE_PRECISION};
pub use surface::{build_surface, clamped_knots, SurfaceDescriptor};

use basket_types::ControlPoint;

/// Tolerances for comparing generated control points.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Points closer than this are considered coincident.
    pub coincidence: f64,
    /// Largest error a single coordinate picks up from rounding to
    /// [`COORDINATE_PRECISION`] decimal places.
    pub rounding: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            coincidence: 1e-9,
            rounding: 0.5 * 10f64.powi(-COORDINATE_PRECISION),
        }
    }
}

impl Tolerance {
    pub fn points_coincident(&self, a: &ControlPoint, b: &ControlPoint) -> bool {
        a.distance_to(b) < self.coincidence
    }

    /// Whether `delta` is explained by rounding both X and Z of a point.
    pub fn is_rounding_noise(&self, delta: f64) -> bool {
        delta.abs() <= self.rounding * std::f64::consts::SQRT_2 + self.coincidence
    }
}

pub fn default_tolerance() -> Tolerance {
    Tolerance::default()
}
