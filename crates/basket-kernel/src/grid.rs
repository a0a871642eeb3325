use std::f64::consts::TAU;

use basket_types::{ControlPoint, RingSpec};
use tracing::{debug, instrument};

use crate::error::InvalidConfiguration;

/// Decimal places kept in the X and Z coordinates of generated points.
pub const COORDINATE_PRECISION: i32 = 4;

/// Round `value` to `places` decimal places.
///
/// Ties on the scaled value go to the even neighbour, so the result does not
/// depend on the sign of the input.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}

/// Check that a grid can be generated for `degree_u` and `rings`.
pub fn validate_grid(degree_u: usize, rings: &[RingSpec]) -> Result<(), InvalidConfiguration> {
    if degree_u < 1 {
        return Err(InvalidConfiguration::DegreeUTooLow { degree_u });
    }
    if rings.is_empty() {
        return Err(InvalidConfiguration::NoRings);
    }
    if let Some(index) = rings.iter().position(|ring| !ring.is_finite()) {
        return Err(InvalidConfiguration::NonFiniteRing { index });
    }
    Ok(())
}

/// Generate the control points of a closed surface of revolution around the Y axis.
///
/// The circle is split into `degree_u + 1` angular divisions covering `0..=2π`,
/// so the last division lands on the seam and repeats the first. Each division
/// yields one point per ring, in ring order, before the angle advances.
/// X and Z are rounded to [`COORDINATE_PRECISION`] places; Y is the ring height
/// unchanged.
#[instrument(skip(rings), fields(ring_count = rings.len()))]
pub fn generate_control_grid(
    degree_u: usize,
    rings: &[RingSpec],
) -> Result<Vec<ControlPoint>, InvalidConfiguration> {
    validate_grid(degree_u, rings)?;

    let segments = degree_u + 1;
    let step_count = (segments - 1) as f64;
    let mut points = Vec::with_capacity(segments * rings.len());

    for i in 0..segments {
        let theta = (i as f64 * TAU) / step_count;
        let (dz, dx) = theta.sin_cos();

        for ring in rings {
            let x = round_to_places(ring.radius * dx, COORDINATE_PRECISION);
            let z = round_to_places(ring.radius * dz, COORDINATE_PRECISION);
            points.push(ControlPoint::new(x, ring.height, z));
        }
    }

    debug!(segments, points = points.len(), "control grid generated");
    Ok(points)
}
