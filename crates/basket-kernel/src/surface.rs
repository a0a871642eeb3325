use basket_types::{BasketConfig, ControlPoint};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::InvalidConfiguration;
use crate::grid::generate_control_grid;
use crate::Tolerance;

/// A tensor-product NURBS surface as written to markup.
///
/// Control points are stored flat, row by row: `[u_index * (degree_v + 1) + v_index]`.
/// The surface is a single Bezier span in each direction, so there are
/// `degree_u + 1` rows of `degree_v + 1` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDescriptor {
    pub degree_u: usize,
    pub degree_v: usize,
    /// Tessellation hint along U for whoever renders the surface.
    pub parts_u: u32,
    /// Tessellation hint along V for whoever renders the surface.
    pub parts_v: u32,
    pub control_points: Vec<ControlPoint>,
}

impl SurfaceDescriptor {
    pub fn new(
        degree_u: usize,
        degree_v: usize,
        parts_u: u32,
        parts_v: u32,
        control_points: Vec<ControlPoint>,
    ) -> Result<Self, InvalidConfiguration> {
        let expected = (degree_u + 1) * (degree_v + 1);
        if control_points.len() != expected {
            return Err(InvalidConfiguration::ControlPointCount {
                expected,
                actual: control_points.len(),
            });
        }
        Ok(Self {
            degree_u,
            degree_v,
            parts_u,
            parts_v,
            control_points,
        })
    }

    pub fn num_u(&self) -> usize {
        self.degree_u + 1
    }

    pub fn num_v(&self) -> usize {
        self.degree_v + 1
    }

    /// Control points grouped per angular division, ring order inside each row.
    pub fn control_rows(&self) -> impl Iterator<Item = &[ControlPoint]> {
        self.control_points.chunks(self.num_v())
    }

    pub fn knots_u(&self) -> Vec<f64> {
        clamped_knots(self.degree_u)
    }

    pub fn knots_v(&self) -> Vec<f64> {
        clamped_knots(self.degree_v)
    }

    /// Whether the first and last rows coincide, i.e. the surface closes on its seam.
    pub fn seam_is_closed(&self, tol: &Tolerance) -> bool {
        let mut rows = self.control_rows();
        let (Some(first), Some(last)) = (rows.next(), rows.last()) else {
            return false;
        };
        first
            .iter()
            .zip(last)
            .all(|(a, b)| tol.points_coincident(a, b))
    }
}

/// Knot vector of a single clamped span: `degree + 1` zeros then `degree + 1` ones.
pub fn clamped_knots(degree: usize) -> Vec<f64> {
    let mut knots = vec![0.0; degree + 1];
    knots.resize(2 * (degree + 1), 1.0);
    knots
}

/// Generate the basket control grid described by `config`.
#[instrument(skip(config), fields(degree_u = config.degree_u, rings = config.rings.len()))]
pub fn build_surface(config: &BasketConfig) -> Result<SurfaceDescriptor, InvalidConfiguration> {
    let control_points = generate_control_grid(config.degree_u, &config.rings)?;
    let surface = SurfaceDescriptor::new(
        config.degree_u,
        config.degree_v(),
        config.parts_u,
        config.parts_v,
        control_points,
    )?;
    info!(
        degree_u = surface.degree_u,
        degree_v = surface.degree_v,
        points = surface.control_points.len(),
        "built basket surface"
    );
    Ok(surface)
}
