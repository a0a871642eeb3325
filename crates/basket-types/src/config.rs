use serde::{Deserialize, Serialize};

use crate::ring::{RingSpec, DEFAULT_RINGS};

/// Default degree in the U (angular) direction.
pub const DEFAULT_DEGREE_U: usize = 127;
/// Default tessellation hint along U, copied verbatim into the markup.
pub const DEFAULT_PARTS_U: u32 = 16;
/// Default tessellation hint along V, copied verbatim into the markup.
pub const DEFAULT_PARTS_V: u32 = 6;

/// Parameters of the generated basket surface.
///
/// The ring order is significant: it is the V direction of the surface and
/// the order in which points of one angular division are emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasketConfig {
    /// Degree along U. The surface gets `degree_u + 1` angular divisions.
    pub degree_u: usize,
    /// Rings along V, in emission order.
    pub rings: Vec<RingSpec>,
    pub parts_u: u32,
    pub parts_v: u32,
}

impl Default for BasketConfig {
    fn default() -> Self {
        Self {
            degree_u: DEFAULT_DEGREE_U,
            rings: DEFAULT_RINGS.to_vec(),
            parts_u: DEFAULT_PARTS_U,
            parts_v: DEFAULT_PARTS_V,
        }
    }
}

impl BasketConfig {
    pub fn new(degree_u: usize, rings: Vec<RingSpec>) -> Self {
        Self {
            degree_u,
            rings,
            ..Self::default()
        }
    }

    /// Number of angular divisions, seam duplicate included.
    pub fn segments(&self) -> usize {
        self.degree_u + 1
    }

    /// Degree along V: one less than the number of rings.
    pub fn degree_v(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    /// Number of control points a valid configuration produces.
    pub fn point_count(&self) -> usize {
        self.segments() * self.rings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_basket_profile() {
        let config = BasketConfig::default();
        assert_eq!(config.degree_u, 127);
        assert_eq!(config.segments(), 128);
        assert_eq!(config.degree_v(), 2);
        assert_eq!(config.point_count(), 384);
        assert_eq!(config.rings[0], RingSpec::new(0.4, 0.5));
        assert_eq!(config.rings[2], RingSpec::new(-0.4, 0.25));
    }

    #[test]
    fn partial_document_fills_defaults() {
        let config: BasketConfig = serde_json::from_str(r#"{ "degree_u": 3 }"#).unwrap();
        assert_eq!(config.degree_u, 3);
        assert_eq!(config.rings, DEFAULT_RINGS.to_vec());
        assert_eq!(config.parts_u, DEFAULT_PARTS_U);
        assert_eq!(config.parts_v, DEFAULT_PARTS_V);
    }

    #[test]
    fn empty_rings_have_zero_degree_v() {
        let config = BasketConfig::new(4, vec![]);
        assert_eq!(config.degree_v(), 0);
        assert_eq!(config.point_count(), 0);
    }
}
