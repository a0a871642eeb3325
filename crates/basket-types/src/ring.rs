use serde::{Deserialize, Serialize};

/// A horizontal circle of control points: a height on the Y axis and a radius around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    pub height: f64,
    pub radius: f64,
}

impl RingSpec {
    pub const fn new(height: f64, radius: f64) -> Self {
        Self { height, radius }
    }

    pub fn is_finite(&self) -> bool {
        self.height.is_finite() && self.radius.is_finite()
    }
}

/// The basket profile in emission order, top down: rim, waist, foot.
pub const DEFAULT_RINGS: [RingSpec; 3] = [
    RingSpec::new(0.4, 0.5),
    RingSpec::new(0.25, 0.3),
    RingSpec::new(-0.4, 0.25),
];
