/// A configuration the control grid cannot be generated from.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidConfiguration {
    /// A single angular division would divide the circle by zero.
    #[error("degree_u must be at least 1, got {degree_u}")]
    DegreeUTooLow { degree_u: usize },

    #[error("at least one ring is required")]
    NoRings,

    #[error("ring {index} has a non-finite height or radius")]
    NonFiniteRing { index: usize },

    #[error("expected {expected} control points, got {actual}")]
    ControlPointCount { expected: usize, actual: usize },
}
