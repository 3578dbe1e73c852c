use thiserror::Error;

/// Errors produced by the helix core.
///
/// Neither variant is fatal to the visualization: bad parameters keep the
/// previous (or no) geometry, and a missing sensor falls back to neutral tilt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HelixError {
    /// Geometry inputs are degenerate, negative or non-finite.
    #[error("invalid helix parameters: {0}")]
    InvalidParameters(String),
    /// No motion input is available.
    #[error("motion sensor unavailable")]
    SensorUnavailable,
}
