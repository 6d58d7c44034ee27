//! Input validation errors.

/// Overlay geometry error.
///
/// Every variant is a synchronous input-validation failure. Nothing in this
/// crate performs I/O, so nothing is retryable and nothing is fatal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    /// An aspect ratio was zero, negative, NaN or infinite.
    #[error("aspect ratio must be finite and greater than zero")]
    InvalidAspectRatio,
    /// A container had zero, negative or non-finite width or height.
    #[error("container width and height must be finite and greater than zero")]
    EmptyContainer,
    /// `samples_per_arc` was zero.
    #[error("samples per arc must be at least 1")]
    ZeroSamplesPerArc,
    /// `steps` exceeded [`SpiralConfig::MAX_STEPS`](crate::SpiralConfig::MAX_STEPS).
    #[error("too many spiral steps")]
    TooManySteps,
    /// Framing overflowed: the input aspect was too extreme for the
    /// container and the resulting frame is not finite.
    #[error("frame geometry is not finite")]
    NonFiniteFrame,
    /// A composition mode name did not match any known mode.
    #[error("unknown composition mode")]
    UnknownMode,
}

/// Reject non-finite or non-positive aspect ratios.
pub(crate) fn check_aspect(aspect: f64) -> Result<f64, OverlayError> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(aspect)
    } else {
        Err(OverlayError::InvalidAspectRatio)
    }
}
