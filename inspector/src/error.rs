//! Inspector error types.
//!
//! Errors only cross the renderer-collaborator boundary. User-input misuse
//! (out-of-range channels, absent meshes, unavailable modes) never raises an
//! error; those paths clamp or no-op so interactive tooling stays quiet.

use thiserror::Error;

/// Errors reported by preview rendering operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectorError {
    /// The renderer could not create a requested resource.
    #[error("resource creation failed: {0}")]
    ResourceCreationFailed(String),

    /// A required renderer capability is absent.
    #[error("feature not supported: {0}")]
    FeatureNotSupported(String),

    /// The renderer rejected a draw submission.
    #[error("draw submission failed: {0}")]
    DrawFailed(String),

    /// An internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InspectorError::DrawFailed("device lost".to_string());
        assert_eq!(err.to_string(), "draw submission failed: device lost");

        let err = InspectorError::FeatureNotSupported("offscreen targets".to_string());
        assert_eq!(err.to_string(), "feature not supported: offscreen targets");
    }
}
