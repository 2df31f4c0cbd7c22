/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Failures surfaced at the network's call boundary.
///
/// Every check runs before any state is touched, so an `Err` always leaves the
/// network exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// Invalid layer layout, unknown activation profile or bad training parameters.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A vector handed to the network has the wrong length for its layer.
    #[error("shape mismatch in {context}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl NetworkError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, NetworkError::Configuration(_))
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, NetworkError::ShapeMismatch { .. })
    }

    /// Returns `ShapeMismatch` unless `actual == expected`.
    pub(crate) fn check_len(context: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(NetworkError::ShapeMismatch { context, expected, actual })
        }
    }
}

impl From<std::convert::Infallible> for NetworkError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
