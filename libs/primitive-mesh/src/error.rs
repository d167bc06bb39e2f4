//! # Mesh Errors
//!
//! Error types for primitive mesh generation.
//!
//! A failed request never yields partial geometry: every check runs before
//! any buffer is allocated.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// A parameter is outside its domain (e.g. negative subdivisions).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected value.
        message: String,
    },

    /// Custom generator limits were rejected
    #[error("Invalid limits: {0}")]
    InvalidLimits(#[from] ConfigError),

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertices the request would produce.
        count: usize,
        /// Vertex budget in effect.
        max: usize,
    },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Triangles the request would produce, `usize::MAX` on overflow.
        count: usize,
        /// Triangle budget in effect.
        max: usize,
    },
}

impl MeshError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_argument("subdivisions must be >= 0, got -1");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("-1"));

        let err = MeshError::TooManyTriangles {
            count: 20_971_520,
            max: 10_000_000,
        };
        assert!(err.to_string().contains("20971520"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidTriangleBudget(1).into();
        assert!(matches!(err, MeshError::InvalidLimits(_)));
        assert!(err.to_string().contains("max_triangles"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
