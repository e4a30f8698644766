//! # Unfold Errors
//!
//! Hard failures of graph construction and unfolding. Faces the traversal
//! cannot place are not errors; they are reported through
//! [`crate::net::UnflattenedFace`].

use thiserror::Error;

/// Errors that reject a mesh before or during unfolding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnfoldError {
    /// An edge is shared by more than two triangles.
    #[error("Non-manifold edge ({a}, {b}) is shared by {faces} triangles")]
    NonManifoldEdge { a: u32, b: u32, faces: usize },

    /// A triangle references a vertex that does not exist.
    #[error("Triangle {face} references vertex {vertex} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        vertex: u32,
        vertex_count: usize,
    },

    /// A triangle uses the same vertex more than once.
    #[error("Triangle {face} uses vertex {vertex} more than once")]
    RepeatedVertex { face: usize, vertex: u32 },

    /// A flat buffer length is not a multiple of its stride.
    #[error("Buffer of length {len} is not a multiple of {stride}")]
    InvalidBuffer { len: usize, stride: usize },

    /// The requested seed triangle does not exist.
    #[error("Seed face {seed} is out of range for a mesh with {face_count} faces")]
    InvalidSeed { seed: usize, face_count: usize },

    /// Invalid unfold parameters.
    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },
}

impl UnfoldError {
    /// Creates a non-manifold edge error for the edge `(a, b)`.
    pub fn non_manifold(a: u32, b: u32, faces: usize) -> Self {
        Self::NonManifoldEdge { a, b, faces }
    }

    /// Creates an invalid parameters error.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }
}

impl From<config::constants::ConfigError> for UnfoldError {
    fn from(err: config::constants::ConfigError) -> Self {
        Self::invalid_params(err.to_string())
    }
}

/// Result type for unfold operations.
pub type Result<T> = std::result::Result<T, UnfoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UnfoldError::non_manifold(2, 7, 3);
        assert_eq!(
            err.to_string(),
            "Non-manifold edge (2, 7) is shared by 3 triangles"
        );

        let err = UnfoldError::InvalidSeed {
            seed: 12,
            face_count: 4,
        };
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: UnfoldError = config::constants::ConfigError::InvalidTolerance(0.0).into();
        assert!(matches!(err, UnfoldError::InvalidParams { .. }));
    }
}
