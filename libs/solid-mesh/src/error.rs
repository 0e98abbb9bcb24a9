//! # Mesh Errors
//!
//! Error types for solid generation, topology derivation, and transforms.
//!
//! All errors are local and synchronous: generators validate their inputs
//! eagerly and fail before allocating any vertex buffer, so a caller never
//! observes a partially built solid.

use thiserror::Error;

/// Errors that can occur while building or transforming a solid mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A generator parameter violated its constraint (non-positive
    /// dimension, resolution below minimum, inverted radius order, ...).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Which parameter was rejected and why.
        message: String,
    },

    /// An unrecognized rotation axis token.
    #[error("Invalid rotation axis: {token:?} (expected \"x\", \"y\" or \"z\")")]
    InvalidAxis {
        /// The token that failed to parse.
        token: String,
    },

    /// The declared shape resolution and the vertex buffer length disagree.
    #[error("Inconsistent resolution for {shape}: expected {expected} vertices, found {actual}")]
    InconsistentResolution {
        /// Human-readable shape family name.
        shape: &'static str,
        /// Vertex count implied by the declared resolution.
        expected: usize,
        /// Actual vertex buffer length.
        actual: usize,
    },

    /// Two consecutive curve samples coincide, leaving the sweep frame
    /// without a defined forward direction.
    #[error("Degenerate direction at curve sample {index}: consecutive points coincide")]
    DegenerateDirection {
        /// Index of the curve sample with no usable tangent.
        index: usize,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an invalid rotation axis error.
    pub fn invalid_axis(token: impl Into<String>) -> Self {
        Self::InvalidAxis {
            token: token.into(),
        }
    }

    /// Creates an inconsistent resolution error.
    pub fn inconsistent_resolution(shape: &'static str, expected: usize, actual: usize) -> Self {
        Self::InconsistentResolution {
            shape,
            expected,
            actual,
        }
    }

    /// Creates a degenerate direction error.
    pub fn degenerate_direction(index: usize) -> Self {
        Self::DegenerateDirection { index }
    }
}
