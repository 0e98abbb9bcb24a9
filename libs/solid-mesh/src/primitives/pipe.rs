//! # Straight Pipe Primitive
//!
//! Generates a straight annular pipe (a tube with wall thickness) standing
//! on the XY plane.
//!
//! Radius parameters are ordered inner-then-outer throughout this crate.

use std::f64::consts::PI;

use config::constants::DEFAULT_SEGMENTS;
use glam::DVec3;

use crate::error::MeshError;
use crate::solid::{ShapeKind, Solid};

/// Creates a straight annular pipe with the default angular resolution
/// ([`DEFAULT_SEGMENTS`]).
///
/// # Errors
///
/// Same conditions as [`straight_pipe`].
pub fn straight_pipe_default(
    inner_radius: f64,
    outer_radius: f64,
    height: f64,
) -> Result<Solid, MeshError> {
    straight_pipe(inner_radius, outer_radius, height, DEFAULT_SEGMENTS)
}

/// Creates a straight annular pipe of `height` with `segments` angular
/// steps.
///
/// Layout: per angular step, four consecutive vertices
/// (outer-base, outer-top, inner-base, inner-top), for `4·segments` total.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] unless
/// `0 ≤ inner_radius < outer_radius`, `height > 0` and `segments ≥ 3`.
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::straight_pipe;
///
/// let solid = straight_pipe(1.0, 2.0, 1.0, 6).unwrap();
/// assert_eq!(solid.vertex_count(), 24);
/// assert_eq!(solid.faces().unwrap().len(), 48);
/// ```
pub fn straight_pipe(
    inner_radius: f64,
    outer_radius: f64,
    height: f64,
    segments: u32,
) -> Result<Solid, MeshError> {
    validate_annulus(inner_radius, outer_radius)?;
    if height <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Pipe height must be positive: {}",
            height
        )));
    }
    if segments < 3 {
        return Err(MeshError::invalid_parameter(format!(
            "Pipe segments must be at least 3: {}",
            segments
        )));
    }

    let mut vertices = Vec::with_capacity(4 * segments as usize);

    for j in 0..segments {
        let theta = 2.0 * PI * j as f64 / segments as f64;
        let cos_t = theta.cos();
        let sin_t = theta.sin();

        let outer = DVec3::new(outer_radius * cos_t, outer_radius * sin_t, 0.0);
        let inner = DVec3::new(inner_radius * cos_t, inner_radius * sin_t, 0.0);

        vertices.push(outer);
        vertices.push(outer + DVec3::new(0.0, 0.0, height));
        vertices.push(inner);
        vertices.push(inner + DVec3::new(0.0, 0.0, height));
    }

    Ok(Solid::from_parts(vertices, ShapeKind::StraightPipe { segments }))
}

/// Shared annulus validation: `0 ≤ inner < outer`.
pub(crate) fn validate_annulus(inner_radius: f64, outer_radius: f64) -> Result<(), MeshError> {
    if inner_radius < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Inner radius must be non-negative: {}",
            inner_radius
        )));
    }
    if outer_radius <= inner_radius {
        return Err(MeshError::invalid_parameter(format!(
            "Outer radius must exceed inner radius: inner={}, outer={}",
            inner_radius, outer_radius
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_straight_pipe_counts() {
        let solid = straight_pipe(1.0, 2.0, 1.0, 6).unwrap();
        assert_eq!(solid.vertex_count(), 24);
        // 6 steps × 8 triangles.
        assert_eq!(solid.faces().unwrap().len(), 48);
    }

    #[test]
    fn test_straight_pipe_tuple_layout() {
        let solid = straight_pipe(1.0, 3.0, 2.0, 8).unwrap();
        for tuple in solid.vertices().chunks(4) {
            assert_relative_eq!(tuple[0].truncate().length(), 3.0, epsilon = 1e-9);
            assert_relative_eq!(tuple[1].truncate().length(), 3.0, epsilon = 1e-9);
            assert_relative_eq!(tuple[2].truncate().length(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(tuple[3].truncate().length(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(tuple[0].z, 0.0, epsilon = 1e-12);
            assert_relative_eq!(tuple[1].z, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_straight_pipe_default_resolution() {
        let solid = straight_pipe_default(1.0, 2.0, 1.0).unwrap();
        assert_eq!(solid.vertex_count() as u32, 4 * DEFAULT_SEGMENTS);
        assert_eq!(
            solid.shape(),
            ShapeKind::StraightPipe {
                segments: DEFAULT_SEGMENTS
            }
        );
    }

    #[test]
    fn test_straight_pipe_invalid_radii() {
        assert!(straight_pipe(2.0, 1.0, 1.0, 8).is_err());
        assert!(straight_pipe(1.0, 1.0, 1.0, 8).is_err());
        assert!(straight_pipe(-0.5, 1.0, 1.0, 8).is_err());
    }

    #[test]
    fn test_straight_pipe_zero_inner_radius_allowed() {
        let solid = straight_pipe(0.0, 1.0, 1.0, 8).unwrap();
        assert_eq!(solid.vertex_count(), 32);
    }

    #[test]
    fn test_straight_pipe_invalid_height_and_segments() {
        assert!(straight_pipe(1.0, 2.0, 0.0, 8).is_err());
        assert!(straight_pipe(1.0, 2.0, 1.0, 2).is_err());
    }
}
