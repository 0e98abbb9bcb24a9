//! # Cylinder Primitive
//!
//! Generates a capped circular cylinder standing on the XY plane.

use std::f64::consts::PI;

use config::constants::DEFAULT_SEGMENTS;
use glam::DVec3;

use crate::error::MeshError;
use crate::solid::{ShapeKind, Solid};

/// Creates a cylinder with the default angular resolution
/// ([`DEFAULT_SEGMENTS`]).
///
/// # Errors
///
/// Same conditions as [`cylinder`].
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
/// use solid_mesh::primitives::cylinder_default;
///
/// let solid = cylinder_default(1.0, 2.0).unwrap();
/// assert_eq!(solid.vertex_count() as u32, 2 * DEFAULT_SEGMENTS + 2);
/// ```
pub fn cylinder_default(radius: f64, height: f64) -> Result<Solid, MeshError> {
    cylinder(radius, height, DEFAULT_SEGMENTS)
}

/// Creates a cylinder of `radius` and `height` with `segments` angular
/// steps.
///
/// Layout: interleaved (base, top) vertex pairs per angular step
/// `θ = 2π·j / segments`, then the base center and the top center appended
/// last, for `2·segments + 2` vertices total.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] when `radius` or `height` is not
/// positive, or `segments < 3`.
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::cylinder;
///
/// let solid = cylinder(1.0, 2.0, 4).unwrap();
/// assert_eq!(solid.vertex_count(), 10);
/// assert_eq!(solid.faces().unwrap().len(), 16);
/// ```
pub fn cylinder(radius: f64, height: f64, segments: u32) -> Result<Solid, MeshError> {
    if radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Cylinder radius must be positive: {}",
            radius
        )));
    }
    if height <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Cylinder height must be positive: {}",
            height
        )));
    }
    if segments < 3 {
        return Err(MeshError::invalid_parameter(format!(
            "Cylinder segments must be at least 3: {}",
            segments
        )));
    }

    let mut vertices = Vec::with_capacity(2 * segments as usize + 2);

    for j in 0..segments {
        let theta = 2.0 * PI * j as f64 / segments as f64;
        let x = radius * theta.cos();
        let y = radius * theta.sin();

        vertices.push(DVec3::new(x, y, 0.0));
        vertices.push(DVec3::new(x, y, height));
    }

    // Cap centers, referenced by the topology builder as the last two
    // indices.
    vertices.push(DVec3::new(0.0, 0.0, 0.0));
    vertices.push(DVec3::new(0.0, 0.0, height));

    Ok(Solid::from_parts(vertices, ShapeKind::Cylinder { segments }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_counts() {
        let solid = cylinder(1.0, 2.0, 4).unwrap();
        assert_eq!(solid.vertex_count(), 10);
        // 4 steps × (2 side + 1 bottom + 1 top).
        assert_eq!(solid.faces().unwrap().len(), 16);
    }

    #[test]
    fn test_cylinder_ring_radius() {
        let solid = cylinder(2.5, 1.0, 16).unwrap();
        for pair in solid.vertices()[..32].chunks(2) {
            assert_relative_eq!(pair[0].truncate().length(), 2.5, epsilon = 1e-9);
            assert_relative_eq!(pair[0].z, 0.0, epsilon = 1e-12);
            assert_relative_eq!(pair[1].z, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cylinder_centers_appended_last() {
        let solid = cylinder(1.0, 3.0, 8).unwrap();
        let n = solid.vertex_count();
        assert_eq!(solid.vertices()[n - 2], DVec3::ZERO);
        assert_eq!(solid.vertices()[n - 1], DVec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_cylinder_default_resolution() {
        let solid = cylinder_default(1.0, 2.0).unwrap();
        assert_eq!(solid.vertex_count() as u32, 2 * DEFAULT_SEGMENTS + 2);
        assert_eq!(
            solid.shape(),
            ShapeKind::Cylinder {
                segments: DEFAULT_SEGMENTS
            }
        );
    }

    #[test]
    fn test_cylinder_invalid_parameters() {
        assert!(cylinder(0.0, 1.0, 8).is_err());
        assert!(cylinder(1.0, 0.0, 8).is_err());
        assert!(cylinder(1.0, 1.0, 2).is_err());
    }
}
