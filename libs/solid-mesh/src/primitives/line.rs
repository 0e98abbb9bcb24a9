//! # Line Segment Primitive
//!
//! A two-vertex segment. Its single "face" is the degenerate `[0, 1, 1]`
//! triangle kept for downstream-render parity; it has no area.

use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

use crate::error::MeshError;
use crate::solid::{ShapeKind, Solid};

/// Creates a line segment starting at `origin`, extending `length` units
/// along the normalized `direction`.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] when `length` is not positive or
/// `direction` has (near-)zero length.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_mesh::primitives::line_segment;
///
/// let solid = line_segment(DVec3::ZERO, DVec3::X, 4.0).unwrap();
/// assert_eq!(solid.vertex_count(), 2);
/// ```
pub fn line_segment(origin: DVec3, direction: DVec3, length: f64) -> Result<Solid, MeshError> {
    if length <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Line length must be positive: {}",
            length
        )));
    }

    let dir_length = direction.length();
    if dir_length <= EPSILON_TOLERANCE {
        return Err(MeshError::invalid_parameter(
            "Line direction must be a non-zero vector",
        ));
    }

    let end = origin + (direction / dir_length) * length;
    Ok(Solid::from_parts(vec![origin, end], ShapeKind::LineSegment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_line_segment_endpoints() {
        let solid = line_segment(DVec3::new(1.0, 0.0, 0.0), DVec3::Y, 3.0).unwrap();
        assert_eq!(solid.vertex_count(), 2);
        assert_eq!(solid.vertices()[0], DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(solid.vertices()[1], DVec3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn test_line_segment_normalizes_direction() {
        let solid = line_segment(DVec3::ZERO, DVec3::new(0.0, 0.0, 10.0), 2.0).unwrap();
        assert_relative_eq!(solid.vertices()[1].z, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_line_segment_degenerate_face() {
        let solid = line_segment(DVec3::ZERO, DVec3::X, 1.0).unwrap();
        assert_eq!(solid.faces().unwrap(), vec![[0, 1, 1]]);
    }

    #[test]
    fn test_line_segment_invalid_inputs() {
        assert!(line_segment(DVec3::ZERO, DVec3::X, 0.0).is_err());
        assert!(line_segment(DVec3::ZERO, DVec3::ZERO, 1.0).is_err());
    }
}
