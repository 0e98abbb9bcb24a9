//! # Frame Transport
//!
//! Computes a local orthonormal frame at every sample of a polyline so a
//! cross-section can be swept along it.
//!
//! Each frame depends only on the local forward difference, not on the
//! previous frame: there is no twist-minimizing propagation between samples.
//! Cross-section seams can therefore appear where the direction changes
//! sharply. This matches the reference behavior and is a documented
//! limitation, not a bug to paper over.

use crate::error::MeshError;
use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

/// Orthonormal basis attached to one sample of a swept curve.
///
/// `direction` points along the curve; `orto1` and `orto2` span the
/// cross-section plane perpendicular to it. All three are unit length and
/// mutually orthogonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Unit forward direction along the curve.
    pub direction: DVec3,
    /// First unit vector spanning the cross-section plane.
    pub orto1: DVec3,
    /// Second unit vector spanning the cross-section plane.
    pub orto2: DVec3,
}

impl Frame {
    /// Returns the point at `angle` radians on the circle of `radius`
    /// around `center` in this frame's cross-section plane.
    #[inline]
    pub fn circle_point(&self, center: DVec3, radius: f64, angle: f64) -> DVec3 {
        center + radius * (angle.cos() * self.orto1 + angle.sin() * self.orto2)
    }
}

/// Computes a [`Frame`] at every sample of `curve`.
///
/// The forward direction at sample `i` is the normalized forward difference
/// `curve[i+1] - curve[i]`, falling back to the backward difference at the
/// last sample. `orto1` is the normalized cross product of the direction
/// with the Z axis; when the direction is parallel to ±Z (within tolerance)
/// the X axis is used as the reference instead. `orto2 = direction × orto1`
/// is unit length by construction.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] when the curve has fewer than 2
/// samples, and [`MeshError::DegenerateDirection`] when two consecutive
/// samples coincide. Degenerate input is surfaced rather than replaced with
/// an arbitrary direction.
pub fn frames_along(curve: &[DVec3]) -> Result<Vec<Frame>, MeshError> {
    if curve.len() < 2 {
        return Err(MeshError::invalid_parameter(format!(
            "Frame transport needs at least 2 curve samples: {}",
            curve.len()
        )));
    }

    let n = curve.len();
    let mut frames = Vec::with_capacity(n);

    for i in 0..n {
        let diff = if i < n - 1 {
            curve[i + 1] - curve[i]
        } else {
            curve[i] - curve[i - 1]
        };

        let length = diff.length();
        if length <= EPSILON_TOLERANCE {
            return Err(MeshError::degenerate_direction(i));
        }
        let direction = diff / length;

        // The cross-product magnitude doubles as the parallelism test, so
        // both +Z and -Z directions take the X-axis fallback.
        let mut orto1 = direction.cross(DVec3::Z);
        if orto1.length() <= EPSILON_TOLERANCE {
            orto1 = direction.cross(DVec3::X);
        }
        let orto1 = orto1.normalize();
        let orto2 = direction.cross(orto1);

        frames.push(Frame {
            direction,
            orto1,
            orto2,
        });
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::hermite_curve;
    use approx::assert_relative_eq;

    fn assert_orthonormal(frame: &Frame) {
        assert_relative_eq!(frame.direction.length(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(frame.orto1.length(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(frame.orto2.length(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(frame.direction.dot(frame.orto1), 0.0, epsilon = 1e-9);
        assert_relative_eq!(frame.direction.dot(frame.orto2), 0.0, epsilon = 1e-9);
        assert_relative_eq!(frame.orto1.dot(frame.orto2), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_frames_are_orthonormal_along_curve() {
        let curve = hermite_curve(
            DVec3::ZERO,
            DVec3::new(2.0, 1.0, 3.0),
            DVec3::new(4.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 4.0),
            40,
        )
        .unwrap();
        let frames = frames_along(&curve).unwrap();
        assert_eq!(frames.len(), 40);
        for frame in &frames {
            assert_orthonormal(frame);
        }
    }

    #[test]
    fn test_vertical_direction_uses_fallback_axis() {
        // Direction parallel to +Z: cross with Z vanishes, X takes over.
        let curve = [DVec3::ZERO, DVec3::Z, DVec3::Z * 2.0];
        let frames = frames_along(&curve).unwrap();
        for frame in &frames {
            assert_orthonormal(frame);
            assert_relative_eq!(frame.direction.z, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_downward_direction_uses_fallback_axis() {
        let curve = [DVec3::Z * 2.0, DVec3::Z, DVec3::ZERO];
        let frames = frames_along(&curve).unwrap();
        for frame in &frames {
            assert_orthonormal(frame);
            assert_relative_eq!(frame.direction.z, -1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_last_sample_uses_backward_difference() {
        let curve = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)];
        let frames = frames_along(&curve).unwrap();
        // Last direction follows the final edge, not the first.
        assert_relative_eq!(frames[2].direction.y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_duplicate_samples_are_rejected() {
        let curve = [DVec3::ZERO, DVec3::ZERO, DVec3::X];
        let result = frames_along(&curve);
        assert!(matches!(
            result,
            Err(MeshError::DegenerateDirection { index: 0 })
        ));
    }

    #[test]
    fn test_single_sample_is_rejected() {
        assert!(frames_along(&[DVec3::ZERO]).is_err());
    }

    #[test]
    fn test_circle_point_stays_on_radius() {
        let curve = [DVec3::ZERO, DVec3::X];
        let frames = frames_along(&curve).unwrap();
        let p = frames[0].circle_point(DVec3::ZERO, 2.0, 1.234);
        assert_relative_eq!(p.length(), 2.0, epsilon = 1e-9);
        // Ring points live in the plane perpendicular to the direction.
        assert_relative_eq!(p.dot(frames[0].direction), 0.0, epsilon = 1e-9);
    }
}
