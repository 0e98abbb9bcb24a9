//! # Spline Evaluator
//!
//! Samples a cubic Hermite curve between two endpoints with prescribed
//! tangents. The curve feeds the sweep frame used by the curved pipe
//! generator, but is exposed on its own for any path-based consumer.

use crate::error::MeshError;
use glam::DVec3;

/// Samples the cubic Hermite curve defined by endpoints `p0`, `p1` and
/// tangents `t0`, `t1` at `samples` uniformly spaced parameter values over
/// `[0, 1]`, both ends inclusive.
///
/// The basis functions are the standard Hermite polynomials:
/// `h00 = 2t³ − 3t² + 1`, `h10 = t³ − 2t² + t`,
/// `h01 = −2t³ + 3t²`, `h11 = t³ − t²`.
///
/// The first sample equals `p0` and the last equals `p1` (up to floating
/// tolerance). Zero tangents are permitted and simply flatten the curve
/// locally.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] when `samples < 2`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_mesh::spline::hermite_curve;
///
/// let curve = hermite_curve(
///     DVec3::ZERO,
///     DVec3::new(1.0, 0.0, 1.0),
///     DVec3::X,
///     DVec3::Z,
///     16,
/// ).unwrap();
/// assert_eq!(curve.len(), 16);
/// ```
pub fn hermite_curve(
    p0: DVec3,
    p1: DVec3,
    t0: DVec3,
    t1: DVec3,
    samples: u32,
) -> Result<Vec<DVec3>, MeshError> {
    if samples < 2 {
        return Err(MeshError::invalid_parameter(format!(
            "Hermite curve needs at least 2 samples: {}",
            samples
        )));
    }

    let last = (samples - 1) as f64;
    let mut points = Vec::with_capacity(samples as usize);

    for i in 0..samples {
        let t = i as f64 / last;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        points.push(h00 * p0 + h10 * t0 + h01 * p1 + h11 * t1);
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints_match() {
        let p0 = DVec3::new(1.0, -2.0, 3.0);
        let p1 = DVec3::new(-4.0, 5.0, -6.0);
        let curve = hermite_curve(p0, p1, DVec3::new(10.0, 0.0, 0.0), DVec3::new(0.0, 10.0, 0.0), 50)
            .unwrap();

        assert_eq!(curve.len(), 50);
        assert_relative_eq!(curve[0].x, p0.x, epsilon = 1e-9);
        assert_relative_eq!(curve[0].y, p0.y, epsilon = 1e-9);
        assert_relative_eq!(curve[0].z, p0.z, epsilon = 1e-9);
        assert_relative_eq!(curve[49].x, p1.x, epsilon = 1e-9);
        assert_relative_eq!(curve[49].y, p1.y, epsilon = 1e-9);
        assert_relative_eq!(curve[49].z, p1.z, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_tangents_give_straight_segment() {
        // With zero tangents the Hermite blend degenerates to a smooth
        // interpolation along the chord.
        let curve = hermite_curve(DVec3::ZERO, DVec3::X, DVec3::ZERO, DVec3::ZERO, 11).unwrap();
        for p in &curve {
            assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
            assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
            assert!(p.x >= -1e-12 && p.x <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn test_midpoint_of_symmetric_curve() {
        // Symmetric endpoints and mirrored tangents put the midpoint at the
        // average of the endpoints.
        let p0 = DVec3::new(-1.0, 0.0, 0.0);
        let p1 = DVec3::new(1.0, 0.0, 0.0);
        let t = DVec3::new(0.0, 2.0, 0.0);
        let curve = hermite_curve(p0, p1, t, -t, 3).unwrap();
        assert_relative_eq!(curve[1].x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_too_few_samples() {
        let result = hermite_curve(DVec3::ZERO, DVec3::X, DVec3::X, DVec3::X, 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_minimum_samples() {
        let curve = hermite_curve(DVec3::ZERO, DVec3::X, DVec3::X, DVec3::X, 2).unwrap();
        assert_eq!(curve.len(), 2);
        assert_relative_eq!(curve[1].x, 1.0, epsilon = 1e-9);
    }
}
