//! # Transform Engine
//!
//! Pure transforms over vertex buffers: scale, translate, axis rotation in
//! degrees, and the two scene-fitting normalizations. Every function returns
//! a fresh buffer with the same length and order as the input, so triangle
//! index topology stays valid across any sequence of transforms.

use std::str::FromStr;

use config::constants::{GlobalConfig, EPSILON_TOLERANCE, SCENE_LIMIT};
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Coordinate axis for rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Rotation about the X axis.
    X,
    /// Rotation about the Y axis.
    Y,
    /// Rotation about the Z axis.
    Z,
}

impl FromStr for Axis {
    type Err = MeshError;

    /// Parses an axis token. Accepts `"x"`, `"y"`, `"z"` in either case;
    /// anything else is an [`MeshError::InvalidAxis`].
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(MeshError::invalid_axis(other)),
        }
    }
}

/// Strategy used by [`normalize_scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizeMode {
    /// One global factor from the largest absolute coordinate; applied only
    /// when that coordinate exceeds the limit.
    Uniform,
    /// One factor per axis, always applied (factor 1 where an axis has zero
    /// extent).
    PerAxis,
}

/// Scales every vertex componentwise.
pub fn scale(vertices: &[DVec3], sx: f64, sy: f64, sz: f64) -> Vec<DVec3> {
    let factors = DVec3::new(sx, sy, sz);
    vertices.iter().map(|v| *v * factors).collect()
}

/// Translates every vertex by `delta`.
pub fn translate(vertices: &[DVec3], delta: DVec3) -> Vec<DVec3> {
    vertices.iter().map(|v| *v + delta).collect()
}

/// Rotates every vertex about `axis` by `degrees`, using the standard
/// right-handed rotation matrix for that axis.
pub fn rotate(vertices: &[DVec3], axis: Axis, degrees: f64) -> Vec<DVec3> {
    let radians = degrees.to_radians();
    let matrix = match axis {
        Axis::X => DMat3::from_rotation_x(radians),
        Axis::Y => DMat3::from_rotation_y(radians),
        Axis::Z => DMat3::from_rotation_z(radians),
    };
    vertices.iter().map(|v| matrix * *v).collect()
}

/// Rescales a scene's vertex set to fit within the cube `[-limit, limit]³`.
///
/// In [`NormalizeMode::Uniform`] the single largest absolute coordinate
/// across all vertices and axes is found; only if it exceeds `limit` are all
/// vertices scaled by `limit / max`, which makes the operation a no-op on
/// scenes already within bounds and idempotent in general. In
/// [`NormalizeMode::PerAxis`] one factor is computed per axis independently
/// and always applied.
pub fn normalize_scene(vertices: &[DVec3], limit: f64, mode: NormalizeMode) -> Vec<DVec3> {
    match mode {
        NormalizeMode::Uniform => {
            let max_abs = vertices
                .iter()
                .map(|v| v.abs().max_element())
                .fold(0.0, f64::max);
            if max_abs > limit {
                let factor = limit / max_abs;
                log::info!("normalizing scene with factor {:.3}", factor);
                vertices.iter().map(|v| *v * factor).collect()
            } else {
                vertices.to_vec()
            }
        }
        NormalizeMode::PerAxis => {
            let mut max_abs = DVec3::ZERO;
            for v in vertices {
                max_abs = max_abs.max(v.abs());
            }
            let factor = DVec3::new(
                if max_abs.x > 0.0 { limit / max_abs.x } else { 1.0 },
                if max_abs.y > 0.0 { limit / max_abs.y } else { 1.0 },
                if max_abs.z > 0.0 { limit / max_abs.z } else { 1.0 },
            );
            vertices.iter().map(|v| *v * factor).collect()
        }
    }
}

/// [`normalize_scene`] with the default scene half-extent
/// ([`SCENE_LIMIT`]).
pub fn normalize_scene_default(vertices: &[DVec3], mode: NormalizeMode) -> Vec<DVec3> {
    normalize_scene(vertices, SCENE_LIMIT, mode)
}

/// [`normalize_scene`] taking its limit from a validated configuration
/// snapshot.
///
/// # Example
///
/// ```rust
/// use config::constants::GlobalConfig;
/// use glam::DVec3;
/// use solid_mesh::transform::{normalize_scene_with, NormalizeMode};
///
/// let cfg = GlobalConfig::new(1.0e-9, 24, 5.0).unwrap();
/// let fitted = normalize_scene_with(
///     &[DVec3::new(20.0, 0.0, 0.0)],
///     &cfg,
///     NormalizeMode::Uniform,
/// );
/// assert!((fitted[0].x - 5.0).abs() < 1e-9);
/// ```
pub fn normalize_scene_with(
    vertices: &[DVec3],
    config: &GlobalConfig,
    mode: NormalizeMode,
) -> Vec<DVec3> {
    normalize_scene(vertices, config.scene_limit, mode)
}

/// Centers a vertex set on its centroid, scales it uniformly so the largest
/// absolute coordinate becomes `limit / 2` (scale 1 when the set has no
/// extent), then recenters the result at `target`.
pub fn normalize_solid(vertices: &[DVec3], target: DVec3, limit: f64) -> Vec<DVec3> {
    if vertices.is_empty() {
        return Vec::new();
    }

    let centroid = vertices.iter().copied().sum::<DVec3>() / vertices.len() as f64;
    let centered: Vec<DVec3> = vertices.iter().map(|v| *v - centroid).collect();

    let max_abs = centered
        .iter()
        .map(|v| v.abs().max_element())
        .fold(0.0, f64::max);
    let factor = if max_abs > EPSILON_TOLERANCE {
        (limit / 2.0) / max_abs
    } else {
        1.0
    };

    centered.iter().map(|v| *v * factor + target).collect()
}
