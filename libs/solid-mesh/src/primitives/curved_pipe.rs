//! # Curved Pipe Primitive
//!
//! Sweeps an annular cross-section along a cubic Hermite curve. The spline
//! evaluator samples the path and the frame transport supplies a local
//! orthonormal basis at every sample; outer and inner ring vertices are
//! emitted in that basis.
//!
//! Frames carry no twist correction between samples, so sharp path turns
//! can produce visible cross-section seams (see [`crate::frame`]).

use std::f64::consts::PI;

use config::constants::DEFAULT_CURVE_SAMPLES;
use glam::DVec3;

use crate::error::MeshError;
use crate::frame::frames_along;
use crate::primitives::pipe::validate_annulus;
use crate::solid::{ShapeKind, Solid};
use crate::spline::hermite_curve;

/// Parameters for the curved pipe generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvedPipeParams {
    /// Curve start point.
    pub p0: DVec3,
    /// Curve end point.
    pub p1: DVec3,
    /// Tangent at the start point.
    pub t0: DVec3,
    /// Tangent at the end point.
    pub t1: DVec3,
    /// Inner (bore) radius; `0 ≤ inner < outer`.
    pub inner_radius: f64,
    /// Outer wall radius.
    pub outer_radius: f64,
    /// Angular steps around the cross-section (≥ 3).
    pub segments: u32,
    /// Parametric samples along the curve (≥ 2).
    pub curve_samples: u32,
}

impl Default for CurvedPipeParams {
    fn default() -> Self {
        Self {
            p0: DVec3::ZERO,
            p1: DVec3::X,
            t0: DVec3::X,
            t1: DVec3::X,
            inner_radius: 0.15,
            outer_radius: 0.2,
            segments: 16,
            curve_samples: DEFAULT_CURVE_SAMPLES,
        }
    }
}

/// Creates an annular pipe swept along the Hermite curve described by
/// `params`.
///
/// Layout: for each curve sample (outer loop), for each angular step, one
/// outer-ring vertex immediately followed by its inner-ring partner, for
/// `2·segments·curve_samples` vertices total.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] for an invalid radius pair or
/// resolution below minimum, and [`MeshError::DegenerateDirection`] when
/// the sampled curve contains coincident consecutive points (for example a
/// zero-length curve with zero tangents).
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::{curved_pipe, CurvedPipeParams};
///
/// let params = CurvedPipeParams {
///     segments: 8,
///     curve_samples: 20,
///     ..CurvedPipeParams::default()
/// };
/// let solid = curved_pipe(&params).unwrap();
/// assert_eq!(solid.vertex_count(), 2 * 8 * 20);
/// ```
pub fn curved_pipe(params: &CurvedPipeParams) -> Result<Solid, MeshError> {
    validate_annulus(params.inner_radius, params.outer_radius)?;
    if params.segments < 3 {
        return Err(MeshError::invalid_parameter(format!(
            "Curved pipe segments must be at least 3: {}",
            params.segments
        )));
    }
    if params.curve_samples < 2 {
        return Err(MeshError::invalid_parameter(format!(
            "Curved pipe curve samples must be at least 2: {}",
            params.curve_samples
        )));
    }

    let curve = hermite_curve(
        params.p0,
        params.p1,
        params.t0,
        params.t1,
        params.curve_samples,
    )?;
    let frames = frames_along(&curve)?;

    let mut vertices =
        Vec::with_capacity(2 * params.segments as usize * params.curve_samples as usize);

    for (point, frame) in curve.iter().zip(&frames) {
        for j in 0..params.segments {
            let angle = 2.0 * PI * j as f64 / params.segments as f64;
            vertices.push(frame.circle_point(*point, params.outer_radius, angle));
            vertices.push(frame.circle_point(*point, params.inner_radius, angle));
        }
    }

    Ok(Solid::from_parts(
        vertices,
        ShapeKind::CurvedPipe {
            segments: params.segments,
            curve_samples: params.curve_samples,
        },
    ))
}
