//! # Topology Builder
//!
//! Derives the triangle index list for a vertex buffer from its declared
//! [`ShapeKind`]. The face list carries no independent state: it is rebuilt
//! wholesale from `(shape kind, vertex count)` whenever requested, so index
//! topology survives any transform that preserves buffer length and order.
//!
//! Dispatch is an exhaustive match over the shape enum; adding a shape kind
//! is a compile-time-checked single-point change.

use crate::error::MeshError;
use crate::solid::ShapeKind;

/// A triangle as three indices into a vertex buffer. Winding order
/// determines the outward normal via the right-hand rule.
pub type Triangle = [u32; 3];

/// Builds the triangle index list for a buffer of `vertex_count` vertices
/// laid out according to `shape`.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] when the declared resolution is
/// below its minimum, and [`MeshError::InconsistentResolution`] when the
/// buffer length does not match the count implied by the shape kind.
pub fn face_list(shape: &ShapeKind, vertex_count: usize) -> Result<Vec<Triangle>, MeshError> {
    match *shape {
        ShapeKind::Cuboid { grid_res } => cuboid_faces(grid_res, vertex_count),
        ShapeKind::LineSegment => line_faces(vertex_count),
        ShapeKind::Cylinder { segments } => cylinder_faces(segments, vertex_count),
        ShapeKind::StraightPipe { segments } => straight_pipe_faces(segments, vertex_count),
        ShapeKind::CurvedPipe {
            segments,
            curve_samples,
        } => curved_pipe_faces(segments, curve_samples, vertex_count),
    }
}

/// Fixed 12-triangle table for the 8-corner layout, plus the boundary-quad
/// enumeration for subdivided `(res+1)³` lattices.
fn cuboid_faces(grid_res: u32, vertex_count: usize) -> Result<Vec<Triangle>, MeshError> {
    if grid_res < 1 {
        return Err(MeshError::invalid_parameter(format!(
            "Cuboid grid resolution must be at least 1: {}",
            grid_res
        )));
    }

    let res = grid_res as usize;
    let expected = (res + 1) * (res + 1) * (res + 1);
    if vertex_count != expected {
        return Err(MeshError::inconsistent_resolution(
            "cuboid",
            expected,
            vertex_count,
        ));
    }

    // 8-corner layout: fixed table over the canonical corner order.
    if vertex_count == 8 {
        return Ok(vec![
            [0, 1, 2], [0, 2, 3], // bottom
            [4, 5, 6], [4, 6, 7], // top
            [0, 1, 5], [0, 5, 4], // front
            [2, 3, 7], [2, 7, 6], // back
            [1, 2, 6], [1, 6, 5], // right
            [3, 0, 4], [3, 4, 7], // left
        ]);
    }

    // Lattice layout: two triangles per boundary quad on the six bounding
    // faces, winding flipped between the min and max face of each axis pair.
    let n = res + 1;
    let idx = |i: usize, j: usize, k: usize| (k * n * n + j * n + i) as u32;
    let mut faces = Vec::with_capacity(12 * res * res);

    for j in 0..res {
        for i in 0..res {
            // bottom (k = 0)
            let (v0, v1, v2, v3) = (idx(i, j, 0), idx(i + 1, j, 0), idx(i + 1, j + 1, 0), idx(i, j + 1, 0));
            faces.push([v0, v1, v2]);
            faces.push([v0, v2, v3]);
            // top (k = res)
            let (v0, v1, v2, v3) = (
                idx(i, j, res),
                idx(i + 1, j, res),
                idx(i + 1, j + 1, res),
                idx(i, j + 1, res),
            );
            faces.push([v0, v2, v1]);
            faces.push([v0, v3, v2]);
        }
    }

    for k in 0..res {
        for i in 0..res {
            // front (j = 0)
            let (v0, v1, v2, v3) = (idx(i, 0, k), idx(i + 1, 0, k), idx(i + 1, 0, k + 1), idx(i, 0, k + 1));
            faces.push([v0, v1, v2]);
            faces.push([v0, v2, v3]);
            // back (j = res)
            let (v0, v1, v2, v3) = (
                idx(i, res, k),
                idx(i + 1, res, k),
                idx(i + 1, res, k + 1),
                idx(i, res, k + 1),
            );
            faces.push([v0, v2, v1]);
            faces.push([v0, v3, v2]);
        }
    }

    for k in 0..res {
        for j in 0..res {
            // left (i = 0)
            let (v0, v1, v2, v3) = (idx(0, j, k), idx(0, j + 1, k), idx(0, j + 1, k + 1), idx(0, j, k + 1));
            faces.push([v0, v1, v2]);
            faces.push([v0, v2, v3]);
            // right (i = res)
            let (v0, v1, v2, v3) = (
                idx(res, j, k),
                idx(res, j + 1, k),
                idx(res, j + 1, k + 1),
                idx(res, j, k + 1),
            );
            faces.push([v0, v2, v1]);
            faces.push([v0, v3, v2]);
        }
    }

    Ok(faces)
}

/// Single degenerate `[0, 1, 1]` triangle: a rendering sentinel kept from
/// the reference behavior, not a real face.
fn line_faces(vertex_count: usize) -> Result<Vec<Triangle>, MeshError> {
    if vertex_count != 2 {
        return Err(MeshError::inconsistent_resolution(
            "line segment",
            2,
            vertex_count,
        ));
    }
    Ok(vec![[0, 1, 1]])
}

/// Side quads plus cap fans over the interleaved (base, top) pair layout
/// with the two center vertices appended last.
fn cylinder_faces(segments: u32, vertex_count: usize) -> Result<Vec<Triangle>, MeshError> {
    if segments < 3 {
        return Err(MeshError::invalid_parameter(format!(
            "Cylinder segments must be at least 3: {}",
            segments
        )));
    }

    let segs = segments as usize;
    let expected = 2 * segs + 2;
    if vertex_count != expected {
        return Err(MeshError::inconsistent_resolution(
            "cylinder",
            expected,
            vertex_count,
        ));
    }

    let ring = 2 * segs as u32;
    let base_center = ring;
    let top_center = ring + 1;
    let mut faces = Vec::with_capacity(4 * segs);

    for i in 0..segs as u32 {
        let i_base = i * 2;
        let i_top = i_base + 1;
        let i_base_next = (i_base + 2) % ring;
        let i_top_next = i_base_next + 1;

        // lateral wall
        faces.push([i_base, i_base_next, i_top_next]);
        faces.push([i_base, i_top_next, i_top]);

        // caps
        faces.push([base_center, i_base_next, i_base]);
        faces.push([top_center, i_top, i_top_next]);
    }

    Ok(faces)
}

/// Eight triangles per angular step over the 4-tuple layout
/// (outer-base, outer-top, inner-base, inner-top); the inner wall winds
/// reversed because it faces the bore.
fn straight_pipe_faces(segments: u32, vertex_count: usize) -> Result<Vec<Triangle>, MeshError> {
    if segments < 3 {
        return Err(MeshError::invalid_parameter(format!(
            "Straight pipe segments must be at least 3: {}",
            segments
        )));
    }

    let segs = segments as usize;
    let expected = 4 * segs;
    if vertex_count != expected {
        return Err(MeshError::inconsistent_resolution(
            "straight pipe",
            expected,
            vertex_count,
        ));
    }

    let mut faces = Vec::with_capacity(8 * segs);

    for i in 0..segments {
        let i1 = i * 4;
        let i2 = ((i + 1) % segments) * 4;

        // outer wall
        faces.push([i1, i2, i2 + 1]);
        faces.push([i1, i2 + 1, i1 + 1]);

        // inner wall (reversed)
        faces.push([i1 + 2, i2 + 3, i2 + 2]);
        faces.push([i1 + 2, i1 + 3, i2 + 3]);

        // bottom annulus
        faces.push([i1, i1 + 2, i2 + 2]);
        faces.push([i1, i2 + 2, i2]);

        // top annulus
        faces.push([i1 + 1, i2 + 1, i2 + 3]);
        faces.push([i1 + 1, i2 + 3, i1 + 3]);
    }

    Ok(faces)
}

/// Eight triangles per (curve step, angular step) cell over the
/// (outer, inner) pair layout; indices wrap modulo `segments` within a ring
/// and advance by the ring stride `2·segments` between curve steps.
fn curved_pipe_faces(
    segments: u32,
    curve_samples: u32,
    vertex_count: usize,
) -> Result<Vec<Triangle>, MeshError> {
    if segments < 3 {
        return Err(MeshError::invalid_parameter(format!(
            "Curved pipe segments must be at least 3: {}",
            segments
        )));
    }
    if curve_samples < 2 {
        return Err(MeshError::invalid_parameter(format!(
            "Curved pipe curve samples must be at least 2: {}",
            curve_samples
        )));
    }

    let expected = 2 * segments as usize * curve_samples as usize;
    if vertex_count != expected {
        return Err(MeshError::inconsistent_resolution(
            "curved pipe",
            expected,
            vertex_count,
        ));
    }

    let stride = segments * 2;
    let mut faces = Vec::with_capacity(8 * segments as usize * (curve_samples as usize - 1));

    for i in 0..curve_samples - 1 {
        for j in 0..segments {
            let j_next = (j + 1) % segments;

            let e1 = i * stride + j * 2;
            let e2 = i * stride + j_next * 2;
            let e3 = (i + 1) * stride + j * 2;
            let e4 = (i + 1) * stride + j_next * 2;

            let n1 = e1 + 1;
            let n2 = e2 + 1;
            let n3 = e3 + 1;
            let n4 = e4 + 1;

            // outer wall
            faces.push([e1, e3, e4]);
            faces.push([e1, e4, e2]);

            // inner wall (reversed)
            faces.push([n4, n3, n1]);
            faces.push([n2, n4, n1]);

            // leading angular edge, outer to inner
            faces.push([e1, n1, n3]);
            faces.push([e1, n3, e3]);

            // trailing angular edge
            faces.push([n4, n2, e2]);
            faces.push([n4, e2, e4]);
        }
    }

    Ok(faces)
}
