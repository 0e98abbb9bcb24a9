//! # Solid Mesh Model
//!
//! [`Solid`] pairs one vertex buffer with the [`ShapeKind`] that produced
//! it. The triangle list is never stored: it is re-derived on demand from
//! the shape kind and buffer length, which makes it impossible for topology
//! to drift out of sync with the vertices. Transforms replace the vertex
//! buffer in place and never touch the shape kind, so a transformed solid
//! re-triangulates identically.
//!
//! A `Solid` is created by exactly one generator call (see
//! [`crate::primitives`]); there is no shared mutable builder that could
//! leak state from a prior shape into a new one.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::topology::{self, Triangle};
use crate::transform::{self, Axis, NormalizeMode};

/// Shape family of a solid, carrying the resolution parameters needed to
/// re-derive its topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned box; `grid_res` subdivisions per axis (1 = plain
    /// 8-corner box).
    Cuboid {
        /// Subdivisions per axis of the vertex lattice.
        grid_res: u32,
    },
    /// Two-vertex line segment.
    LineSegment,
    /// Capped circular cylinder with `segments` angular steps.
    Cylinder {
        /// Angular steps around the circumference.
        segments: u32,
    },
    /// Straight annular pipe with `segments` angular steps.
    StraightPipe {
        /// Angular steps around the circumference.
        segments: u32,
    },
    /// Annular pipe swept along a cubic Hermite curve.
    CurvedPipe {
        /// Angular steps around the circumference.
        segments: u32,
        /// Parametric samples along the curve.
        curve_samples: u32,
    },
}

impl ShapeKind {
    /// Human-readable family name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Cuboid { .. } => "cuboid",
            ShapeKind::LineSegment => "line segment",
            ShapeKind::Cylinder { .. } => "cylinder",
            ShapeKind::StraightPipe { .. } => "straight pipe",
            ShapeKind::CurvedPipe { .. } => "curved pipe",
        }
    }
}

/// A triangulated solid: one vertex buffer plus the shape kind that
/// regenerates its face list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    vertices: Vec<DVec3>,
    shape: ShapeKind,
}

impl Solid {
    /// Assembles a solid from a generator-produced buffer. Generators are
    /// responsible for the layout contract between buffer and shape kind.
    pub(crate) fn from_parts(vertices: Vec<DVec3>, shape: ShapeKind) -> Self {
        log::debug!(
            "generated {} with {} vertices",
            shape.name(),
            vertices.len()
        );
        Self { vertices, shape }
    }

    /// Returns the vertex buffer. Order is significant: triangle indices
    /// refer to positions in this slice.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the shape kind and its resolution payload.
    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Derives the triangle index list for this solid.
    ///
    /// # Errors
    ///
    /// Propagates [`MeshError::InconsistentResolution`] if the buffer
    /// length no longer matches the shape kind; this cannot happen through
    /// this type's own API, which never resizes the buffer.
    pub fn faces(&self) -> Result<Vec<Triangle>, MeshError> {
        topology::face_list(&self.shape, self.vertices.len())
    }

    /// Derives the faces as literal coordinate triples for consumers that
    /// want positions instead of indices. The index list remains the source
    /// of truth; this is always a projection of it.
    pub fn faces_as_coordinates(&self) -> Result<Vec<[DVec3; 3]>, MeshError> {
        let faces = self.faces()?;
        Ok(faces
            .iter()
            .map(|tri| {
                [
                    self.vertices[tri[0] as usize],
                    self.vertices[tri[1] as usize],
                    self.vertices[tri[2] as usize],
                ]
            })
            .collect())
    }

    /// Computes the axis-aligned bounding box as `(min, max)` corners.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }

    /// Computes the centroid of the vertex set.
    pub fn centroid(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }
        self.vertices.iter().copied().sum::<DVec3>() / self.vertices.len() as f64
    }

    /// Scales the solid componentwise in place.
    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.vertices = transform::scale(&self.vertices, sx, sy, sz);
    }

    /// Translates the solid in place.
    pub fn translate(&mut self, delta: DVec3) {
        self.vertices = transform::translate(&self.vertices, delta);
    }

    /// Rotates the solid about `axis` by `degrees` in place.
    pub fn rotate(&mut self, axis: Axis, degrees: f64) {
        self.vertices = transform::rotate(&self.vertices, axis, degrees);
    }

    /// Rescales this solid's vertices to fit the scene cube. See
    /// [`transform::normalize_scene`].
    pub fn normalize_scene(&mut self, limit: f64, mode: NormalizeMode) {
        self.vertices = transform::normalize_scene(&self.vertices, limit, mode);
    }

    /// Centers and fits the solid into a cube of half-extent `limit / 2`
    /// around `target`. See [`transform::normalize_solid`].
    pub fn normalize_solid(&mut self, target: DVec3, limit: f64) {
        self.vertices = transform::normalize_solid(&self.vertices, target, limit);
    }
}
