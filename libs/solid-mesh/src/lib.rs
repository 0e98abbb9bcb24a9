//! # Solid Mesh
//!
//! Procedural generation of triangulated solid meshes: axis-aligned boxes
//! (plain or lattice-subdivided), capped cylinders, straight annular pipes,
//! annular pipes swept along a cubic Hermite curve, and line segments.
//!
//! ## Architecture
//!
//! ```text
//! spline (Hermite samples) → frame (sweep basis) → primitives (vertices)
//! primitives (vertices) + solid::ShapeKind → topology (triangle indices)
//! transform (scale/rotate/translate/normalize) → same buffer, new values
//! ```
//!
//! Every generator returns a fresh [`Solid`] that owns its vertex buffer
//! and shape kind; the triangle list is derived on demand and never stored,
//! so transforms can never invalidate topology. Rendering, projection, and
//! any other presentation concern are consumers of the
//! `(vertices, faces)` pair this crate produces, not part of it.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use solid_mesh::primitives::cylinder;
//! use solid_mesh::Axis;
//!
//! let mut solid = cylinder(1.0, 2.0, 32)?;
//! solid.rotate(Axis::X, 90.0);
//! solid.translate(DVec3::new(0.0, 0.0, 5.0));
//! let faces = solid.faces()?;
//! assert_eq!(faces.len(), 32 * 4);
//! # Ok::<(), solid_mesh::MeshError>(())
//! ```

pub mod error;
pub mod frame;
pub mod primitives;
pub mod solid;
pub mod spline;
pub mod topology;
pub mod transform;

pub use error::MeshError;
pub use solid::{ShapeKind, Solid};
pub use transform::{Axis, NormalizeMode};

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use transform::normalize_scene;

    /// A small scene: every generator once, then scene normalization over
    /// the combined vertex set.
    #[test]
    fn test_scene_assembly_flow() {
        let solids = [
            primitives::cuboid(4.0, 6.0, 8.0).unwrap(),
            primitives::cylinder(2.0, 30.0, 16).unwrap(),
            primitives::straight_pipe(1.0, 2.0, 5.0, 12).unwrap(),
            primitives::curved_pipe(&primitives::CurvedPipeParams::default()).unwrap(),
            primitives::line_segment(DVec3::ZERO, DVec3::ONE, 40.0).unwrap(),
        ];

        let mut scene: Vec<DVec3> = Vec::new();
        for solid in &solids {
            assert!(!solid.faces().unwrap().is_empty());
            scene.extend_from_slice(solid.vertices());
        }

        let normalized = normalize_scene(&scene, 10.0, NormalizeMode::Uniform);
        assert_eq!(normalized.len(), scene.len());
        let max_abs = normalized
            .iter()
            .map(|v| v.abs().max_element())
            .fold(0.0, f64::max);
        assert!(max_abs <= 10.0 + 1e-9);
    }

    #[test]
    fn test_face_indices_always_in_bounds() {
        let solids = [
            primitives::cuboid_grid(1.0, 1.0, 1.0, 3).unwrap(),
            primitives::cylinder(1.0, 1.0, 7).unwrap(),
            primitives::straight_pipe(0.5, 1.0, 2.0, 5).unwrap(),
        ];
        for solid in &solids {
            let n = solid.vertex_count() as u32;
            for tri in solid.faces().unwrap() {
                assert!(tri.iter().all(|&i| i < n));
            }
        }
    }
}
