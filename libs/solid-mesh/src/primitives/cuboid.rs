//! # Cuboid Primitive
//!
//! Generates axis-aligned boxes, plain or with a subdivided vertex lattice.

use glam::DVec3;

use crate::error::MeshError;
use crate::solid::{ShapeKind, Solid};

fn validate_dimensions(width: f64, depth: f64, height: f64) -> Result<(), MeshError> {
    if width <= 0.0 || depth <= 0.0 || height <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Cuboid dimensions must be positive: {}x{}x{}",
            width, depth, height
        )));
    }
    Ok(())
}

/// Creates an axis-aligned box with one corner at the origin.
///
/// Layout: 8 corners, bottom ring counter-clockwise from the origin, then
/// the top ring in the same order.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] when any dimension is not
/// positive.
///
/// # Example
///
/// ```rust
/// use solid_mesh::primitives::cuboid;
///
/// let solid = cuboid(2.0, 3.0, 4.0).unwrap();
/// assert_eq!(solid.vertex_count(), 8);
/// assert_eq!(solid.faces().unwrap().len(), 12);
/// ```
pub fn cuboid(width: f64, depth: f64, height: f64) -> Result<Solid, MeshError> {
    validate_dimensions(width, depth, height)?;

    let vertices = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(width, 0.0, 0.0),
        DVec3::new(width, depth, 0.0),
        DVec3::new(0.0, depth, 0.0),
        DVec3::new(0.0, 0.0, height),
        DVec3::new(width, 0.0, height),
        DVec3::new(width, depth, height),
        DVec3::new(0.0, depth, height),
    ];

    Ok(Solid::from_parts(vertices, ShapeKind::Cuboid { grid_res: 1 }))
}

/// Creates an axis-aligned box whose vertices form a `(grid_res + 1)³`
/// lattice, indexed `k·(res+1)² + j·(res+1) + i` with x fastest.
///
/// A `grid_res` of 1 is exactly the 8-corner box and yields the canonical
/// corner layout from [`cuboid`], so the fixed 8-vertex topology table
/// always matches the buffer order.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] when a dimension is not positive
/// or `grid_res < 1`.
pub fn cuboid_grid(width: f64, depth: f64, height: f64, grid_res: u32) -> Result<Solid, MeshError> {
    validate_dimensions(width, depth, height)?;
    if grid_res < 1 {
        return Err(MeshError::invalid_parameter(format!(
            "Cuboid grid resolution must be at least 1: {}",
            grid_res
        )));
    }
    if grid_res == 1 {
        return cuboid(width, depth, height);
    }

    let res = grid_res as usize;
    let n = res + 1;
    let mut vertices = Vec::with_capacity(n * n * n);

    for k in 0..n {
        let z = (k as f64 / res as f64) * height;
        for j in 0..n {
            let y = (j as f64 / res as f64) * depth;
            for i in 0..n {
                let x = (i as f64 / res as f64) * width;
                vertices.push(DVec3::new(x, y, z));
            }
        }
    }

    Ok(Solid::from_parts(vertices, ShapeKind::Cuboid { grid_res }))
}
