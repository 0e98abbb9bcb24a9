//! # Primitive Generators
//!
//! One module per solid family. Each generator validates its parameters
//! eagerly, builds a vertex buffer in the documented layout, and returns a
//! fresh [`crate::Solid`] tagged with the shape kind that re-derives its
//! topology.

pub mod cuboid;
pub mod curved_pipe;
pub mod cylinder;
pub mod line;
pub mod pipe;

pub use cuboid::{cuboid, cuboid_grid};
pub use curved_pipe::{curved_pipe, CurvedPipeParams};
pub use cylinder::{cylinder, cylinder_default};
pub use line::line_segment;
pub use pipe::{straight_pipe, straight_pipe_default};
