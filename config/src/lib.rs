//! # Config Crate
//!
//! Centralized configuration constants for the solid mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, DEFAULT_SEGMENTS};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 1.0e-11;
//! assert!(value.abs() < EPSILON_TOLERANCE * 100.0);
//!
//! // Use the default angular resolution for tessellation
//! assert!(DEFAULT_SEGMENTS >= 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
