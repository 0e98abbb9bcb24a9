//! Centralized configuration values shared across the solid mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Numerical tolerance used by geometry kernels.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Default angular resolution for shapes swept around a circle, such as
/// cylinders and annular pipes.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 3);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Default number of parametric samples taken along a spline path when
/// sweeping a cross-section.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CURVE_SAMPLES;
/// assert!(DEFAULT_CURVE_SAMPLES >= 2);
/// ```
pub const DEFAULT_CURVE_SAMPLES: u32 = 100;

/// Default half-extent of the display scene. Scene normalization rescales
/// vertex sets so that no coordinate exceeds this value.
///
/// # Examples
/// ```
/// use config::constants::SCENE_LIMIT;
/// assert!(SCENE_LIMIT > 0.0);
/// ```
pub const SCENE_LIMIT: f64 = 10.0;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry kernels.
    pub tolerance: f64,
    /// Default segment count for shapes that require angular subdivision.
    pub default_segments: u32,
    /// Half-extent of the bounding cube used by scene normalization.
    pub scene_limit: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance, default segments, and scene limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24, 10.0).expect("valid config");
    /// assert_eq!(cfg.default_segments, 24);
    /// ```
    pub fn new(tolerance: f64, default_segments: u32, scene_limit: f64) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_segments < 3 {
            return Err(ConfigError::InvalidSegments(default_segments));
        }
        if scene_limit <= 0.0 {
            return Err(ConfigError::InvalidSceneLimit(scene_limit));
        }
        Ok(Self {
            tolerance,
            default_segments,
            scene_limit,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            default_segments: DEFAULT_SEGMENTS,
            scene_limit: SCENE_LIMIT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero or negative.
    InvalidTolerance(f64),
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
    /// Raised when the scene limit is zero or negative.
    InvalidSceneLimit(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "default_segments must be >= 3: {value}")
            }
            ConfigError::InvalidSceneLimit(value) => {
                write!(f, "scene_limit must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
