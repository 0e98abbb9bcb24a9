//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.default_segments >= 3);
    assert!(cfg.scene_limit > 0.0);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 24, 10.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 2, 10.0).unwrap_err(),
        ConfigError::InvalidSegments(2)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 24, 0.0).unwrap_err(),
        ConfigError::InvalidSceneLimit(0.0)
    );
}

#[test]
fn curve_samples_default_is_usable() {
    assert!(DEFAULT_CURVE_SAMPLES >= 2);
}
