//! Rounding Configuration and Builder
//!
//! This module provides configuration types for deterministic rounded-cell
//! tessellation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoundingError};

/// Smallest accepted arc resolution.
///
/// The assembler divides arc and circle lengths by the resolution to pick a
/// segment count, so the builder clamps to this minimum to keep that division
/// well defined.
pub const MIN_RESOLUTION: f64 = 0.02;

/// Configuration for one rounded-cell tessellation
///
/// The same configuration applied to the same site list always produces the
/// identical output mesh.
///
/// # Example
///
/// ```rust
/// use rounded_voronoi::*;
///
/// let config = RoundingConfigBuilder::new()
///     .radius(2.0)
///     .unwrap()
///     .resolution(0.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.radius, 2.0);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundingConfig {
    /// Radius of the circle grown around every site
    ///
    /// Chords only appear on edges shorter than `2 * radius`; an isolated
    /// site degrades to a full circle of this radius.
    pub radius: f64,

    /// Target segment length for discretized arcs and circles
    ///
    /// Smaller values produce smoother output with more vertices. Values are
    /// clamped to [`MIN_RESOLUTION`] by the builder; bypassing the builder and
    /// setting a non-positive resolution directly is a contract violation.
    pub resolution: f64,
}

impl Default for RoundingConfig {
    fn default() -> Self {
        RoundingConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating RoundingConfig with validation
///
/// # Example
///
/// ```rust
/// use rounded_voronoi::*;
///
/// // Use defaults (radius 1.0, resolution 0.1)
/// let config = RoundingConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = RoundingConfigBuilder::new()
///     .radius(0.5)
///     .unwrap()
///     .resolution(0.05)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct RoundingConfigBuilder {
    radius: f64,
    resolution: f64,
}

impl RoundingConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - radius: 1.0
    /// - resolution: 0.1
    pub fn new() -> Self {
        Self {
            radius: 1.0,
            resolution: 0.1,
        }
    }

    /// Set the cell radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the radius is not a finite positive number.
    pub fn radius(mut self, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(RoundingError::InvalidConfig(format!(
                "radius must be finite and positive (got {})",
                radius
            )));
        }
        self.radius = radius;
        Ok(self)
    }

    /// Set the arc resolution
    ///
    /// Values below [`MIN_RESOLUTION`] (including NaN) are clamped up to it.
    pub fn resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution.max(MIN_RESOLUTION);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<RoundingConfig> {
        Ok(RoundingConfig {
            radius: self.radius,
            resolution: self.resolution,
        })
    }
}

impl Default for RoundingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = RoundingConfigBuilder::new().build().unwrap();
        assert_eq!(config.radius, 1.0);
        assert_eq!(config.resolution, 0.1);
    }

    #[test]
    fn test_builder_custom() {
        let config = RoundingConfigBuilder::new()
            .radius(2.5)
            .unwrap()
            .resolution(0.25)
            .build()
            .unwrap();

        assert_eq!(config.radius, 2.5);
        assert_eq!(config.resolution, 0.25);
    }

    #[test]
    fn test_builder_invalid_radius() {
        assert!(RoundingConfigBuilder::new().radius(0.0).is_err());
        assert!(RoundingConfigBuilder::new().radius(-5.0).is_err());
        assert!(RoundingConfigBuilder::new().radius(f64::NAN).is_err());
        assert!(RoundingConfigBuilder::new().radius(f64::INFINITY).is_err());
    }

    #[test]
    fn test_resolution_clamped() {
        let config = RoundingConfigBuilder::new()
            .resolution(0.0)
            .build()
            .unwrap();
        assert_eq!(config.resolution, MIN_RESOLUTION);

        let config = RoundingConfigBuilder::new()
            .resolution(-1.0)
            .build()
            .unwrap();
        assert_eq!(config.resolution, MIN_RESOLUTION);

        let config = RoundingConfigBuilder::new()
            .resolution(f64::NAN)
            .build()
            .unwrap();
        assert_eq!(config.resolution, MIN_RESOLUTION);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = RoundingConfigBuilder::new()
            .radius(3.0)
            .unwrap()
            .resolution(0.2)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: RoundingConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
