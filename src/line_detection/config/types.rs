//! Line detection configuration types

use crate::line_detection::common::error::{DetectionError, Result};

/// Default brightness a reduced column must exceed to count as lit.
pub const DEFAULT_BRIGHTNESS_THRESHOLD: u8 = 160;

/// Default share of lit columns a line must exceed.
pub const DEFAULT_COVERAGE_FRACTION: f64 = 0.3;

/// Configuration for line presence detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionConfig {
    /// A reduced sample is lit when strictly greater than this value
    pub brightness_threshold: u8,
    /// Fraction of lit samples, in (0, 1], that must be exceeded to report a line
    pub coverage_fraction: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            brightness_threshold: DEFAULT_BRIGHTNESS_THRESHOLD,
            coverage_fraction: DEFAULT_COVERAGE_FRACTION,
        }
    }
}

impl DetectionConfig {
    pub fn builder() -> DetectionConfigBuilder {
        DetectionConfigBuilder::default()
    }

    /// Builds a config from untyped integer input, e.g. values crossing a native boundary.
    pub fn from_raw(brightness_threshold: i64, coverage_fraction: f64) -> Result<Self> {
        let brightness_threshold = u8::try_from(brightness_threshold).map_err(|_| {
            DetectionError::InvalidConfig(format!(
                "brightness threshold {} outside [0, 255]",
                brightness_threshold
            ))
        })?;

        let config = Self {
            brightness_threshold,
            coverage_fraction,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // NaN fails both comparisons and is rejected here too.
        if !(self.coverage_fraction > 0.0 && self.coverage_fraction <= 1.0) {
            return Err(DetectionError::InvalidConfig(format!(
                "coverage fraction {} outside (0, 1]",
                self.coverage_fraction
            )));
        }

        Ok(())
    }
}

/// Builder for DetectionConfig
#[derive(Default)]
pub struct DetectionConfigBuilder {
    brightness_threshold: Option<u8>,
    coverage_fraction: Option<f64>,
}

impl DetectionConfigBuilder {
    pub fn brightness_threshold(mut self, threshold: u8) -> Self {
        self.brightness_threshold = Some(threshold);
        self
    }

    pub fn coverage_fraction(mut self, fraction: f64) -> Self {
        self.coverage_fraction = Some(fraction);
        self
    }

    /// Fills unset fields with defaults. Range checks happen in [`DetectionConfig::validate`].
    pub fn build(self) -> DetectionConfig {
        let default = DetectionConfig::default();
        DetectionConfig {
            brightness_threshold: self.brightness_threshold.unwrap_or(default.brightness_threshold),
            coverage_fraction: self.coverage_fraction.unwrap_or(default.coverage_fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_bridge() {
        let config = DetectionConfig::default();
        assert_eq!(config.brightness_threshold, 160);
        assert_eq!(config.coverage_fraction, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = DetectionConfig::builder()
            .brightness_threshold(200)
            .build();

        assert_eq!(config.brightness_threshold, 200);
        assert_eq!(config.coverage_fraction, DEFAULT_COVERAGE_FRACTION);

        let config = DetectionConfig::builder()
            .brightness_threshold(0)
            .coverage_fraction(1.0)
            .build();
        assert_eq!(config.brightness_threshold, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_coverage_out_of_range() {
        for fraction in [0.0, -0.1, 1.0001, f64::NAN, f64::INFINITY] {
            let config = DetectionConfig::builder().coverage_fraction(fraction).build();
            assert!(
                matches!(config.validate(), Err(DetectionError::InvalidConfig(_))),
                "fraction {fraction} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_raw_threshold_range() {
        assert!(DetectionConfig::from_raw(0, 0.3).is_ok());
        assert!(DetectionConfig::from_raw(255, 0.3).is_ok());
        assert!(matches!(
            DetectionConfig::from_raw(-1, 0.3),
            Err(DetectionError::InvalidConfig(_))
        ));
        assert!(matches!(
            DetectionConfig::from_raw(256, 0.3),
            Err(DetectionError::InvalidConfig(_))
        ));
        assert!(matches!(
            DetectionConfig::from_raw(160, 0.0),
            Err(DetectionError::InvalidConfig(_))
        ));
    }
}
