//! Detection configuration module
//!
//! Thresholds that the reference bridge hard-coded, lifted into a validated config.

pub mod types;

pub use types::{DetectionConfig, DetectionConfigBuilder};
