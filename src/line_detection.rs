//! Line presence detection module
//!
//! Decides whether a band of bright pixels is present in one luminance frame:
//! the rows are averaged into a column profile, the profile is thresholded, and
//! the share of lit columns is compared against a coverage fraction.

pub mod common;
pub mod config;
pub mod detector;
pub mod ffi;
pub mod frame;
pub mod stages;

pub use common::{
    DetectionError,
    Result,
};

pub use config::{
    DetectionConfig,
    DetectionConfigBuilder,
};

pub use frame::{
    FrameBufferView,
    LumaPlane,
};

pub use detector::{
    DetectionResult,
    LineDetector,
    StageTimings,
    detect,
};
