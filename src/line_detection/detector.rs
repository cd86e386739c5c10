//! Line detector orchestration
//!
//! Composes row reduction, thresholding and the coverage decision over a
//! borrowed frame.

mod line_detector;
mod timing;
pub mod types;


pub use line_detector::{LineDetector, detect};
pub use timing::{Stage, StageTimings, Timer};
pub use types::DetectionResult;
