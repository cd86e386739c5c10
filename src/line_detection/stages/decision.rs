use crate::line_detection::detector::DetectionResult;
use crate::line_detection::stages::threshold::ACTIVE;

/// Counts active samples and reports a line when the active fraction strictly
/// exceeds `coverage_fraction`. An exact match is not a line.
pub fn decide(binary: &[u8], coverage_fraction: f64) -> DetectionResult {
    let width = binary.len();
    let activated_samples = binary.iter().filter(|&&s| s == ACTIVE).count();

    if width == 0 {
        return DetectionResult {
            line_detected: false,
            activated_fraction: 0.0,
            activated_samples: 0,
            width: 0,
        };
    }

    let activated_fraction = activated_samples as f64 / width as f64;

    DetectionResult {
        line_detected: activated_fraction > coverage_fraction,
        activated_fraction,
        activated_samples,
        width,
    }
}
