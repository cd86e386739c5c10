//! Detection result types

/// Outcome of a single line presence check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionResult {
    /// Whether the active share strictly exceeded the coverage fraction
    pub line_detected: bool,
    /// Share of profile samples above the brightness threshold, in [0, 1]
    pub activated_fraction: f64,
    /// Number of profile samples above the brightness threshold
    pub activated_samples: usize,
    /// Length of the reduced profile (frame width)
    pub width: usize,
}
