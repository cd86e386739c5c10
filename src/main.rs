use std::path::Path;

use anyhow::Context;
use luma_line_detector::line_detection::{DetectionConfig, LineDetector, LumaPlane};
use luma_line_detector::logger::{self, info, warn};

const FRAME_WIDTH: usize = 640;
const FRAME_HEIGHT: usize = 480;
const DUMP_PATH: &str = "frame.y";

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting luma_line_detector...");

    let config = DetectionConfig::builder()
        .brightness_threshold(160)
        .coverage_fraction(0.3)
        .build();
    let detector = LineDetector::new(config)?;

    info!(
        "Brightness threshold: {}, coverage fraction: {}",
        detector.config().brightness_threshold,
        detector.config().coverage_fraction
    );

    let plane = if Path::new(DUMP_PATH).exists() {
        LumaPlane::read_from_file(DUMP_PATH, FRAME_WIDTH, FRAME_HEIGHT, FRAME_WIDTH)
            .with_context(|| format!("loading {DUMP_PATH}"))?
    } else {
        warn!("{} not found, using a synthetic frame", DUMP_PATH);
        synthetic_frame()?
    };

    let (result, timings) = detector.detect_with_timings(&plane.as_view());
    timings.log_summary();

    info!(
        line_detected = result.line_detected,
        activated_fraction = result.activated_fraction,
        "Frame analysed"
    );

    Ok(())
}

/// Dark 640x480 frame crossed by a vertical bright band.
fn synthetic_frame() -> anyhow::Result<LumaPlane> {
    let mut plane = LumaPlane::filled(FRAME_WIDTH, FRAME_HEIGHT, 30)?;
    for y in 0..FRAME_HEIGHT {
        plane.row_mut(y)[240..480].fill(210);
    }
    Ok(plane)
}
