use tracing::{debug, instrument};

use crate::line_detection::{
    common::error::Result,
    config::DetectionConfig,
    detector::{Stage, StageTimings, Timer, types::DetectionResult},
    frame::FrameBufferView,
    stages::{binarize_in_place, decide, reduce_rows},
};

/// Line presence detector with a fixed, validated configuration.
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct LineDetector {
    config: DetectionConfig,
}

impl LineDetector {
    pub fn new(config: DetectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Runs reduction, thresholding and the decision with the detector's config.
    #[instrument(level = "debug", skip_all, fields(width = view.width(), height = view.height()))]
    pub fn detect(&self, view: &FrameBufferView<'_>) -> DetectionResult {
        run(view, &self.config, None)
    }

    /// Wraps caller memory and detects on it in one step.
    pub fn detect_buffer(
        &self,
        data: &[u8],
        width: usize,
        height: usize,
        row_stride: usize,
    ) -> Result<DetectionResult> {
        let view = FrameBufferView::from_slice(width, height, row_stride, data)?;
        Ok(self.detect(&view))
    }

    /// Detects with a per-call config instead of the detector's own.
    #[instrument(level = "debug", skip_all, fields(width = view.width(), height = view.height()))]
    pub fn detect_with(
        &self,
        view: &FrameBufferView<'_>,
        config: &DetectionConfig,
    ) -> Result<DetectionResult> {
        config.validate()?;
        Ok(run(view, config, None))
    }

    #[instrument(level = "debug", skip_all, fields(width = view.width(), height = view.height()))]
    pub fn detect_with_timings(&self, view: &FrameBufferView<'_>) -> (DetectionResult, StageTimings) {
        let mut timings = StageTimings::new();
        let result = run(view, &self.config, Some(&mut timings));
        (result, timings)
    }
}

/// One-shot detection without keeping a [`LineDetector`] around.
pub fn detect(view: &FrameBufferView<'_>, config: &DetectionConfig) -> Result<DetectionResult> {
    config.validate()?;
    Ok(run(view, config, None))
}

fn run(
    view: &FrameBufferView<'_>,
    config: &DetectionConfig,
    mut timings: Option<&mut StageTimings>,
) -> DetectionResult {
    let mut record = |timer: Timer| {
        let (stage, duration) = timer.stop();
        if let Some(timings) = timings.as_deref_mut() {
            timings.record(stage, duration);
        }
    };

    let mut profile = {
        let _span = tracing::trace_span!("reduce_rows").entered();
        let timer = Timer::start(Stage::ReduceRows);
        let profile = reduce_rows(view);
        record(timer);
        profile
    };

    {
        let _span = tracing::trace_span!("threshold", threshold = config.brightness_threshold).entered();
        let timer = Timer::start(Stage::Threshold);
        binarize_in_place(&mut profile, config.brightness_threshold);
        record(timer);
    }

    let result = {
        let _span = tracing::trace_span!("decide", coverage = config.coverage_fraction).entered();
        let timer = Timer::start(Stage::Decide);
        let result = decide(&profile, config.coverage_fraction);
        record(timer);
        result
    };

    debug!(
        line_detected = result.line_detected,
        activated = result.activated_samples,
        width = result.width,
        fraction = result.activated_fraction,
        "Detection complete"
    );

    result
}
