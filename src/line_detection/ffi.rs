//! C ABI entry points for hosts that hand over a camera Y plane by pointer.
//!
//! Status codes: [`STATUS_LINE`] and [`STATUS_NO_LINE`] on success, negative
//! values on rejected input. A rejected call never reads as "no line".
//! The buffer is checked before the configuration, so a null or malformed
//! buffer reports [`STATUS_INVALID_BUFFER`] whatever the config holds.

use std::os::raw::c_int;

use tracing::warn;

use crate::line_detection::common::error::{DetectionError, Result};
use crate::line_detection::config::DetectionConfig;
use crate::line_detection::detector::detect;
use crate::line_detection::frame::FrameBufferView;

pub const STATUS_LINE: c_int = 1;
pub const STATUS_NO_LINE: c_int = 0;
pub const STATUS_INVALID_BUFFER: c_int = -1;
pub const STATUS_INVALID_CONFIG: c_int = -2;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineDetectionOutput {
    pub line_detected: bool,
    pub activated_fraction: f64,
}

/// Detects a line in a luminance plane with an explicit configuration.
///
/// `out` may be null. When non-null it is written only on success.
///
/// # Safety
/// When `data` is non-null it must point to at least
/// `row_stride * (height - 1) + width` readable bytes that are not written
/// during the call. `out`, when non-null, must be valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn line_detector_detect(
    data: *const u8,
    width: c_int,
    height: c_int,
    row_stride: c_int,
    brightness_threshold: c_int,
    coverage_fraction: f64,
    out: *mut LineDetectionOutput,
) -> c_int {
    // SAFETY: forwarded from the caller's contract on `data`.
    let outcome = unsafe { view_from_raw(data, width, height, row_stride) }.and_then(|view| {
        let config = DetectionConfig::from_raw(i64::from(brightness_threshold), coverage_fraction)?;
        detect(&view, &config)
    });

    match outcome {
        Ok(result) => {
            if !out.is_null() {
                // SAFETY: caller guarantees a non-null `out` is writable.
                unsafe {
                    out.write(LineDetectionOutput {
                        line_detected: result.line_detected,
                        activated_fraction: result.activated_fraction,
                    });
                }
            }
            if result.line_detected {
                STATUS_LINE
            } else {
                STATUS_NO_LINE
            }
        }
        Err(e) => {
            warn!("Line detection rejected: {}", e);
            status_for(&e)
        }
    }
}

/// Detects a line with the default threshold (160) and coverage (0.3).
///
/// # Safety
/// Same contract as [`line_detector_detect`] for `data`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn line_detector_detect_default(
    data: *const u8,
    width: c_int,
    height: c_int,
    row_stride: c_int,
) -> c_int {
    let config = DetectionConfig::default();
    unsafe {
        line_detector_detect(
            data,
            width,
            height,
            row_stride,
            c_int::from(config.brightness_threshold),
            config.coverage_fraction,
            std::ptr::null_mut(),
        )
    }
}

/// # Safety
/// Same contract as [`line_detector_detect`] for `data`.
unsafe fn view_from_raw<'a>(
    data: *const u8,
    width: c_int,
    height: c_int,
    row_stride: c_int,
) -> Result<FrameBufferView<'a>> {
    let (width, height, row_stride) = (
        dimension("width", width)?,
        dimension("height", height)?,
        dimension("row stride", row_stride)?,
    );

    // SAFETY: forwarded from the caller's contract on `data`.
    unsafe { FrameBufferView::from_raw_parts(data, width, height, row_stride) }
}

fn dimension(name: &str, value: c_int) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| DetectionError::InvalidBuffer(format!("{} must not be negative: {}", name, value)))
}

fn status_for(error: &DetectionError) -> c_int {
    match error {
        DetectionError::InvalidConfig(_) => STATUS_INVALID_CONFIG,
        _ => STATUS_INVALID_BUFFER,
    }
}
