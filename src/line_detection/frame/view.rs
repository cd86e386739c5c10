//! Borrowed luminance frame view.
//!
//! A [`FrameBufferView`] wraps caller-owned 8-bit luminance memory without
//! copying it. Rows may be padded, so every access goes through `row_stride`.

use crate::line_detection::common::error::{DetectionError, Result};

/// Non-owning view over a single-channel 8-bit luminance plane.
#[derive(Debug, Clone, Copy)]
pub struct FrameBufferView<'a> {
    width: usize,
    height: usize,
    row_stride: usize,
    data: &'a [u8],
}

impl<'a> FrameBufferView<'a> {
    /// Wraps `data` as a `width` x `height` plane whose rows start `row_stride` bytes apart.
    ///
    /// The last row does not need trailing padding: `data` only has to hold
    /// `row_stride * (height - 1) + width` bytes.
    pub fn from_slice(
        width: usize,
        height: usize,
        row_stride: usize,
        data: &'a [u8],
    ) -> Result<Self> {
        let required = required_len(width, height, row_stride)?;

        if data.len() < required {
            return Err(DetectionError::InvalidBuffer(format!(
                "buffer holds {} bytes, geometry {}x{} stride {} needs {}",
                data.len(),
                width,
                height,
                row_stride,
                required
            )));
        }

        Ok(Self {
            width,
            height,
            row_stride,
            data: &data[..required],
        })
    }

    /// Wraps externally allocated memory, e.g. a camera Y plane handed over a
    /// native boundary.
    ///
    /// A null `ptr` is rejected with [`DetectionError::InvalidBuffer`].
    ///
    /// # Safety
    /// When `ptr` is non-null it must point to at least
    /// `row_stride * (height - 1) + width` readable bytes that stay valid and
    /// unmodified for `'a`.
    pub unsafe fn from_raw_parts(
        ptr: *const u8,
        width: usize,
        height: usize,
        row_stride: usize,
    ) -> Result<Self> {
        if ptr.is_null() {
            return Err(DetectionError::InvalidBuffer("buffer is null".to_string()));
        }

        let required = required_len(width, height, row_stride)?;

        // SAFETY: `ptr` is non-null and the caller guarantees `required`
        // readable bytes that outlive `'a` without writers.
        let data = unsafe { std::slice::from_raw_parts(ptr, required) };

        Ok(Self {
            width,
            height,
            row_stride,
            data,
        })
    }

    /// Geometry must already satisfy [`required_len`] against `data`.
    pub(super) fn from_validated(
        width: usize,
        height: usize,
        row_stride: usize,
        data: &'a [u8],
    ) -> Self {
        debug_assert!(matches!(required_len(width, height, row_stride), Ok(n) if n <= data.len()));
        Self {
            width,
            height,
            row_stride,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Returns the `width` visible pixels of row `y`, without padding.
    pub fn row(&self, y: usize) -> &'a [u8] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.row_stride;
        &self.data[start..start + self.width]
    }

    /// Pixel at (`row`, `col`).
    pub fn pixel(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.height, "row {row} out of bounds");
        debug_assert!(col < self.width, "col {col} out of bounds");
        self.data[row * self.row_stride + col]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.row_stride + col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    pub fn is_contiguous(&self) -> bool {
        self.row_stride == self.width
    }
}

/// Minimum byte length for the given geometry, validating it on the way.
pub(crate) fn required_len(width: usize, height: usize, row_stride: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(DetectionError::InvalidBuffer(format!(
            "dimensions must be positive: width={}, height={}",
            width, height
        )));
    }

    if row_stride < width {
        return Err(DetectionError::InvalidBuffer(format!(
            "row stride {} is smaller than width {}",
            row_stride, width
        )));
    }

    (height - 1)
        .checked_mul(row_stride)
        .and_then(|v| v.checked_add(width))
        .ok_or_else(|| {
            DetectionError::InvalidBuffer(format!(
                "geometry {}x{} stride {} overflows",
                width, height, row_stride
            ))
        })
}
