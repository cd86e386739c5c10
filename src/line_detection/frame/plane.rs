//! Owned luminance plane, used for Y-plane dumps and synthetic frames.

use std::path::Path;

use tracing::debug;

use crate::line_detection::common::error::{DetectionError, Result};
use crate::line_detection::frame::view::{FrameBufferView, required_len};

/// An owned single-channel 8-bit plane with the same geometry rules as [`FrameBufferView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaPlane {
    width: usize,
    height: usize,
    row_stride: usize,
    data: Vec<u8>,
}

impl LumaPlane {
    pub fn from_vec(width: usize, height: usize, row_stride: usize, data: Vec<u8>) -> Result<Self> {
        let required = required_len(width, height, row_stride)?;
        if data.len() < required {
            return Err(DetectionError::InvalidBuffer(format!(
                "plane holds {} bytes, geometry {}x{} stride {} needs {}",
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
            data,
        })
    }

    /// A tightly packed plane with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self> {
        let len = required_len(width, height, width)?;
        Ok(Self {
            width,
            height,
            row_stride: width,
            data: vec![value; len],
        })
    }

    /// Loads a headerless Y-plane dump. The geometry is not stored in the file.
    pub fn read_from_file<P: AsRef<Path>>(
        path: P,
        width: usize,
        height: usize,
        row_stride: usize,
    ) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| DetectionError::InputReadError(format!("{}: {}", path.display(), e)))?;

        debug!(
            path = %path.display(),
            bytes = data.len(),
            width,
            height,
            row_stride,
            "Loaded luma plane"
        );

        Self::from_vec(width, height, row_stride, data)
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.data)
            .map_err(|e| DetectionError::OutputWriteError(format!("{}: {}", path.display(), e)))
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

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.row_stride;
        &mut self.data[start..start + self.width]
    }

    pub fn as_view(&self) -> FrameBufferView<'_> {
        FrameBufferView::from_validated(self.width, self.height, self.row_stride, &self.data)
    }
}
