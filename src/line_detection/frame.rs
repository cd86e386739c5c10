//! Frame buffer module
//!
//! Borrowed and owned single-channel luminance planes.

mod plane;
mod view;

pub use plane::LumaPlane;
pub use view::FrameBufferView;
