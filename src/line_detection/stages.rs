//! Detection stages
//!
//! Row reduction, thresholding and the coverage decision. Each stage is a pure
//! function so it can be tested and benchmarked on its own.

mod decision;
mod reduce;
mod threshold;

pub use decision::decide;
pub use reduce::reduce_rows;
pub use threshold::{ACTIVE, binarize, binarize_in_place};
