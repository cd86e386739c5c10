//! Common utilities module
//!
//! This module contains the error type shared across the detection stages.

pub mod error;

pub use error::{DetectionError, Result};
