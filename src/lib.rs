pub mod line_detection;
pub mod logger;
