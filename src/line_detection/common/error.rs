use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("Invalid frame buffer: {0}")]
    InvalidBuffer(String),

    #[error("Invalid detection config: {0}")]
    InvalidConfig(String),

    #[error("Failed to read frame dump: {0}")]
    InputReadError(String),

    #[error("Failed to write frame dump: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DetectionError>;
