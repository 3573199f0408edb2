use std::path::PathBuf;

use thiserror::Error;

/// Render configuration errors, raised before any pixel is traced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Camera opening must be finite and greater than 1, got {0}")]
    InvalidOpening(f32),

    #[error("Focal distance must be positive and finite, got {0}")]
    InvalidFocalDistance(f32),

    #[error("Shadow bias must be non-negative and finite, got {0}")]
    InvalidShadowBias(f32),

    #[error("Worker count must be at least 1")]
    NoWorkers,

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Cannot create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type OutputResult<T> = Result<T, OutputError>;
