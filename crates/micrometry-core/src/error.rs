use thiserror::Error;

#[derive(Error, Debug)]
pub enum MicrometryError {
    #[error("known distance must be a positive number, got {0}")]
    InvalidKnownDistance(f64),

    #[error("calibration unit must not be empty")]
    EmptyUnit,

    #[error("label must not be empty")]
    EmptyLabel,

    #[error("exactly two marked points required (have {have})")]
    InsufficientPoints { have: usize },

    #[error("image provider error: {0}")]
    Provider(String),

    #[error("image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MicrometryError>;
