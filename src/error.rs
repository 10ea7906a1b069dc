use thiserror::Error;

/// Library error type for viewport operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The image has a zero, negative or non-finite side.
    #[error("image size {width}x{height} cannot be displayed")]
    DegenerateImage { width: f64, height: f64 },

    /// The container has a zero, negative or non-finite side.
    #[error("container bounds {width}x{height} cannot host an image")]
    DegenerateBounds { width: f64, height: f64 },

    /// A configuration value is out of range.
    #[error("invalid viewport configuration: {0}")]
    InvalidConfig(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),

    /// The image could not be opened or probed.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
