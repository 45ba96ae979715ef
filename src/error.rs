use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid render options: {0}")]
    InvalidOptions(String),
}
