use std::path::Path;

use log::debug;

use crate::{material::Color, math::Vector3, RenderError};

/// A 2D color source addressed by normalized coordinates.
#[derive(Clone, Debug)]
pub enum Texture {
    /// A texture that is just a solid color.
    Solid(Color),

    /// A texture that is an image.
    Image(image::RgbImage),
}

impl Texture {
    /// Load an image texture from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let image = image::open(path)?.to_rgb8();
        debug!(
            "loaded texture {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::Image(image))
    }

    /// Sample the texture at `(u, v)`, both expected in `[0, 1]`.
    ///
    /// `v = 0` is the bottom row of the image. Callers reject out of range
    /// coordinates before sampling.
    pub fn sample(&self, u: f64, v: f64) -> Vector3 {
        match self {
            Self::Solid(color) => (*color).into(),
            Self::Image(image) => {
                let (w, h) = (image.width() as f64, image.height() as f64);
                let color: Color = image
                    .get_pixel(
                        (u * w).clamp(0., w - 1.) as u32,
                        ((1. - v) * h).clamp(0., h - 1.) as u32,
                    )
                    .to_owned()
                    .into();
                color.into()
            }
        }
    }
}
