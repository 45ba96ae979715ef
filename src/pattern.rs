use std::{f64::consts::PI, ops::Range};

use crate::{
    math::{remap, Vector3},
    texture::Texture,
};

/// A per-hit color override for an otherwise uniformly colored object.
///
/// Patterns are evaluated as a pure function of the hit point, so the object's
/// stored material is never touched while tracing.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Alternating squares on the xz plane.
    Checkerboard {
        /// Side length of one square.
        width: f64,
        /// Shift applied to x before dividing into squares.
        x_offset: f64,
        /// Color where the row and column parities match.
        even: Vector3,
        odd: Vector3,
    },

    /// A texture stretched over an axis-aligned rectangle facing +z.
    Planar {
        texture: Texture,
        x: Range<f64>,
        y: Range<f64>,
    },

    /// A texture wrapped around a sphere with an equirectangular mapping.
    Spherical { texture: Texture, center: Vector3 },
}

impl Pattern {
    /// The color of the pattern at a hit point, or `None` where the pattern
    /// does not cover the point and the object's own color applies.
    pub fn color_at(&self, hit: Vector3) -> Option<Vector3> {
        match self {
            Self::Checkerboard {
                width,
                x_offset,
                even,
                odd,
            } => {
                // truncating division, so squares either side of zero share parity
                let iz = (hit.z / width) as i64;
                let ix = ((hit.x - x_offset) / width) as i64;
                if iz % 2 == ix % 2 {
                    Some(*even)
                } else {
                    Some(*odd)
                }
            }
            Self::Planar { texture, x, y } => {
                let s = remap(hit.x, x.clone(), 0.0..1.0);
                let t = remap(hit.y, y.clone(), 0.0..1.0);
                sample_inside(texture, s, t)
            }
            Self::Spherical { texture, center } => {
                let d = (hit - *center).normalize();
                let s = 0.5 + d.x.atan2(d.z) / (2. * PI);
                let t = 0.5 - (-d.y).asin() / PI;
                sample_inside(texture, s, t)
            }
        }
    }
}

fn sample_inside(texture: &Texture, s: f64, t: f64) -> Option<Vector3> {
    if s > 0. && s < 1. && t > 0. && t < 1. {
        Some(texture.sample(s, t))
    } else {
        None
    }
}
