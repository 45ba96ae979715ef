use super::{reflect, Vector3};

/// A half-line through the scene. The direction is always unit length, so the
/// parameter `t` along the ray is a world-space distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Instantiate a new Ray. The direction does not need to be normalized.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn along(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Reflect this ray off of a position and a normal.
    pub fn reflect(&self, pos: Vector3, normal: Vector3) -> Ray {
        Ray::new(pos, reflect(self.direction, normal))
    }
}
