use crate::math::Vector3;

/// A point light, which is a light that emits in all directions from a specified position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vector3,
}

impl PointLight {
    pub fn new(position: Vector3) -> Self {
        Self { position }
    }

    /// Unit vector from `point` toward the light.
    pub fn direction_from(&self, point: Vector3) -> Vector3 {
        (self.position - point).normalize()
    }
}
