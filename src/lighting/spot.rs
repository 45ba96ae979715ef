use crate::math::Vector3;

/// A light that only reaches points inside a cone around its facing direction.
/// There is no falloff toward the cone's edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spotlight {
    pub position: Vector3,

    /// The direction the light is facing. Does not need to be normalized.
    pub direction: Vector3,

    /// Half-angle of the lit cone, in degrees.
    pub cutoff: f64,
}

impl Spotlight {
    pub fn new(position: Vector3, direction: Vector3, cutoff: f64) -> Self {
        Self {
            position,
            direction,
            cutoff,
        }
    }

    /// Unit vector from `point` toward the light.
    pub fn direction_from(&self, point: Vector3) -> Vector3 {
        (self.position - point).normalize()
    }

    /// Whether `point` falls within the cutoff angle.
    pub fn illuminates(&self, point: Vector3) -> bool {
        let cos = (-self.direction_from(point))
            .dot(self.direction.normalize())
            .clamp(-1., 1.);
        cos.acos() <= self.cutoff.to_radians()
    }
}
