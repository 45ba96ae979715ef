use crate::math::{Ray, Vector3};

use super::{solve_quadratic, Primitive, EPSILON};

/// An upright cone with its base circle centered on `center` and its apex
/// `height` units above it. Open at the base.
#[derive(Debug, Clone, PartialEq)]
pub struct Cone {
    pub center: Vector3,
    pub radius: f64,
    pub height: f64,

    /// Half-angle at the apex.
    theta: f64,
}

impl Cone {
    pub fn new(center: Vector3, radius: f64, height: f64) -> Self {
        Self {
            center,
            radius,
            height,
            theta: (radius / height).atan(),
        }
    }

    fn within_height(&self, p: Vector3) -> bool {
        p.y >= self.center.y && p.y <= self.center.y + self.height
    }
}

impl Primitive for Cone {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let (d, o, c) = (ray.direction, ray.origin, self.center);
        let rh = (self.radius / self.height).powi(2);
        // distance from the ray origin's height down from the apex
        let h = self.height - o.y + c.y;

        let a = d.x * d.x + d.z * d.z - rh * d.y * d.y;
        let b = 2. * (d.x * (o.x - c.x) + d.z * (o.z - c.z) + rh * d.y * h);
        let k = (c.x - o.x).powi(2) + (c.z - o.z).powi(2) - rh * h * h;

        // a == 0 (rays parallel to the slant) is not guarded; the resulting
        // non-finite roots fail the height test or the caller's t > 0 filter
        let (near, far) = solve_quadratic(a, b, k)?;
        if near.abs() < EPSILON || far.abs() < EPSILON {
            return None;
        }

        if self.within_height(ray.along(near)) {
            Some(near)
        } else if self.within_height(ray.along(far)) {
            Some(far)
        } else {
            None
        }
    }

    fn normal(&self, point: Vector3) -> Vector3 {
        let alpha = (point.x - self.center.x).atan2(point.z - self.center.z);
        Vector3::new(
            alpha.sin() * self.theta.cos(),
            self.theta.sin(),
            alpha.cos() * self.theta.cos(),
        )
        .normalize()
    }
}
