use crate::math::{Ray, Vector3};

use super::{solve_quadratic, Primitive, EPSILON};

/// A sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2. * ray.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;
        let (t1, t2) = solve_quadratic(a, b, c)?;

        // the nearer root wins unless it sits on the ray origin or behind it
        [t1, t2].into_iter().find(|t| t.abs() >= EPSILON && *t > 0.)
    }

    fn normal(&self, point: Vector3) -> Vector3 {
        (point - self.center).normalize()
    }
}
