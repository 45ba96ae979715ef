use crate::math::{Ray, Vector3};

use super::{Primitive, EPSILON};

/// Rays whose direction is this close to perpendicular with the normal are
/// treated as parallel to the plane.
const PARALLEL_EPSILON: f64 = 1e-4;

/// A bounded flat polygon: a triangle or a quadrilateral.
///
/// The normal follows the winding of the vertices (right-handed).
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    vertices: Vec<Vector3>,
    normal: Vector3,
}

impl Plane {
    /// A quadrilateral from four coplanar, convex, ordered corners.
    pub fn quad(a: Vector3, b: Vector3, c: Vector3, d: Vector3) -> Self {
        Self::from_vertices(vec![a, b, c, d])
    }

    pub fn triangle(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self::from_vertices(vec![a, b, c])
    }

    fn from_vertices(vertices: Vec<Vector3>) -> Self {
        let first = vertices[0];
        let last = vertices[vertices.len() - 1];
        let normal = (vertices[1] - first).cross(last - first).normalize();
        Self { vertices, normal }
    }

    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    /// Whether a point on the plane lies within the polygon's edges.
    pub fn contains(&self, q: Vector3) -> bool {
        let n = self.vertices.len();
        let mut sides = self.vertices.iter().enumerate().map(|(i, &v)| {
            let edge = self.vertices[(i + 1) % n] - v;
            edge.cross(q - v).dot(self.normal)
        });

        let first = sides.next().unwrap_or(0.);
        if first > 0. {
            sides.all(|k| k > 0.)
        } else if first < 0. {
            sides.all(|k| k < 0.)
        } else {
            false
        }
    }
}

impl Primitive for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.vertices[0] - ray.origin).dot(self.normal) / denom;
        if t.abs() < EPSILON {
            return None;
        }

        if self.contains(ray.along(t)) {
            Some(t)
        } else {
            None
        }
    }

    fn normal(&self, _: Vector3) -> Vector3 {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::quad(
            Vector3::new(-50., -15., -40.),
            Vector3::new(50., -15., -40.),
            Vector3::new(50., -15., -150.),
            Vector3::new(-50., -15., -150.),
        )
    }

    #[test]
    fn test_normal_follows_winding() {
        assert_eq!(floor().normal(Vector3::zero()), Vector3::up());

        let wall = Plane::quad(
            Vector3::new(-40., -16., -130.),
            Vector3::new(40., -16., -130.),
            Vector3::new(40., 30., -130.),
            Vector3::new(-40., 30., -130.),
        );
        assert_eq!(wall.normal(Vector3::zero()), Vector3::new(0., 0., 1.));
    }

    #[test]
    fn test_ray_hits_inside_quad() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0., -15., -60.));
        let t = floor().intersect(&ray).unwrap();
        assert!(ray.along(t).approx_eq(Vector3::new(0., -15., -60.), 1e-9));
    }

    #[test]
    fn test_ray_outside_bounds_misses() {
        // crosses y = -15 at z = -30, in front of the floor's near edge
        let ray = Ray::new(Vector3::zero(), Vector3::new(0., -15., -30.));
        assert_eq!(floor().intersect(&ray), None);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray::new(Vector3::new(0., -10., 0.), Vector3::new(0., 0., -1.));
        assert_eq!(floor().intersect(&ray), None);
    }

    #[test]
    fn test_ray_on_plane_origin_rejected() {
        let ray = Ray::new(Vector3::new(0., -15., -60.), Vector3::new(0., 1., 0.));
        assert_eq!(floor().intersect(&ray), None);
    }

    #[test]
    fn test_triangle() {
        let tri = Plane::triangle(
            Vector3::new(0., 0., -10.),
            Vector3::new(2., 0., -10.),
            Vector3::new(0., 2., -10.),
        );
        assert_eq!(tri.normal(Vector3::zero()), Vector3::new(0., 0., 1.));
        assert!(tri.contains(Vector3::new(0.5, 0.5, -10.)));
        assert!(!tri.contains(Vector3::new(1.5, 1.5, -10.)));

        let ray = Ray::new(Vector3::new(0.5, 0.5, 0.), Vector3::new(0., 0., -1.));
        assert!((tri.intersect(&ray).unwrap() - 10.).abs() < 1e-9);
        let ray = Ray::new(Vector3::new(1.5, 1.5, 0.), Vector3::new(0., 0., -1.));
        assert_eq!(tri.intersect(&ray), None);
    }
}
