mod cone;
mod cylinder;
mod plane;
mod sphere;

use crate::{
    material::Material,
    math::{Ray, Vector3},
    pattern::Pattern,
};

pub use cone::*;
pub use cylinder::*;
pub use plane::*;
pub use sphere::*;

/// Roots and discriminants smaller than this are treated as zero. Rejecting
/// near-zero roots keeps secondary rays from re-hitting the surface they
/// start on.
pub const EPSILON: f64 = 0.001;

/// The capabilities every geometric primitive provides.
pub trait Primitive {
    /// The ray parameter of this primitive's intersection with `ray`, if any.
    /// The value may be negative; callers only keep positive hits.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// The unit surface normal at a point on the primitive.
    fn normal(&self, point: Vector3) -> Vector3;
}

/// Solve `a t^2 + b t + c = 0`, returning both roots in ascending order.
///
/// Tangent rays (discriminant within [`EPSILON`] of zero) count as misses.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let delta = b * b - 4. * a * c;
    if delta.abs() < EPSILON || delta < 0. {
        return None;
    }

    let t1 = (-b - delta.sqrt()) / (2. * a);
    let t2 = (-b + delta.sqrt()) / (2. * a);
    if t1 < t2 {
        Some((t1, t2))
    } else {
        Some((t2, t1))
    }
}

/// Every kind of primitive the tracer understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Cylinder(Cylinder),
    Cone(Cone),
}

impl Primitive for Shape {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Self::Sphere(s) => s.intersect(ray),
            Self::Plane(p) => p.intersect(ray),
            Self::Cylinder(c) => c.intersect(ray),
            Self::Cone(c) => c.intersect(ray),
        }
    }

    fn normal(&self, point: Vector3) -> Vector3 {
        match self {
            Self::Sphere(s) => s.normal(point),
            Self::Plane(p) => p.normal(point),
            Self::Cylinder(c) => c.normal(point),
            Self::Cone(c) => c.normal(point),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Self::Sphere(s)
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Self::Plane(p)
    }
}

impl From<Cylinder> for Shape {
    fn from(c: Cylinder) -> Self {
        Self::Cylinder(c)
    }
}

impl From<Cone> for Shape {
    fn from(c: Cone) -> Self {
        Self::Cone(c)
    }
}

/// A shape placed in the scene along with how it looks.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub shape: Shape,
    pub material: Material,

    /// Overrides the material color per hit point.
    pub pattern: Option<Pattern>,

    /// Only trace reflections where the surface normal points toward +z
    /// (toward the camera). Keeps the inside of hollow shapes from reflecting.
    pub cull_back_reflections: bool,
}

impl SceneObject {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
            pattern: None,
            cull_back_reflections: false,
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_culled_back_reflections(mut self) -> Self {
        self.cull_back_reflections = true;
        self
    }

    /// The surface color at a hit point, after any pattern is applied.
    pub fn color_at(&self, hit: Vector3) -> Vector3 {
        self.pattern
            .as_ref()
            .and_then(|p| p.color_at(hit))
            .unwrap_or(self.material.color)
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        self.shape.intersect(ray)
    }

    pub fn normal(&self, point: Vector3) -> Vector3 {
        self.shape.normal(point)
    }
}
