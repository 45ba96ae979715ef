use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

/// A vector in 3D space. Also used for unclamped RGB colors during shading.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Instantiate a new Vector3.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A Vector3 with every component set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    pub const fn zero() -> Self {
        Self::splat(0.)
    }

    pub const fn one() -> Self {
        Self::splat(1.)
    }

    pub const fn up() -> Self {
        Self::new(0., 1., 0.)
    }

    /// Find the dot product between two Vector3s.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross two Vector3s.
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: -self.x * other.z + self.z * other.x,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Find the magnitude of this Vector3.
    pub fn magnitude(self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Normalize this Vector3 by dividing it by its own magnitude.
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Whether every component is within `tolerance` of `other`.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Vector3::new(1., 2., 3.);
        let b = Vector3::new(-4., 0.5, 2.);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-12);
        assert!(c.dot(b).abs() < 1e-12);
        assert_eq!(Vector3::new(1., 0., 0.).cross(Vector3::up()), Vector3::new(0., 0., 1.));
    }

    #[test]
    fn test_normalize() {
        let n = Vector3::new(3., 0., 4.).normalize();
        assert!((n.magnitude() - 1.).abs() < 1e-12);
        assert!(n.approx_eq(Vector3::new(0.6, 0., 0.8), 1e-12));
    }

    #[test]
    fn test_scalar_ops() {
        let v = Vector3::new(1., -2., 3.);
        assert_eq!(v * 2., Vector3::new(2., -4., 6.));
        assert_eq!(-v, Vector3::new(-1., 2., -3.));
        assert_eq!(v / 2., Vector3::new(0.5, -1., 1.5));

        let mut w = v;
        w += Vector3::one();
        w *= 2.;
        assert_eq!(w, Vector3::new(4., -2., 8.));
    }
}
