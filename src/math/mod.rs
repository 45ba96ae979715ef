mod ray;
mod vector;

use std::ops::Range;

pub use ray::*;
pub use vector::*;

/// Remap a number from one range to another.
pub fn remap(t: f64, a: Range<f64>, b: Range<f64>) -> f64 {
    (t - a.start) * ((b.end - b.start) / (a.end - a.start)) + b.start
}

/// Mirror an incident direction about a normal.
pub fn reflect(incident: Vector3, normal: Vector3) -> Vector3 {
    incident - normal * (2. * normal.dot(incident))
}

/// Calculate the refracted direction of an incident direction crossing a
/// boundary from a medium of `from_ior` into one of `to_ior`.
///
/// Returns `None` on total internal reflection.
pub fn refraction_vec(
    incident: Vector3,
    normal: Vector3,
    from_ior: f64,
    to_ior: f64,
) -> Option<Vector3> {
    let n = from_ior / to_ior;
    let cos_i = -normal.dot(incident);
    let sin_t2 = n * n * (1. - cos_i * cos_i);
    if sin_t2 > 1. {
        return None;
    }

    let cos_t = (1. - sin_t2).sqrt();
    Some(incident * n + normal * (n * cos_i - cos_t))
}
