use crate::math::{Ray, Vector3};

/// A square grid of cells on a virtual image plane, viewed from a single eye
/// point. The plane is centered on the -z axis, `distance` units from the eye.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vector3,
    pub width: f64,
    pub height: f64,
    pub distance: f64,

    /// Number of cells along each axis; the rendered image is this many
    /// pixels square.
    pub divisions: u32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vector3::zero(),
            width: 20.,
            height: 20.,
            distance: 40.,
            divisions: 500,
        }
    }
}

impl Camera {
    /// Size of one cell on the image plane.
    pub fn cell_size(&self) -> (f64, f64) {
        (
            self.width / self.divisions as f64,
            self.height / self.divisions as f64,
        )
    }

    /// Direction of the primary ray through the center of a cell. Row 0 is
    /// the top of the image.
    pub fn direction_at(&self, column: u32, row: u32) -> Vector3 {
        let (cw, ch) = self.cell_size();
        let xp = -self.width * 0.5 + column as f64 * cw;
        let yp = -self.height * 0.5 + (self.divisions - 1 - row) as f64 * ch;
        Vector3::new(xp + 0.5 * cw, yp + 0.5 * ch, -self.distance)
    }

    pub fn ray_at(&self, column: u32, row: u32) -> Ray {
        Ray::new(self.eye, self.direction_at(column, row))
    }
}
