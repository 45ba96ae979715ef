use crate::math::Vector3;

/// A 24-bit color, RGB. Only used at the display end of the pipeline; shading
/// happens on unclamped [`Vector3`]s.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Instantiate a new Color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Instantiate a new Color from 3 f64s, clamped to the range 0-1.
    pub fn newf(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (r.clamp(0., 1.) * 255.0) as u8,
            g: (g.clamp(0., 1.) * 255.0) as u8,
            b: (b.clamp(0., 1.) * 255.0) as u8,
        }
    }
}

impl From<Vector3> for Color {
    fn from(v: Vector3) -> Self {
        Self::newf(v.x, v.y, v.z)
    }
}

impl From<Color> for Vector3 {
    fn from(c: Color) -> Self {
        Vector3::new(c.r as f64, c.g as f64, c.b as f64) / 255.
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(rgb: image::Rgb<u8>) -> Self {
        rgb.0.into()
    }
}

impl From<[u8; 3]> for Color {
    fn from(slice: [u8; 3]) -> Self {
        Self::new(slice[0], slice[1], slice[2])
    }
}

/// Refraction settings for a transparent object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refraction {
    /// The weight of the refracted color.
    pub coefficient: f64,

    /// The index of refraction of the object's interior. Must be positive.
    pub index: f64,
}

/// The surface properties of a scene object.
///
/// Each optional property is only applied by the tracer when present, so a
/// coefficient can never leak into shading without its flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// The base color of the surface.
    pub color: Vector3,

    /// Phong shininess exponent. `None` disables the specular highlight.
    pub specular: Option<f64>,

    /// The weight (0 to 1) of the mirror-reflected color.
    pub reflectivity: Option<f64>,

    /// The weight (0 to 1) of the color seen through the object.
    pub transparency: Option<f64>,

    /// Bends transmitted rays. Only used when the object is also transparent.
    pub refraction: Option<Refraction>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Vector3::one(),
            specular: Some(50.),
            reflectivity: None,
            transparency: None,
            refraction: None,
        }
    }
}

impl Material {
    /// A material of a given color with default properties.
    pub fn colored(color: Vector3) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// A material with no specular highlight.
    pub fn matte(color: Vector3) -> Self {
        Self {
            color,
            specular: None,
            ..Default::default()
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.transparency.is_some()
    }

    pub fn is_refractive(&self) -> bool {
        self.refraction.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_conversion_clamps() {
        let c: Color = Vector3::new(-0.5, 0.5, 3.).into();
        assert_eq!(c, Color::new(0, 127, 255));
    }

    #[test]
    fn test_color_to_vector() {
        let v: Vector3 = Color::white().into();
        assert_eq!(v, Vector3::one());
        let v: Vector3 = Color::default().into();
        assert_eq!(v, Vector3::zero());
    }

    #[test]
    fn test_default_material() {
        let m = Material::default();
        assert_eq!(m.color, Vector3::one());
        assert_eq!(m.specular, Some(50.));
        assert!(!m.is_transparent());
        assert!(!m.is_refractive());
        assert_eq!(Material::matte(Vector3::zero()).specular, None);
    }
}
