mod point;
mod spot;

use crate::{
    math::{reflect, Vector3},
    object::SceneObject,
};

pub use point::*;
pub use spot::*;

/// The fraction of the surface color that is always visible.
pub const AMBIENT: f64 = 0.2;

/// What the shading of one hit point depends on, besides the lights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadingPoint {
    /// World position of the hit.
    pub hit: Vector3,

    /// Unit vector from the hit back toward the viewer.
    pub view: Vector3,

    /// The surface color at the hit, with any pattern applied.
    pub color: Vector3,

    /// Keep back-facing lights from subtracting color.
    pub clamp_diffuse: bool,
}

/// Diffuse plus specular contribution of a single light.
///
/// The diffuse term is the raw `l . n` and goes negative for lights behind the
/// surface unless `clamp_diffuse` is set.
fn diffuse_specular(
    at: &ShadingPoint,
    normal: Vector3,
    light_vec: Vector3,
    shininess: Option<f64>,
) -> Vector3 {
    let mut l_dot_n = light_vec.dot(normal);
    if at.clamp_diffuse {
        l_dot_n = l_dot_n.max(0.);
    }

    let specular = match shininess {
        Some(shininess) => {
            let r_dot_v = reflect(-light_vec, normal).dot(at.view);
            if r_dot_v > 0. {
                r_dot_v.powf(shininess)
            } else {
                0.
            }
        }
        None => 0.,
    };

    at.color * l_dot_n + Vector3::one() * specular
}

impl SceneObject {
    /// Phong shading under the point light alone.
    pub fn lighting(&self, at: &ShadingPoint, light: &PointLight) -> Vector3 {
        let normal = self.normal(at.hit);
        at.color * AMBIENT
            + diffuse_specular(at, normal, light.direction_from(at.hit), self.material.specular)
    }

    /// Phong shading under both the point light and the spotlight. Points
    /// outside the spotlight's cone get [`SceneObject::lighting`].
    pub fn lighting_with_spot(
        &self,
        at: &ShadingPoint,
        light: &PointLight,
        spot: &Spotlight,
    ) -> Vector3 {
        if !spot.illuminates(at.hit) {
            return self.lighting(at, light);
        }

        let normal = self.normal(at.hit);
        let shininess = self.material.specular;
        at.color * AMBIENT
            + diffuse_specular(at, normal, light.direction_from(at.hit), shininess)
            + diffuse_specular(at, normal, spot.direction_from(at.hit), shininess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        material::Material,
        object::{Plane, Sphere},
    };

    const RED: Vector3 = Vector3::new(1., 0., 0.);

    fn floor(material: Material) -> SceneObject {
        SceneObject::new(
            Plane::quad(
                Vector3::new(-10., 0., 10.),
                Vector3::new(10., 0., 10.),
                Vector3::new(10., 0., -10.),
                Vector3::new(-10., 0., -10.),
            ),
            material,
        )
    }

    fn at(hit: Vector3, view: Vector3) -> ShadingPoint {
        ShadingPoint {
            hit,
            view,
            color: RED,
            clamp_diffuse: false,
        }
    }

    #[test]
    fn test_matte_ambient_plus_diffuse() {
        let object = floor(Material::matte(RED));
        // light at 60 degrees from the normal
        let light = PointLight::new(Vector3::new(3f64.sqrt(), 1., 0.));
        let color = object.lighting(&at(Vector3::zero(), Vector3::up()), &light);
        assert!(color.approx_eq(RED * (AMBIENT + 0.5), 1e-12));
    }

    #[test]
    fn test_diffuse_not_clamped() {
        let object = floor(Material::matte(RED));
        let light = PointLight::new(Vector3::new(0., -5., 0.));
        let color = object.lighting(&at(Vector3::zero(), Vector3::up()), &light);
        assert!(color.approx_eq(RED * (AMBIENT - 1.), 1e-12));
        assert!(color.x < 0.);

        let clamped = ShadingPoint {
            clamp_diffuse: true,
            ..at(Vector3::zero(), Vector3::up())
        };
        assert!(object.lighting(&clamped, &light).approx_eq(RED * AMBIENT, 1e-12));
    }

    #[test]
    fn test_specular_highlight_is_white() {
        let object = floor(Material {
            color: RED,
            specular: Some(10.),
            ..Default::default()
        });
        // light and viewer straight above: the mirror direction is the view
        let light = PointLight::new(Vector3::new(0., 5., 0.));
        let color = object.lighting(&at(Vector3::zero(), Vector3::up()), &light);
        assert!(color.approx_eq(RED * (AMBIENT + 1.) + Vector3::one(), 1e-12));

        // viewer looking along the surface sees no highlight
        let grazing = object.lighting(&at(Vector3::zero(), Vector3::new(1., 0., 0.)), &light);
        assert!(grazing.approx_eq(RED * (AMBIENT + 1.), 1e-12));
    }

    #[test]
    fn test_spotlight_adds_second_light() {
        let object = SceneObject::new(Sphere::new(Vector3::zero(), 1.), Material::matte(RED));
        let hit = Vector3::new(0., 1., 0.);
        let light = PointLight::new(Vector3::new(0., 5., 0.));
        let spot = Spotlight::new(Vector3::new(0., 5., 0.), Vector3::new(0., -1., 0.), 12.);

        let color = object.lighting_with_spot(&at(hit, Vector3::up()), &light, &spot);
        assert!(color.approx_eq(RED * (AMBIENT + 2.), 1e-12));
    }

    #[test]
    fn test_outside_spotlight_falls_back() {
        let object = SceneObject::new(Sphere::new(Vector3::zero(), 1.), Material::matte(RED));
        let hit = Vector3::new(0., 1., 0.);
        let light = PointLight::new(Vector3::new(0., 5., 0.));
        let spot = Spotlight::new(Vector3::new(0., 5., 0.), Vector3::new(1., 0., 0.), 12.);

        let shading = at(hit, Vector3::up());
        assert_eq!(
            object.lighting_with_spot(&shading, &light, &spot),
            object.lighting(&shading, &light)
        );
    }
}
