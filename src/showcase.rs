//! The demo scene: a checkered floor and textured wall framing a table with
//! a few primitives and glass spheres on and around it.

use crate::{
    lighting::{PointLight, Spotlight},
    material::{Material, Refraction},
    math::Vector3,
    object::{Cone, Cylinder, Plane, SceneObject, Sphere},
    pattern::Pattern,
    scene::{Fog, Scene, SceneOptions},
    texture::Texture,
};

const GREEN: Vector3 = Vector3::new(0., 1., 0.);
const BLUE: Vector3 = Vector3::new(0., 0., 1.);

/// Eight triangles meeting at a bottom vertex `c`, a middle square of side
/// `width` and a top vertex `height` above `c`.
fn octahedron(c: Vector3, width: f64, height: f64, material: &Material) -> Vec<SceneObject> {
    let (hw, hh) = (width / 2., height / 2.);
    let bottom = c;
    let top = Vector3::new(c.x, c.y + height, c.z);
    let left = Vector3::new(c.x - hw, c.y + hh, c.z);
    let right = Vector3::new(c.x + hw, c.y + hh, c.z);
    let front = Vector3::new(c.x, c.y + hh, c.z + hw);
    let back = Vector3::new(c.x, c.y + hh, c.z - hw);

    [
        Plane::triangle(bottom, front, left),
        Plane::triangle(bottom, right, front),
        Plane::triangle(bottom, back, right),
        Plane::triangle(bottom, left, back),
        Plane::triangle(top, left, front),
        Plane::triangle(top, front, right),
        Plane::triangle(top, right, back),
        Plane::triangle(top, back, left),
    ]
    .into_iter()
    .map(|face| SceneObject::new(face, material.clone()))
    .collect()
}

/// Build the demo scene. Without textures the wall stays green and the
/// globe stays white.
pub fn showcase(wall: Option<Texture>, earth: Option<Texture>) -> Scene {
    let mut objects = Vec::new();

    objects.push(
        SceneObject::new(
            Plane::quad(
                Vector3::new(-50., -15., -40.),
                Vector3::new(50., -15., -40.),
                Vector3::new(50., -15., -150.),
                Vector3::new(-50., -15., -150.),
            ),
            Material::matte(Vector3::one()),
        )
        .with_pattern(Pattern::Checkerboard {
            width: 5.,
            x_offset: 50.,
            even: Vector3::new(0.5, 0., 0.),
            odd: Vector3::new(1., 0.84, 0.),
        }),
    );

    let mut back_wall = SceneObject::new(
        Plane::quad(
            Vector3::new(-40., -16., -130.),
            Vector3::new(40., -16., -130.),
            Vector3::new(40., 30., -130.),
            Vector3::new(-40., 30., -130.),
        ),
        Material::matte(GREEN),
    );
    if let Some(texture) = wall {
        back_wall = back_wall.with_pattern(Pattern::Planar {
            texture,
            x: -40.0..40.0,
            y: -16.0..30.0,
        });
    }
    objects.push(back_wall);

    let globe_center = Vector3::new(-5., -1., -80.);
    let mut globe = SceneObject::new(Sphere::new(globe_center, 3.5), Material::matte(Vector3::one()));
    if let Some(texture) = earth {
        globe = globe.with_pattern(Pattern::Spherical {
            texture,
            center: globe_center,
        });
    }
    objects.push(globe);

    // a stacked pair of mirrored drums, hollow enough that their inner
    // faces must not reflect
    let drum = Material {
        reflectivity: Some(0.4),
        ..Material::colored(BLUE)
    };
    objects.push(
        SceneObject::new(Cylinder::new(Vector3::new(5., -8., -90.), 4., 3.5), drum.clone())
            .with_culled_back_reflections(),
    );
    objects.push(
        SceneObject::new(Cylinder::new(Vector3::new(5., -4.5, -90.), 2.5, 2.5), drum)
            .with_culled_back_reflections(),
    );

    let gem = Material {
        specular: Some(0.9),
        ..Material::colored(GREEN)
    };
    objects.extend(octahedron(Vector3::new(5., -2., -90.), 3., 6., &gem));

    objects.push(SceneObject::new(
        Plane::quad(
            Vector3::new(-10., -8., -65.),
            Vector3::new(10., -8., -65.),
            Vector3::new(10., -8., -100.),
            Vector3::new(-10., -8., -100.),
        ),
        Material::colored(Vector3::new(0.55, 0.27, 0.08)),
    ));

    let leg = Material::colored(Vector3::new(0.18, 0.3, 0.3));
    for (x, z) in [(-8., -67.), (8., -67.), (8., -98.), (-8., -98.)] {
        objects.push(SceneObject::new(
            Cylinder::new(Vector3::new(x, -15., z), 0.5, 7.),
            leg.clone(),
        ));
    }

    objects.push(SceneObject::new(
        Cone::new(Vector3::new(-5., -8., -80.), 3., 4.),
        Material::colored(Vector3::new(0.8, 0., 0.)),
    ));

    objects.push(SceneObject::new(
        Sphere::new(Vector3::new(7., -12., -60.), 3.),
        Material {
            color: Vector3::zero(),
            reflectivity: Some(0.05),
            transparency: Some(0.9),
            refraction: Some(Refraction {
                coefficient: 1.,
                index: 1.05,
            }),
            ..Default::default()
        },
    ));

    objects.push(SceneObject::new(
        Sphere::new(Vector3::new(7., -5.5, -72.), 2.5),
        Material {
            color: Vector3::new(0.2, 0., 0.),
            reflectivity: Some(0.05),
            transparency: Some(0.8),
            ..Default::default()
        },
    ));

    objects.push(SceneObject::new(
        Sphere::new(Vector3::new(-9., -13.5, -62.), 1.5),
        Material {
            reflectivity: Some(0.8),
            ..Material::colored(GREEN)
        },
    ));

    Scene {
        objects,
        light: PointLight::new(Vector3::new(20., 40., -20.)),
        spotlight: Some(Spotlight::new(
            Vector3::new(20., 30., -100.),
            Vector3::new(-20., -30., 15.),
            12.,
        )),
        background: Vector3::one(),
        options: SceneOptions {
            fog: Some(Fog {
                z_near: -40.,
                z_far: -140.,
                y_top: 50.,
                y_bottom: -15.,
            }),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{material::Color, math::Ray, object::Primitive};

    #[test]
    fn test_layout() {
        let scene = showcase(None, None);
        assert_eq!(scene.objects.len(), 22);
        assert!(scene.objects[0].pattern.is_some());
        assert!(scene.objects[1].pattern.is_none());
        let culled = scene.objects.iter().filter(|o| o.cull_back_reflections).count();
        assert_eq!(culled, 2);
    }

    #[test]
    fn test_octahedron_faces_point_outward() {
        let c = Vector3::new(5., -2., -90.);
        let middle = Vector3::new(c.x, c.y + 3., c.z);
        for face in octahedron(c, 3., 6., &Material::default()) {
            let plane = match &face.shape {
                crate::object::Shape::Plane(p) => p,
                _ => unreachable!(),
            };
            let centroid = plane
                .vertices()
                .iter()
                .fold(Vector3::zero(), |acc, &v| acc + v)
                / 3.;
            assert!(plane.normal(centroid).dot(centroid - middle) > 0.);
        }
    }

    #[test]
    fn test_textures_attach_patterns() {
        let scene = showcase(
            Some(Texture::Solid(Color::new(0, 0, 255))),
            Some(Texture::Solid(Color::new(255, 0, 0))),
        );
        assert!(scene.objects[1].pattern.is_some());
        assert!(scene.objects[2].pattern.is_some());

        // straight at the wall's left side, past everything else
        let ray = Ray::new(Vector3::zero(), Vector3::new(-30., 20., -130.));
        let hit = scene.closest_hit(&ray).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(scene.objects[1].color_at(hit.point), BLUE);
    }

    #[test]
    fn test_floor_is_checkered() {
        let scene = showcase(None, None);
        let ray = Ray::new(Vector3::zero(), Vector3::new(0., -15., -60.));
        let hit = scene.closest_hit(&ray).unwrap();
        assert_eq!(hit.index, 0);
        let a = scene.objects[0].color_at(hit.point);
        let b = scene.objects[0].color_at(hit.point + Vector3::new(5., 0., 0.));
        assert_ne!(a, b);
    }

    #[test]
    fn test_small_render() {
        let mut scene = showcase(None, None);
        scene.camera.divisions = 16;
        let pixels = scene.render();
        assert_eq!(pixels.len(), 256);
        assert!(pixels.iter().any(|&p| p != Color::white()));
    }
}
