use log::debug;
use rayon::prelude::*;

use crate::{
    camera::Camera,
    lighting::{PointLight, ShadingPoint, Spotlight},
    material::{Color, Refraction},
    math::{refraction_vec, Ray, Vector3},
    object::SceneObject,
    RenderError,
};

/// Color multiplier for points shadowed by a transparent or refractive object.
pub const TRANSLUCENT_SHADOW: f64 = 0.6;

/// Color multiplier for points shadowed by an opaque object.
pub const OPAQUE_SHADOW: f64 = 0.2;

/// The most divisions along each side of the image plane that
/// [`Scene::render_to`] accepts.
pub const MAX_DIVISIONS: u32 = 16384;

/// The nearest intersection of a ray with the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Index of the struck object in [`Scene::objects`].
    pub index: usize,
    pub point: Vector3,

    /// Distance along the ray to `point`.
    pub distance: f64,
}

/// Fades colors toward white with depth and height.
///
/// Two factors are taken from the hit point, `t` from its z between
/// `z_near` and `z_far` and `s` from its y between `y_top` and `y_bottom`,
/// and the color becomes `(2 - s - t) * color + s * t * white`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub z_near: f64,
    pub z_far: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

impl Fog {
    pub fn blend(&self, hit: Vector3, color: Vector3) -> Vector3 {
        let t = (hit.z - self.z_near) / (self.z_far - self.z_near);
        let s = (hit.y - self.y_top) / (self.y_bottom - self.y_top);
        color * (2. - s - t) + Vector3::one() * (s * t)
    }
}

/// Scene options. Defaults are provided.
#[derive(Debug, Clone)]
pub struct SceneOptions {
    /// The maximum depth of the ray tree. Primary rays are depth 1, and no
    /// secondary rays are spawned from a ray at this depth.
    pub max_ray_depth: u32,

    /// Applied to the color of every ray that strikes an object.
    pub fog: Option<Fog>,

    /// Clamp diffuse lighting at zero instead of letting back-facing lights
    /// darken a surface.
    pub clamp_diffuse: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            max_ray_depth: 4,
            fog: None,
            clamp_diffuse: false,
        }
    }
}

/// A scene, which contains a list of objects, lights, and a camera to render from.
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub camera: Camera,
    pub light: PointLight,

    /// Adds a second light where it can see a hit point unobstructed.
    pub spotlight: Option<Spotlight>,

    /// The color of rays that miss everything.
    pub background: Vector3,
    pub options: SceneOptions,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            camera: Camera::default(),
            light: PointLight::new(Vector3::new(0., 10., 0.)),
            spotlight: None,
            background: Vector3::one(),
            options: SceneOptions::default(),
        }
    }
}

impl Scene {
    /// Find the nearest object struck by a ray. Every object is tested; on a
    /// tie the object earlier in the list wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit> {
        let mut closest: Option<(usize, f64)> = None;

        for (index, object) in self.objects.iter().enumerate() {
            let t = match object.intersect(ray) {
                Some(t) if t > 0. => t,
                _ => continue,
            };

            match closest {
                Some((_, nearest)) if nearest <= t => {}
                _ => closest = Some((index, t)),
            }
        }

        closest.map(|(index, distance)| Hit {
            index,
            point: ray.along(distance),
            distance,
        })
    }

    /// Multiplier applied to a point's color by whatever lies between it
    /// and the point light.
    fn shadow_factor(&self, point: Vector3) -> f64 {
        let light_vec = self.light.position - point;
        match self.closest_hit(&Ray::new(point, light_vec)) {
            Some(hit) if hit.distance < light_vec.magnitude() => {
                let material = &self.objects[hit.index].material;
                if material.is_transparent() || material.is_refractive() {
                    TRANSLUCENT_SHADOW
                } else {
                    OPAQUE_SHADOW
                }
            }
            _ => 1.,
        }
    }

    /// Bend a ray into `object` at `entry` and back out of the far side.
    /// Returns `None` if either boundary totally reflects or the inner ray
    /// escapes.
    fn refract_through(
        &self,
        object: &SceneObject,
        ray: &Ray,
        entry: Vector3,
        refraction: Refraction,
    ) -> Option<Ray> {
        let inward = refraction_vec(ray.direction, object.normal(entry), 1., refraction.index)?;
        let inner = Ray::new(entry, inward);
        let exit = self.closest_hit(&inner)?;

        // the exit normal comes from the entered object, whatever the inner ray struck
        let outward = refraction_vec(
            inner.direction,
            -object.normal(exit.point),
            refraction.index,
            1.,
        )?;
        Some(Ray::new(exit.point, outward))
    }

    /// Trace out a ray, getting its color. `depth` starts at 1 for primary rays.
    ///
    /// The result is unclamped.
    pub fn trace_ray(&self, ray: &Ray, depth: u32) -> Vector3 {
        let hit = match self.closest_hit(ray) {
            Some(hit) => hit,
            None => return self.background,
        };
        let object = &self.objects[hit.index];
        let material = &object.material;

        let shading = ShadingPoint {
            hit: hit.point,
            view: -ray.direction,
            color: object.color_at(hit.point),
            clamp_diffuse: self.options.clamp_diffuse,
        };

        // the spotlight only contributes where nothing at all blocks the way to it
        let mut color = match &self.spotlight {
            Some(spot)
                if self
                    .closest_hit(&Ray::new(hit.point, spot.position - hit.point))
                    .is_none() =>
            {
                object.lighting_with_spot(&shading, &self.light, spot)
            }
            _ => object.lighting(&shading, &self.light),
        };

        color *= self.shadow_factor(hit.point);

        if depth < self.options.max_ray_depth {
            if let Some(reflectivity) = material.reflectivity {
                let normal = object.normal(hit.point);
                if !object.cull_back_reflections || normal.z > 0. {
                    let reflected = self.trace_ray(&ray.reflect(hit.point, normal), depth + 1);
                    color += reflected * reflectivity;
                }
            }

            match (material.transparency, material.refraction) {
                (Some(transparency), None) => {
                    let through = self.trace_ray(&Ray::new(hit.point, ray.direction), depth + 1);
                    color += through * transparency;
                }
                (Some(_), Some(refraction)) => {
                    if let Some(refracted) = self.refract_through(object, ray, hit.point, refraction)
                    {
                        color += self.trace_ray(&refracted, depth + 1) * refraction.coefficient;
                    }
                }
                _ => {}
            }
        }

        match &self.options.fog {
            Some(fog) => fog.blend(hit.point, color),
            None => color,
        }
    }

    /// Trace out a pixel, where top-left of the image is (0, 0).
    /// This function is run many times in parallel.
    pub fn trace_pixel(&self, column: u32, row: u32) -> Vector3 {
        self.trace_ray(&self.camera.ray_at(column, row), 1)
    }

    /// Render the image out as a list of Colors, row by row.
    pub fn render(&self) -> Vec<Color> {
        let n = self.camera.divisions;
        debug!(
            "rendering {}x{} pixels over {} objects",
            n,
            n,
            self.objects.len()
        );

        (0..n)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..n).map(move |column| Color::from(self.trace_pixel(column, row)))
            })
            .collect::<Vec<_>>()
    }

    /// Render the image out to the desired save file. The format is picked
    /// from the file extension.
    pub fn render_to(&self, path: &str) -> Result<(), RenderError> {
        let n = self.camera.divisions;
        if n == 0 || n > MAX_DIVISIONS {
            return Err(RenderError::InvalidOptions(format!(
                "divisions must be between 1 and {}, got {}",
                MAX_DIVISIONS, n
            )));
        }

        let rendered = self.render();
        let mut imgbuf: image::RgbImage = image::ImageBuffer::new(n, n);
        for (pixel, color) in imgbuf.pixels_mut().zip(rendered) {
            *pixel = image::Rgb([color.r, color.g, color.b]);
        }

        imgbuf.save(path)?;
        Ok(())
    }
}
