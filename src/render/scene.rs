use super::{Projection, RenderOptions};
use crate::core::{Color, Image, Point, Texture, DEFAULT_SHININESS, EPSILON};
use crate::lights::PointLight;
use crate::primitives::Primitive;
use crate::ray_intersection::{Intersectable, Intersection, Ray};
use crate::utils::{clamp_color, reflect, reflect_light};
use indicatif::ProgressBar;
use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug)]
pub struct Scene {
    pub options: RenderOptions,
    eye: Point,
    lights: Vec<PointLight>,
    objects: Vec<Primitive>,
    textures: HashMap<String, Texture>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            options: RenderOptions::default(),
            eye: Point::origin(),
            lights: Vec::new(),
            objects: Vec::new(),
            textures: HashMap::new(),
        }
    }
}

impl Scene {
    pub fn new(eye: Point, options: RenderOptions) -> Self {
        Self {
            options,
            eye,
            ..Scene::default()
        }
    }

    pub fn add_object<P: Into<Primitive>>(&mut self, object: P) {
        self.objects.push(object.into());
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn set_eye(&mut self, eye: Point) {
        self.eye = eye;
    }

    pub fn eye(&self) -> Point {
        self.eye
    }

    pub fn add_texture(&mut self, name: &str, texture: Texture) {
        self.textures.insert(name.to_string(), texture);
    }

    pub fn has_texture(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    pub fn set_shadows(&mut self, shadows: bool) {
        self.options.shadows = shadows;
    }

    /// Factors below 1 are raised to 1.
    pub fn set_ss_factor(&mut self, ss_factor: u32) {
        self.options.ss_factor = ss_factor.max(1);
    }

    pub fn set_recursion_depth(&mut self, recursion_depth: u32) {
        self.options.recursion_depth = recursion_depth;
    }

    pub fn num_objects(&self) -> usize {
        self.objects.len()
    }

    pub fn num_lights(&self) -> usize {
        self.lights.len()
    }

    fn raycast(&self, ray: &Ray) -> Option<Intersection> {
        self.objects
            .iter()
            .filter_map(|object| {
                object
                    .intersect(ray)
                    .map(|hit| Intersection::new(object, hit))
            })
            .min_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal))
    }

    /// Any hit along the ray counts, including objects beyond the light.
    fn is_shadowed(&self, ray: &Ray) -> bool {
        self.objects
            .iter()
            .any(|object| object.intersect(ray).is_some())
    }

    fn material_color(&self, intersection: &Intersection, hit_point: &Point) -> Color {
        let material = intersection.object.material();
        match material
            .texture
            .as_ref()
            .and_then(|name| self.textures.get(name))
        {
            Some(texture) => texture.color_at(intersection.object.map_texture_coord(hit_point)),
            None => material.color,
        }
    }

    /// Colour seen along `ray`, unclamped. Misses are black.
    pub fn trace(&self, ray: &Ray) -> Color {
        let intersection = match self.raycast(ray) {
            Some(intersection) => intersection,
            None => return Color::zeros(),
        };

        let hit_point = intersection.get_hit_point(ray);
        let normal = intersection.normal;
        let material = intersection.object.material();
        let material_color = self.material_color(&intersection, &hit_point);
        let view = -ray.direction;

        let mut color = material_color * material.ka;
        for light in &self.lights {
            let light_dir = (light.position - hit_point).normalize();
            if self.options.shadows && self.is_shadowed(&Ray::new(hit_point, light_dir)) {
                continue;
            }

            let n_dot_l = normal.dot(&light_dir);
            if n_dot_l > 0.0 {
                color += n_dot_l * material_color.component_mul(&light.color) * material.kd;
            }

            if material.ks >= EPSILON {
                let r_dot_v = reflect_light(&light_dir, &normal).dot(&view);
                if r_dot_v > 0.0 {
                    color += r_dot_v.powf(material.n) * light.color * material.ks;
                }
            }
        }

        let mut depth = self.options.recursion_depth;
        let (mut incident, mut point, mut normal, mut ks) =
            (ray.direction, hit_point, normal, material.ks);
        while depth > 0 && ks >= EPSILON {
            let mirror_ray = Ray {
                origin: point,
                direction: reflect(&incident, &normal).into_inner(),
            };
            let reflected = match self.raycast(&mirror_ray) {
                Some(reflected) => reflected,
                None => break,
            };

            // base colour only, textures are not sampled in reflections
            let reflected_material = reflected.object.material();
            color += reflected_material.color * ks * DEFAULT_SHININESS;

            incident = mirror_ray.direction;
            point = reflected.get_hit_point(&mirror_ray);
            normal = reflected.normal;
            ks = reflected_material.ks;
            depth -= 1;
        }

        color
    }

    /// Ray through the centre of pixel `(x, y)` of a `width` × `height`
    /// image from the render options.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let (width, height) = (self.options.width, self.options.height);
        Projection::new(self.eye, self.options.camera.as_ref(), width, height)
            .primary_ray(x, y, 0.5, 0.5)
    }

    fn render_pixel(&self, projection: &Projection, x: u32, y: u32) -> Color {
        let ss_factor = self.options.ss_factor.max(1);
        let step = f64::from(ss_factor);

        let mut color = Color::zeros();
        for i in 0..ss_factor {
            for j in 0..ss_factor {
                let dx = (f64::from(i) + 0.5) / step;
                let dy = (f64::from(j) + 0.5) / step;
                color += self.trace(&projection.primary_ray(x, y, dx, dy));
            }
        }

        clamp_color(color / (step * step))
    }

    fn render_rows<F: FnMut()>(&self, image: &mut Image, mut on_row: F) {
        let (width, height) = (image.width(), image.height());
        let projection = Projection::new(self.eye, self.options.camera.as_ref(), width, height);

        debug!(
            "Rendering {}x{}: {} objects, {} lights, shadows {}, {}x supersampling, {} reflections",
            width,
            height,
            self.num_objects(),
            self.num_lights(),
            self.options.shadows,
            self.options.ss_factor,
            self.options.recursion_depth
        );

        for y in 0..height {
            for (x, pixel) in (0..width).zip(image.row_mut(y).iter_mut()) {
                *pixel = self.render_pixel(&projection, x, y);
            }
            on_row();
        }
    }

    /// Renders into every pixel of `image`.
    pub fn render(&self, image: &mut Image) {
        self.render_rows(image, || ());
    }

    pub fn render_with_progress(&self, image: &mut Image, progress: &ProgressBar) {
        self.render_rows(image, || progress.inc(1));
    }
}
