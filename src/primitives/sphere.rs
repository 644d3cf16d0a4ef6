use crate::core::{Material, Point, EPSILON};
use crate::ray_intersection::{Hit, Intersectable, Ray};
use crate::utils::quadratic;
use nalgebra::{Rotation3, Unit, Vector2, Vector3};
use serde::Deserialize;
use std::f64::consts::PI;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SphereData {
    position: Point,
    radius: f64,
    #[serde(default)]
    rotation: Option<Vector3<f64>>,
    #[serde(default)]
    angle: f64,
    material: Material,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(from = "SphereData")]
pub struct Sphere {
    center: Point,
    radius: f64,
    rotation: Option<Rotation3<f64>>,
    pub material: Material,
}

impl From<SphereData> for Sphere {
    fn from(data: SphereData) -> Self {
        let sphere = Sphere::new(data.position, data.radius, data.material);

        match data.rotation {
            Some(axis) => sphere.rotated(axis, data.angle),
            None => sphere,
        }
    }
}

impl Sphere {
    pub fn new(center: Point, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            rotation: None,
            material,
        }
    }

    /// Rotates the texture mapping by `angle` degrees around `axis`. The
    /// geometry is unaffected.
    #[must_use]
    pub fn rotated(mut self, axis: Vector3<f64>, angle: f64) -> Self {
        self.rotation = Unit::try_new(axis, EPSILON)
            .map(|axis| Rotation3::from_axis_angle(&axis, angle.to_radians()));
        self
    }

    pub fn map_texture_coord(&self, surface_point: &Point) -> Vector2<f64> {
        let to_surface = surface_point - self.center;
        let to_surface = match &self.rotation {
            Some(rotation) => rotation * to_surface,
            None => to_surface,
        };

        let theta = (to_surface.z / self.radius).max(-1.0).min(1.0).acos();
        let phi = to_surface.y.atan2(to_surface.x);

        Vector2::new(phi / (2.0 * PI), (PI - theta) / PI)
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let hypot = ray.origin - self.center;
        let a = ray.direction.magnitude_squared();
        let b = 2.0 * hypot.dot(&ray.direction);
        let c = hypot.magnitude_squared() - self.radius * self.radius;

        let (t0, t1) = quadratic(a, b, c)?;
        let distance = if t0 > EPSILON {
            t0
        } else if t1 > EPSILON {
            t1
        } else {
            return None;
        };

        let normal = Unit::try_new(ray.at(distance) - self.center, EPSILON)?;
        Some(Hit::new(distance, normal))
    }
}
