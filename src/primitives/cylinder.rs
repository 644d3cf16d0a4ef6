use crate::core::{Material, Point, EPSILON};
use crate::ray_intersection::{Hit, Intersectable, Ray};
use crate::utils::quadratic;
use nalgebra::{Unit, Vector3};
use serde::Deserialize;

/// Open cylinder around the vertical line through `center`, spanning
/// `center.y ..= center.y + height`.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cylinder {
    center: Point,
    radius: f64,
    height: f64,
    pub material: Material,
}

impl Cylinder {
    pub fn new(center: Point, radius: f64, height: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            height,
            material,
        }
    }

    fn hit_at(&self, ray: &Ray, distance: f64) -> Option<Hit> {
        if distance <= EPSILON {
            return None;
        }

        let hit_point = ray.at(distance);
        if hit_point.y < self.center.y || self.center.y + self.height < hit_point.y {
            return None;
        }

        let radial = Vector3::new(
            hit_point.x - self.center.x,
            0.0,
            hit_point.z - self.center.z,
        );
        let normal = Unit::try_new(radial, EPSILON)?;
        Some(Hit::facing(distance, normal, ray))
    }
}

impl Intersectable for Cylinder {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let (dx, dz) = (ray.direction.x, ray.direction.z);
        let (ox, oz) = (ray.origin.x - self.center.x, ray.origin.z - self.center.z);

        let a = dx * dx + dz * dz;
        if a < EPSILON {
            return None;
        }
        let b = 2.0 * (dx * ox + dz * oz);
        let c = ox * ox + oz * oz - self.radius * self.radius;

        if b * b - 4.0 * a * c < EPSILON {
            return None;
        }

        let (t0, t1) = quadratic(a, b, c)?;
        self.hit_at(ray, t0).or_else(|| self.hit_at(ray, t1))
    }
}
