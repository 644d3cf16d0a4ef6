use crate::core::{Material, Point, EPSILON};
use crate::ray_intersection::{Hit, Intersectable, Ray};
use crate::utils::quadratic;
use nalgebra::{Unit, Vector3};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConeData {
    #[serde(rename = "C")]
    apex: Point,
    #[serde(rename = "V")]
    axis: Vector3<f64>,
    theta: f64,
    material: Material,
}

/// Infinite single-nap cone opening from `apex` along `axis`, `theta` is the
/// half-angle in degrees.
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "ConeData")]
pub struct Cone {
    apex: Point,
    axis: Unit<Vector3<f64>>,
    theta: f64,
    cos2: f64,
    pub material: Material,
}

impl From<ConeData> for Cone {
    fn from(data: ConeData) -> Self {
        Cone::new(data.apex, data.axis, data.theta, data.material)
    }
}

impl Cone {
    pub fn new(apex: Point, axis: Vector3<f64>, theta: f64, material: Material) -> Self {
        let cos = (theta % 360.0).to_radians().cos();

        Self {
            apex,
            axis: Unit::try_new(axis, EPSILON).unwrap_or_else(Vector3::y_axis),
            theta,
            cos2: cos * cos,
            material,
        }
    }

    fn hit_at(&self, ray: &Ray, distance: f64) -> Option<Hit> {
        if distance <= EPSILON {
            return None;
        }

        let apex_to_hit = ray.at(distance) - self.apex;
        let height = apex_to_hit.dot(&self.axis);
        if self.theta < 90.0 && height <= EPSILON {
            return None;
        }

        let normal = Unit::try_new(
            self.cos2 * apex_to_hit - height * self.axis.into_inner(),
            EPSILON,
        )?;
        Some(Hit::facing(distance, normal, ray))
    }
}

impl Intersectable for Cone {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let co = ray.origin - self.apex;
        let d_dot_v = ray.direction.dot(&self.axis);
        let co_dot_v = co.dot(&self.axis);

        let a = d_dot_v * d_dot_v - self.cos2;
        let b = 2.0 * (d_dot_v * co_dot_v - ray.direction.dot(&co) * self.cos2);
        let c = co_dot_v * co_dot_v - co.dot(&co) * self.cos2;

        if a.abs() < EPSILON {
            return None;
        }

        let (t0, t1) = quadratic(a, b, c)?;
        self.hit_at(ray, t0).or_else(|| self.hit_at(ray, t1))
    }
}
