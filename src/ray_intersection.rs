use crate::core::Point;
use crate::primitives::Primitive;
use nalgebra::{Unit, Vector3};

pub trait Intersectable {
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Builds a ray, normalizing `direction`.
    pub fn new(origin: Point, direction: Vector3<f64>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f64) -> Point {
        self.origin + t * self.direction
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub distance: f64,
    pub normal: Unit<Vector3<f64>>,
}

impl Hit {
    pub fn new(distance: f64, normal: Unit<Vector3<f64>>) -> Self {
        Self { distance, normal }
    }

    /// Flips the normal so it opposes the ray direction.
    pub fn facing(distance: f64, normal: Unit<Vector3<f64>>, ray: &Ray) -> Self {
        let normal = if normal.dot(&ray.direction) > 0.0 {
            -normal
        } else {
            normal
        };

        Self { distance, normal }
    }
}

#[derive(Debug)]
pub struct Intersection<'a> {
    pub object: &'a Primitive,
    pub distance: f64,
    pub normal: Unit<Vector3<f64>>,
}

impl<'a> Intersection<'a> {
    pub fn new(object: &'a Primitive, hit: Hit) -> Self {
        Self {
            object,
            distance: hit.distance,
            normal: hit.normal,
        }
    }

    pub fn get_hit_point(&self, ray: &Ray) -> Point {
        ray.at(self.distance)
    }
}
