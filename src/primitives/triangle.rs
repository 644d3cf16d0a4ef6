use crate::core::{Material, Point, EPSILON};
use crate::ray_intersection::{Hit, Intersectable, Ray};
use nalgebra::{Unit, Vector3};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TriangleData {
    a: Point,
    b: Point,
    c: Point,
    material: Material,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(from = "TriangleData")]
pub struct Triangle {
    vertices: [Point; 3],
    normal: Unit<Vector3<f64>>,
    pub material: Material,
}

impl From<TriangleData> for Triangle {
    fn from(data: TriangleData) -> Self {
        Triangle::new([data.a, data.b, data.c], data.material)
    }
}

impl Triangle {
    pub fn new(vertices: [Point; 3], material: Material) -> Self {
        Self {
            vertices,
            normal: Triangle::compute_normal(vertices),
            material,
        }
    }

    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    /// Face normal following the winding order; degenerate faces fall back to
    /// +Z and are never hit anyway.
    pub fn compute_normal(vertices: [Point; 3]) -> Unit<Vector3<f64>> {
        let edge1 = vertices[1] - vertices[0];
        let edge2 = vertices[2] - vertices[0];

        Unit::try_new(edge1.cross(&edge2), 0.0).unwrap_or_else(Vector3::z_axis)
    }
}

impl Intersectable for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];
        let p_vec = ray.direction.cross(&edge2);
        let det = edge1.dot(&p_vec);

        if det.abs() < EPSILON {
            return None;
        }

        let t_vec = ray.origin - self.vertices[0];
        let u = t_vec.dot(&p_vec) / det;
        if u < 0.0 || 1.0 < u {
            return None;
        }

        let q_vec = t_vec.cross(&edge1);
        let v = ray.direction.dot(&q_vec) / det;
        if v < 0.0 || 1.0 < u + v {
            return None;
        }

        let distance = edge2.dot(&q_vec) / det;
        if distance <= EPSILON {
            return None;
        }

        Some(Hit::facing(distance, self.normal, ray))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn triangle() -> Triangle {
        Triangle::new(
            [
                Point::new(-1.0, -1.0, -5.0),
                Point::new(1.0, -1.0, -5.0),
                Point::new(0.0, 1.0, -5.0),
            ],
            Material::default(),
        )
    }

    #[test]
    fn it_hits_the_face() {
        let hit = triangle()
            .intersect(&Ray::new(Point::origin(), -Vector3::z()))
            .unwrap();

        assert!((hit.distance - 5.0).abs() < 1e-12);
        assert_eq!(hit.normal, Vector3::z_axis());
    }

    #[test]
    fn it_faces_the_normal_towards_the_ray() {
        let hit = triangle()
            .intersect(&Ray::new(Point::new(0.0, 0.0, -10.0), Vector3::z()))
            .unwrap();

        assert!((hit.distance - 5.0).abs() < 1e-12);
        assert_eq!(hit.normal, -Vector3::z_axis());
    }

    #[test]
    fn it_misses_outside_the_edges() {
        assert!(triangle()
            .intersect(&Ray::new(Point::new(1.0, 1.0, 0.0), -Vector3::z()))
            .is_none());
        assert!(triangle()
            .intersect(&Ray::new(Point::new(0.0, -1.5, 0.0), -Vector3::z()))
            .is_none());
    }

    #[test]
    fn it_misses_parallel_rays() {
        assert!(triangle()
            .intersect(&Ray::new(Point::new(-5.0, 0.0, -5.0), Vector3::x()))
            .is_none());
    }

    #[test]
    fn it_misses_triangles_behind_the_ray() {
        assert!(triangle()
            .intersect(&Ray::new(Point::origin(), Vector3::z()))
            .is_none());
    }

    #[test]
    fn it_misses_degenerate_triangles() {
        let degenerate = Triangle::new(
            [
                Point::new(-1.0, 0.0, -5.0),
                Point::new(0.0, 0.0, -5.0),
                Point::new(1.0, 0.0, -5.0),
            ],
            Material::default(),
        );

        assert!(degenerate
            .intersect(&Ray::new(Point::origin(), -Vector3::z()))
            .is_none());
    }

    #[test]
    fn it_deserializes() {
        let triangle: Triangle = serde_json::from_value(json!({
            "a": [-1, -1, -5],
            "b": [1, -1, -5],
            "c": [0, 1, -5],
            "material": { "color": [1, 0, 0], "ka": 0.2, "kd": 0.7, "ks": 0.5, "n": 64 }
        }))
        .unwrap();

        assert_eq!(triangle.vertices()[2], Point::new(0.0, 1.0, -5.0));
        assert_eq!(triangle.normal, Vector3::z_axis());
    }
}
