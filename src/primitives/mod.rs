mod cone;
mod cylinder;
mod mesh;
mod sphere;
mod triangle;

use crate::core::Material;
use crate::core::Point;
use crate::ray_intersection::{Hit, Intersectable, Ray};
use nalgebra::Vector2;
use serde::Deserialize;

pub use cone::*;
pub use cylinder::*;
pub use mesh::*;
pub use sphere::*;
pub use triangle::*;

/// An entry of a scene file's object list.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Object3D {
    Sphere(Box<Sphere>),
    Triangle(Box<Triangle>),
    Cone(Box<Cone>),
    Cylinder(Box<Cylinder>),
    Mesh(Box<Mesh>),
}

impl Object3D {
    /// The renderable shape, or `None` for meshes which must be expanded.
    pub fn into_primitive(self) -> Option<Primitive> {
        match self {
            Object3D::Sphere(sphere) => Some(Primitive::Sphere(*sphere)),
            Object3D::Triangle(triangle) => Some(Primitive::Triangle(*triangle)),
            Object3D::Cone(cone) => Some(Primitive::Cone(*cone)),
            Object3D::Cylinder(cylinder) => Some(Primitive::Cylinder(*cylinder)),
            Object3D::Mesh(_) => None,
        }
    }
}

/// A shape the scene can intersect and shade.
#[derive(Clone, Debug)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
    Cone(Cone),
    Cylinder(Cylinder),
}

impl Primitive {
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => &sphere.material,
            Primitive::Triangle(triangle) => &triangle.material,
            Primitive::Cone(cone) => &cone.material,
            Primitive::Cylinder(cylinder) => &cylinder.material,
        }
    }

    /// Only spheres carry a texture parametrization; other shapes map every
    /// point to the origin of texture space.
    pub fn map_texture_coord(&self, surface_point: &Point) -> Vector2<f64> {
        match self {
            Primitive::Sphere(sphere) => sphere.map_texture_coord(surface_point),
            _ => Vector2::zeros(),
        }
    }
}

impl Intersectable for Primitive {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Triangle(triangle) => triangle.intersect(ray),
            Primitive::Cone(cone) => cone.intersect(ray),
            Primitive::Cylinder(cylinder) => cylinder.intersect(ray),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

impl From<Cone> for Primitive {
    fn from(cone: Cone) -> Self {
        Primitive::Cone(cone)
    }
}

impl From<Cylinder> for Primitive {
    fn from(cylinder: Cylinder) -> Self {
        Primitive::Cylinder(cylinder)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Color;
    use nalgebra::Vector3;
    use serde_json::json;

    #[test]
    fn it_deserializes_tagged_objects() {
        let object: Object3D = serde_json::from_value(json!({
            "type": "cylinder",
            "center": [0, 0, -5],
            "radius": 1,
            "height": 2,
            "material": { "color": [0, 1, 0], "ka": 0.1, "kd": 0.8, "ks": 0.3, "n": 16 }
        }))
        .unwrap();

        let primitive = object.into_primitive().unwrap();
        assert!(matches!(primitive, Primitive::Cylinder(_)));
        assert_eq!(primitive.material().color, Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn it_keeps_meshes_out_of_primitives() {
        let object: Object3D =
            serde_json::from_value(json!({ "type": "mesh", "filepath": "cube.obj" })).unwrap();

        assert!(object.into_primitive().is_none());
    }

    #[test]
    fn it_rejects_unknown_types() {
        assert!(serde_json::from_value::<Object3D>(json!({ "type": "torus" })).is_err());
    }

    #[test]
    fn it_dispatches_intersections() {
        let primitive =
            Primitive::from(Sphere::new(Point::new(0.0, 0.0, -5.0), 1.0, Material::default()));
        let hit = primitive
            .intersect(&Ray::new(Point::origin(), -Vector3::z()))
            .unwrap();

        assert!((hit.distance - 4.0).abs() < 1e-9);
    }

    #[test]
    fn it_maps_flat_shapes_to_the_texture_origin() {
        let primitive = Primitive::from(Cylinder::new(
            Point::origin(),
            1.0,
            1.0,
            Material::default(),
        ));

        assert_eq!(
            primitive.map_texture_coord(&Point::new(1.0, 0.5, 0.0)),
            Vector2::zeros()
        );
    }
}
