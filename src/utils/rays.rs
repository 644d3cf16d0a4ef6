use nalgebra::{Unit, Vector3};

/// Mirrors `incident` about `normal`.
pub fn reflect(incident: &Vector3<f64>, normal: &Vector3<f64>) -> Unit<Vector3<f64>> {
    Unit::new_normalize(incident - 2.0 * incident.dot(normal) * normal)
}

/// Reflects the direction towards the light about the normal, as used by the
/// Phong specular term (`R = 2(N·L)N - L`).
pub fn reflect_light(light_dir: &Vector3<f64>, normal: &Vector3<f64>) -> Vector3<f64> {
    2.0 * normal.dot(light_dir) * normal - light_dir
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_reflects_incident_rays() {
        let normal = Vector3::y();
        let incident = Vector3::new(1.0, -1.0, 0.0);
        let reflected = reflect(&incident, &normal);

        let expected = Vector3::new(1.0, 1.0, 0.0).normalize();
        assert!((reflected.into_inner() - expected).norm() < 1e-12);
    }

    #[test]
    fn it_reflects_light_directions() {
        let normal = Vector3::z();
        let light_dir = Vector3::new(0.0, 1.0, 1.0).normalize();
        let reflected = reflect_light(&light_dir, &normal);

        assert!((reflected - Vector3::new(0.0, -1.0, 1.0).normalize()).norm() < 1e-12);
    }
}
