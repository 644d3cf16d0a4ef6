use image::{Pixel, RgbImage};
use nalgebra::{clamp, Vector2, Vector3};
use std::fmt;
use std::path::Path;

#[derive(Clone)]
pub struct Texture {
    width: u32,
    height: u32,
    texture: RgbImage,
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Texture {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl Texture {
    pub fn from_image(texture: RgbImage) -> Self {
        Self {
            width: texture.width(),
            height: texture.height(),
            texture,
        }
    }

    pub fn load(path: &Path) -> Result<Self, image::ImageError> {
        Ok(Self::from_image(image::open(path)?.to_rgb8()))
    }

    /// Samples the texture at `uv`. Coordinates wrap around, `v = 0` is the
    /// bottom row.
    pub fn color_at(&self, uv: Vector2<f64>) -> Vector3<f64> {
        if self.width == 0 || self.height == 0 {
            return Vector3::zeros();
        }
        let (x, y) = (uv.x % 1.0, uv.y % 1.0);
        let x = if x < 0.0 { x + 1.0 } else { x };
        let y = if y < 0.0 { y + 1.0 } else { y };

        let (x, y) = (
            x * f64::from(self.width),
            (1.0 - y) * f64::from(self.height),
        );
        let (x, y) = (
            clamp(x as u32, 0, self.width - 1),
            clamp(y as u32, 0, self.height - 1),
        );

        let channels = self.texture.get_pixel(x, y).channels();

        let norm = f64::from(std::u8::MAX);
        Vector3::new(
            f64::from(channels[0]) / norm,
            f64::from(channels[1]) / norm,
            f64::from(channels[2]) / norm,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use image::Rgb;

    fn checker() -> Texture {
        // top row: red, green; bottom row: blue, white
        Texture::from_image(RgbImage::from_fn(2, 2, |x, y| match (x, y) {
            (0, 0) => Rgb([255, 0, 0]),
            (1, 0) => Rgb([0, 255, 0]),
            (0, 1) => Rgb([0, 0, 255]),
            _ => Rgb([255, 255, 255]),
        }))
    }

    #[test]
    fn it_samples_corners() {
        let texture = checker();

        assert_eq!(texture.color_at(Vector2::new(0.0, 0.0)), Vector3::z());
        assert_eq!(texture.color_at(Vector2::new(0.99, 0.0)), Vector3::repeat(1.0));
        assert_eq!(texture.color_at(Vector2::new(0.0, 0.99)), Vector3::x());
    }

    #[test]
    fn it_wraps_out_of_range_coordinates() {
        let texture = checker();

        assert_eq!(
            texture.color_at(Vector2::new(-0.01, 0.0)),
            texture.color_at(Vector2::new(0.99, 0.0))
        );
        assert_eq!(
            texture.color_at(Vector2::new(2.0, 3.0)),
            texture.color_at(Vector2::new(0.0, 0.0))
        );
        assert_eq!(
            texture.color_at(Vector2::new(1.0, 1.0)),
            texture.color_at(Vector2::new(0.0, 0.0))
        );
    }

    #[test]
    fn it_never_panics_on_non_finite_coordinates() {
        let texture = checker();

        texture.color_at(Vector2::new(f64::NAN, f64::INFINITY));
        texture.color_at(Vector2::new(-1e300, 1e300));
    }
}
