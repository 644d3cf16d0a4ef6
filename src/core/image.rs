use super::Color;
use crate::utils::clamp_color;
use image::{Rgb, RgbImage};
use std::ops::{Index, IndexMut};
use std::path::Path;

/// Row-major colour buffer, `(0, 0)` is the top-left pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::zeros(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [Color] {
        let width = self.width as usize;
        let start = y as usize * width;
        &mut self.pixels[start..start + width]
    }

    fn offset(&self, (x, y): (u32, u32)) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} image",
            x,
            y,
            self.width,
            self.height
        );

        y as usize * self.width as usize + x as usize
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let color = clamp_color(self[(x, y)]) * 255.0;
            Rgb([
                color.x.round() as u8,
                color.y.round() as u8,
                color.z.round() as u8,
            ])
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), image::ImageError> {
        self.to_rgb_image().save(path)
    }
}

impl Index<(u32, u32)> for Image {
    type Output = Color;

    fn index(&self, index: (u32, u32)) -> &Color {
        &self.pixels[self.offset(index)]
    }
}

impl IndexMut<(u32, u32)> for Image {
    fn index_mut(&mut self, index: (u32, u32)) -> &mut Color {
        let offset = self.offset(index);
        &mut self.pixels[offset]
    }
}
