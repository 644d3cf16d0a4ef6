use super::Color;
use num_traits::identities::Zero;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Material {
    pub color: Color,
    pub ka: f64,
    pub kd: f64,
    pub ks: f64,
    pub n: f64,
    #[serde(default)]
    pub texture: Option<String>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::zero(),
            ka: 0.0,
            kd: 0.0,
            ks: 0.0,
            n: 1.0,
            texture: None,
        }
    }
}

impl Material {
    pub fn new(color: Color, ka: f64, kd: f64, ks: f64, n: f64) -> Self {
        Self {
            color,
            ka,
            kd,
            ks,
            n,
            texture: None,
        }
    }

    #[must_use]
    pub fn with_texture(mut self, texture: &str) -> Self {
        self.texture = Some(texture.to_string());
        self
    }
}
