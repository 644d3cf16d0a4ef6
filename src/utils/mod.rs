mod rays;

use crate::core::Color;

pub use rays::{reflect, reflect_light};

/// Real roots of `ax² + bx + c`, smallest first.
pub fn quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        None
    } else if discriminant == 0.0 {
        Some((-0.5 * b / a, -0.5 * b / a))
    } else {
        let q = -0.5 * (b + b.signum() * discriminant.sqrt());
        let r0 = q / a;
        let r1 = c / q;
        Some((r0.min(r1), r0.max(r1)))
    }
}

/// Clamps every channel into [0, 1]; non-finite channels collapse to a bound.
pub fn clamp_color(color: Color) -> Color {
    color.map(|c| c.max(0.0).min(1.0))
}
