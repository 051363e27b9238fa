use serde::{Deserialize, Serialize};

/// Rec. 601 luma weights used by the grayscale fragment stage.
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    /// Build a color from 4 0..255 components
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color::new(
            r as f32 / 255.,
            g as f32 / 255.,
            b as f32 / 255.,
            a as f32 / 255.,
        )
    }

    /// Build a color from a hexadecimal u32
    /// Example: 0x3CA7D5 - a light blue
    pub fn from_hex(hex: u32) -> Color {
        let bytes: [u8; 4] = hex.to_be_bytes();

        Self::from_rgba(bytes[1], bytes[2], bytes[3], 255)
    }

    /// Quantize to 0..255 components, clamping out-of-range channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0., 1.) * 255. + 0.5) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Weighted channel sum, `dot(rgb, LUMA_WEIGHTS)`.
    pub fn luminance(&self) -> f32 {
        self.r * LUMA_WEIGHTS[0] + self.g * LUMA_WEIGHTS[1] + self.b * LUMA_WEIGHTS[2]
    }

    /// Luminance replicated over rgb, alpha untouched.
    pub fn grayscale(&self) -> Color {
        let gray = self.luminance();
        Color::new(gray, gray, gray, self.a)
    }

    /// Horizontal red-to-blue ramp at texture coordinate `x`.
    pub fn gradient(x: f32) -> Color {
        Color::new(x, 0., 1. - x, 1.)
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

pub mod colors {
    //! Constants for some common colors.
    use super::Color;

    pub const WHITE: Color = Color::new(1.00, 1.00, 1.00, 1.00);
    pub const BLACK: Color = Color::new(0.00, 0.00, 0.00, 1.00);
    pub const RED: Color = Color::new(1.00, 0.00, 0.00, 1.00);
    pub const BLUE: Color = Color::new(0.00, 0.00, 1.00, 1.00);
    pub const BLANK: Color = Color::new(0.00, 0.00, 0.00, 0.00);
}
