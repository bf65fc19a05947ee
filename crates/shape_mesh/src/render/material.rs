//! Material system for rendering
//!
//! Physics visualization only needs flat-colored, lit surfaces, so the one
//! material type is a Phong material with a solid color and no textures.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Linear RGB color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
}

impl Color {
    /// Black
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// White
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Creates a color from float components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a `0xRRGGBB` value; higher bits are ignored
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Packs the color into `0xRRGGBB`, clamping each channel
    pub fn to_hex(self) -> u32 {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Components as a vector
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Phong-shaded material with a single solid color
#[derive(Debug, Clone, PartialEq)]
pub struct PhongMaterial {
    /// Diffuse color
    pub color: Color,

    /// Specular highlight color
    pub specular: Color,

    /// Specular exponent; higher is shinier
    pub shininess: f32,

    /// Self-illumination color
    pub emissive: Color,

    /// Optional name for debugging
    pub name: Option<String>,
}

impl PhongMaterial {
    /// Default specular color (`0x111111`)
    pub const DEFAULT_SPECULAR: u32 = 0x11_11_11;

    /// Default specular exponent
    pub const DEFAULT_SHININESS: f32 = 30.0;

    /// Create a material with the given diffuse color and default highlights
    pub fn new(color: Color) -> Self {
        Self {
            color,
            specular: Color::from_hex(Self::DEFAULT_SPECULAR),
            shininess: Self::DEFAULT_SHININESS,
            emissive: Color::BLACK,
            name: None,
        }
    }

    /// Set the specular color
    pub fn with_specular(mut self, specular: Color) -> Self {
        self.specular = specular;
        self
    }

    /// Set the specular exponent
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess.max(0.0);
        self
    }

    /// Set the emissive color
    pub fn with_emissive(mut self, emissive: Color) -> Self {
        self.emissive = emissive;
        self
    }

    /// Set the material name for debugging
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}
