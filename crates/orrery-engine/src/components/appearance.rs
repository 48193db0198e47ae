use serde::{Deserialize, Serialize};

/// RGB color in linear [0, 1] space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl BodyColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

impl Default for BodyColor {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

/// How a body is drawn. `radius` doubles as the pick sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub radius: f32,
    #[serde(default)]
    pub color: BodyColor,
    /// HDR glow multiplier (default: 0.0).
    #[serde(default)]
    pub emissive: f32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            radius: 1.0,
            color: BodyColor::default(),
            emissive: 0.0,
        }
    }
}

impl Appearance {
    pub fn new(radius: f32, color: BodyColor) -> Self {
        Self {
            radius,
            color,
            ..Default::default()
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}
