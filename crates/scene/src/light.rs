use foundation::math::{Vec3, srgb_hex_to_linear};
use serde::Deserialize;

/// Uniform fill light.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbientLight {
    /// Packed `0xRRGGBB` sRGB colour.
    pub color: u32,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: u32, intensity: f32) -> Self {
        Self { color, intensity }
    }

    pub fn radiance(&self) -> [f32; 3] {
        scaled(self.color, self.intensity)
    }
}

/// The single shaped light that gives the emblem its highlights.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AccentLight {
    /// Parallel rays coming from `position` towards the origin.
    Directional {
        color: u32,
        intensity: f32,
        position: [f64; 3],
    },
    /// Omni light located at `position`.
    Point {
        color: u32,
        intensity: f32,
        position: [f64; 3],
    },
}

impl AccentLight {
    pub fn radiance(&self) -> [f32; 3] {
        match *self {
            AccentLight::Directional {
                color, intensity, ..
            }
            | AccentLight::Point {
                color, intensity, ..
            } => scaled(color, intensity),
        }
    }

    pub fn position(&self) -> Vec3 {
        match *self {
            AccentLight::Directional { position, .. } | AccentLight::Point { position, .. } => {
                Vec3::new(position[0], position[1], position[2])
            }
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, AccentLight::Point { .. })
    }
}

fn scaled(color: u32, intensity: f32) -> [f32; 3] {
    let [r, g, b] = srgb_hex_to_linear(color);
    [r * intensity, g * intensity, b * intensity]
}
