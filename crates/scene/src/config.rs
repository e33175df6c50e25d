use serde::Deserialize;

use crate::camera::CameraConfig;
use crate::light::{AccentLight, AmbientLight};

/// Everything that differs between pages embedding the emblem viewer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    /// Relative URL of the GLB/glTF emblem asset.
    pub model_path: String,
    /// Uniform scale applied to the emblem once loaded.
    pub scale: f64,
    /// Yaw added every frame, in radians.
    pub rotation_speed: f64,
    pub ambient: AmbientLight,
    pub accent: AccentLight,
    /// Upper bound for the device pixel ratio used to size the surface.
    pub max_pixel_ratio: f64,
    pub camera: CameraConfig,
}

impl ViewerConfig {
    /// Landing page: gold point light, slightly larger emblem.
    pub fn heritage() -> Self {
        Self {
            model_path: "assests/models/asc_heritage.glb".to_string(),
            scale: 2.2,
            rotation_speed: 0.004,
            ambient: AmbientLight::new(0xffffff, 0.7),
            accent: AccentLight::Point {
                color: 0xc5a059,
                intensity: 1.0,
                position: [5.0, 5.0, 5.0],
            },
            max_pixel_ratio: 2.0,
            camera: CameraConfig::default(),
        }
    }

    /// Standalone scene page: neutral directional light.
    pub fn showcase() -> Self {
        Self {
            model_path: "assets/models/asc_heritage.glb".to_string(),
            scale: 2.0,
            rotation_speed: 0.005,
            ambient: AmbientLight::new(0xffffff, 0.8),
            accent: AccentLight::Directional {
                color: 0xffffff,
                intensity: 1.0,
                position: [5.0, 5.0, 5.0],
            },
            max_pixel_ratio: 2.0,
            camera: CameraConfig::default(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::heritage()
    }
}

/// Page-level adjustments layered over a preset. Absent fields keep the
/// preset's value.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerOverride {
    pub model_path: Option<String>,
    pub scale: Option<f64>,
    pub rotation_speed: Option<f64>,
    pub ambient: Option<AmbientLight>,
    pub accent: Option<AccentLight>,
    pub max_pixel_ratio: Option<f64>,
    pub camera: Option<CameraConfig>,
}

impl ViewerOverride {
    pub fn apply(&self, base: ViewerConfig) -> ViewerConfig {
        ViewerConfig {
            model_path: self.model_path.clone().unwrap_or(base.model_path),
            scale: self.scale.unwrap_or(base.scale),
            rotation_speed: self.rotation_speed.unwrap_or(base.rotation_speed),
            ambient: self.ambient.unwrap_or(base.ambient),
            accent: self.accent.unwrap_or(base.accent),
            max_pixel_ratio: self.max_pixel_ratio.unwrap_or(base.max_pixel_ratio),
            camera: self.camera.unwrap_or(base.camera),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerPreset {
    #[default]
    Heritage,
    Showcase,
}

impl ViewerPreset {
    pub fn config(self) -> ViewerConfig {
        match self {
            ViewerPreset::Heritage => ViewerConfig::heritage(),
            ViewerPreset::Showcase => ViewerConfig::showcase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewerConfig, ViewerOverride, ViewerPreset};
    use crate::light::AccentLight;
    use pretty_assertions::assert_eq;

    #[test]
    fn presets_differ_only_cosmetically() {
        let heritage = ViewerPreset::Heritage.config();
        let showcase = ViewerPreset::Showcase.config();
        assert_eq!(heritage.camera, showcase.camera);
        assert_eq!(heritage.max_pixel_ratio, 2.0);
        assert!(heritage.accent.is_point());
        assert!(!showcase.accent.is_point());
        for config in [&heritage, &showcase] {
            assert!((2.0..=2.2).contains(&config.scale));
            assert!((0.004..=0.005).contains(&config.rotation_speed));
        }
    }

    #[test]
    fn partial_json_overrides_heritage_defaults() {
        let config: ViewerConfig = serde_json::from_str(
            r#"{"modelPath":"models/emblem.glb","rotationSpeed":0.01,
                "accent":{"kind":"directional","color":16777215,"intensity":0.5,"position":[1,2,3]}}"#,
        )
        .expect("parse");
        assert_eq!(config.model_path, "models/emblem.glb");
        assert_eq!(config.rotation_speed, 0.01);
        assert_eq!(config.scale, 2.2);
        assert_eq!(
            config.accent,
            AccentLight::Directional {
                color: 0xffffff,
                intensity: 0.5,
                position: [1.0, 2.0, 3.0],
            }
        );
        assert_eq!(config.camera.fov_y_deg, 75.0);
    }

    #[test]
    fn override_fills_gaps_from_the_given_preset() {
        let tweak: ViewerOverride = serde_json::from_str(r#"{"scale":3.0}"#).expect("parse");
        let showcase = tweak.apply(ViewerConfig::showcase());
        assert_eq!(showcase.scale, 3.0);
        assert_eq!(showcase.rotation_speed, 0.005);
        assert_eq!(showcase.model_path, ViewerConfig::showcase().model_path);
        assert!(!showcase.accent.is_point());

        let heritage = tweak.apply(ViewerConfig::heritage());
        assert_eq!(heritage.rotation_speed, 0.004);
        assert!(heritage.accent.is_point());

        assert_eq!(
            ViewerOverride::default().apply(ViewerConfig::showcase()),
            ViewerConfig::showcase()
        );
    }

    #[test]
    fn preset_names_are_lowercase() {
        let preset: ViewerPreset = serde_json::from_str(r#""showcase""#).expect("parse");
        assert_eq!(preset, ViewerPreset::Showcase);
        assert_eq!(ViewerPreset::default(), ViewerPreset::Heritage);
    }
}
