use scene::{ViewerConfig, ViewerOverride, ViewerPreset};
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` element holding
/// page configuration.
pub const CONFIG_ELEMENT_ID: &str = "asc-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Page wiring: which elements to use and how the viewer behaves.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub container_id: String,
    pub loader_id: String,
    pub permit_input_id: String,
    pub permit_result_id: String,
    pub suggestion_form_id: String,
    pub verify_endpoint: String,
    /// Defer viewer start-up until the container scrolls into view.
    pub lazy: bool,
    /// Fraction of the container that must be visible to activate.
    pub visibility_threshold: f64,
    pub resize_debounce_ms: u32,
    pub viewer_preset: ViewerPreset,
    /// Per-page viewer tweaks; unspecified fields come from `viewer_preset`.
    pub viewer: Option<ViewerOverride>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            container_id: "canvas-container".to_string(),
            loader_id: "three-loader".to_string(),
            permit_input_id: "ilp_search".to_string(),
            permit_result_id: "ilp-result".to_string(),
            suggestion_form_id: "suggestionForm".to_string(),
            verify_endpoint: permit::DEFAULT_ENDPOINT.to_string(),
            lazy: true,
            visibility_threshold: 0.1,
            resize_debounce_ms: runtime::DEFAULT_DEBOUNCE_MS,
            viewer_preset: ViewerPreset::Heritage,
            viewer: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses page-supplied configuration, keeping defaults when it is absent
    /// or malformed.
    pub fn from_page_text(text: Option<&str>) -> Self {
        let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(text) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    pub fn viewer_config(&self) -> ViewerConfig {
        let preset = self.viewer_preset.config();
        match &self.viewer {
            Some(tweak) => tweak.apply(preset),
            None => preset,
        }
    }
}
