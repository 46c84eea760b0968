//! Scene configuration: defaults come from `constants.rs`, and the page URL
//! query (`?mode=tour&transition=zoom`) can override a few choices.

use crate::breathing::BreathingShape;
use crate::constants::*;
use crate::error::ConfigError;
use crate::transition::{FadeConfig, TransitionStrategy, ZoomConfig};
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SceneMode {
    /// Two cubemaps, teleport ring and decoy sphere.
    #[default]
    Tour,
    /// A glTF model with hotspot markers that open modals.
    Showcase,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureLoading {
    /// Both cubemap sets load before the first frame.
    #[default]
    Preload,
    /// The second set loads in the background after the first frame.
    Lazy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HotspotSpec {
    /// Offset from the model's bounds centre in units of its bounding radius.
    pub anchor: Vec3,
    pub size: f32,
    pub modal_selector: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub mode: SceneMode,
    pub transition: TransitionStrategy,
    pub texture_loading: TextureLoading,
    pub breathing: BreathingShape,
    pub model_url: String,
    pub map_a_dir: String,
    pub map_b_dir: String,
    pub hotspots: Vec<HotspotSpec>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            mode: SceneMode::Tour,
            transition: TransitionStrategy::Fade(FadeConfig::default()),
            texture_loading: TextureLoading::Preload,
            breathing: BreathingShape::Triangle,
            model_url: DEFAULT_MODEL_URL.to_string(),
            map_a_dir: DEFAULT_MAP_A_DIR.to_string(),
            map_b_dir: DEFAULT_MAP_B_DIR.to_string(),
            hotspots: vec![
                HotspotSpec {
                    anchor: Vec3::new(0.35, 0.45, 0.2),
                    size: HOTSPOT_SIZE,
                    modal_selector: DEFAULT_MODAL_SELECTOR.to_string(),
                },
                HotspotSpec {
                    anchor: Vec3::new(-0.4, -0.1, 0.3),
                    size: HOTSPOT_SIZE,
                    modal_selector: DEFAULT_MODAL_SELECTOR.to_string(),
                },
            ],
        }
    }
}

impl SceneConfig {
    /// Apply one `key=value` override. Unknown keys are ignored.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "mode" => {
                self.mode = match value {
                    "tour" => SceneMode::Tour,
                    "showcase" | "model" => SceneMode::Showcase,
                    _ => return Err(invalid()),
                }
            }
            "transition" => {
                self.transition = match value {
                    "fade" => TransitionStrategy::Fade(FadeConfig::default()),
                    "zoom" => TransitionStrategy::Zoom(ZoomConfig::default()),
                    _ => return Err(invalid()),
                }
            }
            "textures" => {
                self.texture_loading = match value {
                    "preload" => TextureLoading::Preload,
                    "lazy" => TextureLoading::Lazy,
                    _ => return Err(invalid()),
                }
            }
            "breathing" => {
                self.breathing = match value {
                    "triangle" => BreathingShape::Triangle,
                    "sine" => BreathingShape::Sine,
                    _ => return Err(invalid()),
                }
            }
            "model" if !value.is_empty() => self.model_url = value.to_string(),
            "map1" if !value.is_empty() => self.map_a_dir = value.to_string(),
            "map2" if !value.is_empty() => self.map_b_dir = value.to_string(),
            "model" | "map1" | "map2" => return Err(invalid()),
            _ => {}
        }
        Ok(())
    }

    /// Build from a `location.search` string (leading `?` optional).
    /// Bad values are collected and the defaults kept for those keys.
    pub fn from_query(query: &str) -> (Self, Vec<ConfigError>) {
        let mut cfg = Self::default();
        let mut errors = Vec::new();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            if let Err(e) = cfg.apply(k.trim(), v.trim()) {
                errors.push(e);
            }
        }
        (cfg, errors)
    }
}
