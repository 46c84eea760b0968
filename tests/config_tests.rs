// Host-side tests for URL query overrides of the scene configuration.

use showcase_core::constants::{DEFAULT_MAP_B_DIR, DEFAULT_MODEL_URL};
use showcase_core::{
    BreathingShape, ConfigError, SceneConfig, SceneMode, TextureLoading, TransitionStrategy,
};

#[test]
fn empty_query_gives_defaults() {
    let (cfg, errors) = SceneConfig::from_query("");
    assert!(errors.is_empty());
    assert_eq!(cfg, SceneConfig::default());
    assert_eq!(cfg.mode, SceneMode::Tour);
    assert!(matches!(cfg.transition, TransitionStrategy::Fade(_)));
    assert_eq!(cfg.texture_loading, TextureLoading::Preload);
    assert_eq!(cfg.hotspots.len(), 2);
}

#[test]
fn every_key_can_be_overridden() {
    let (cfg, errors) = SceneConfig::from_query(
        "?mode=showcase&transition=zoom&textures=lazy&breathing=sine&model=./m.glb&map1=./a&map2=./b",
    );
    assert!(errors.is_empty());
    assert_eq!(cfg.mode, SceneMode::Showcase);
    assert!(matches!(cfg.transition, TransitionStrategy::Zoom(_)));
    assert_eq!(cfg.texture_loading, TextureLoading::Lazy);
    assert_eq!(cfg.breathing, BreathingShape::Sine);
    assert_eq!(cfg.model_url, "./m.glb");
    assert_eq!(cfg.map_a_dir, "./a");
    assert_eq!(cfg.map_b_dir, "./b");
}

#[test]
fn model_is_an_alias_for_showcase() {
    let (cfg, _) = SceneConfig::from_query("mode=model");
    assert_eq!(cfg.mode, SceneMode::Showcase);
}

#[test]
fn bad_values_keep_defaults_and_report() {
    let (cfg, errors) = SceneConfig::from_query("?mode=vr&transition=wipe&map2=&model=");
    assert_eq!(cfg.mode, SceneMode::Tour);
    assert!(matches!(cfg.transition, TransitionStrategy::Fade(_)));
    assert_eq!(cfg.map_b_dir, DEFAULT_MAP_B_DIR);
    assert_eq!(cfg.model_url, DEFAULT_MODEL_URL);
    assert_eq!(errors.len(), 4);
    assert_eq!(
        errors[0],
        ConfigError::InvalidValue {
            key: "mode".to_string(),
            value: "vr".to_string()
        }
    );
}

#[test]
fn unknown_keys_and_stray_separators_are_ignored() {
    let (cfg, errors) = SceneConfig::from_query("?&utm_source=x&&flag&transition=zoom");
    assert!(errors.is_empty());
    assert!(matches!(cfg.transition, TransitionStrategy::Zoom(_)));
}

#[test]
fn apply_reports_the_offending_pair() {
    let mut cfg = SceneConfig::default();
    let err = cfg.apply("textures", "sometimes").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown value 'sometimes' for 'textures'"
    );
    assert!(cfg.apply("breathing", "triangle").is_ok());
}
