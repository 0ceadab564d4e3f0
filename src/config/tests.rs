//! Configuration tests
//!
//! The template written on first run must parse back into the same config;
//! when a field is added, these fail until serialization and `from_file`
//! both know about it.

use super::*;

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let restored = Config::from_file_config(parsed.unwrap());
    assert_eq!(restored.theme, config.theme);
    assert_eq!(restored.use_theme_background, config.use_theme_background);
    assert_eq!(restored.motion, config.motion);
    assert_eq!(restored.assets, config.assets);
    assert_eq!(restored.logging, config.logging);
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.theme = "Daizy Mono".to_string();
    config.use_theme_background = false;
    config.motion.trail_length = 12;
    config.motion.reveal_threshold = 0.5;
    config.motion.auto_close_ms = 1500;
    config.assets.fetch = false;
    config.assets.background_fallback = None;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let restored = Config::from_file_config(
        Config::parse_file_config(&config.to_toml()).expect("customized config should parse"),
    );

    assert_eq!(restored.theme, "Daizy Mono");
    assert!(!restored.use_theme_background);
    assert_eq!(restored.motion, config.motion);
    assert_eq!(restored.assets, config.assets);
    assert_eq!(restored.logging, config.logging);
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_file_config(Config::parse_file_config("").unwrap());
    assert_eq!(config.theme, DEFAULT_THEME);
    assert_eq!(config.motion, MotionConfig::default());
    assert_eq!(config.assets, AssetsConfig::default());
    assert!(!config.demo_mode);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let file = Config::parse_file_config(
        r#"
[motion]
trail_length = 4

[assets]
fetch = false
"#,
    )
    .unwrap();
    let config = Config::from_file_config(file);

    assert_eq!(config.motion.trail_length, 4);
    assert_eq!(config.motion.auto_close_ms, 3000);
    assert!(!config.assets.fetch);
    assert_eq!(config.assets.timeout_secs, 10);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_motion_values_are_clamped() {
    let motion = MotionConfig::from_file(Some(FileMotion {
        trail_length: Some(0),
        reveal_threshold: Some(3.0),
        px_per_row: Some(0.0),
        parallax_max_px: Some(-10.0),
        frame_ms: Some(1),
        ..FileMotion::default()
    }));

    assert_eq!(motion.trail_length, 1);
    assert_eq!(motion.reveal_threshold, 1.0);
    assert_eq!(motion.px_per_row, 1.0);
    assert_eq!(motion.parallax_max_px, 0.0);
    assert_eq!(motion.frame_ms, 8);
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(Config::parse_file_config("theme = Daizy Dark").is_err());
    assert!(Config::parse_file_config("[motion]\ntrail_length = \"eight\"").is_err());
}
