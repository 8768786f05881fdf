//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hypermorph::config::AppConfig;
use serial_test::serial;
use std::path::PathBuf;

fn config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config")
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HM_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load_from(config_dir()).unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("HM_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_number() {
    std::env::set_var("HM_ANIMATION__TRANSFORMATION_SPEED", "0.01");
    let config = AppConfig::load_from(config_dir()).unwrap();
    assert_eq!(config.animation.transformation_speed, 0.01);
    std::env::remove_var("HM_ANIMATION__TRANSFORMATION_SPEED");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("HM_WINDOW__TITLE");

    let config = AppConfig::load_from(config_dir()).unwrap();
    let builtin = AppConfig::default();
    assert_eq!(config.window.width, builtin.window.width);
    assert_eq!(config.window.height, builtin.window.height);
    assert_eq!(config.camera.eye, builtin.camera.eye);
    assert_eq!(config.animation.outer_size, builtin.animation.outer_size);
    assert_eq!(config.animation.rotation_speed, builtin.animation.rotation_speed);
    assert_eq!(config.rendering.line_color, builtin.rendering.line_color);
    assert!(config.animation.to_kernel_config().is_ok());
}

#[test]
#[serial]
fn test_missing_directory_falls_back_to_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.title, "Hypermorph");
    assert_eq!(config.debug.log_level, "info");
}
