//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use spin3d::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SPIN_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("SPIN_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_spin_period() {
    std::env::set_var("SPIN_SPIN__PERIOD_SECS", "4.0");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.spin.period_secs, 4.0);
    std::env::remove_var("SPIN_SPIN__PERIOD_SECS");
}

#[test]
#[serial]
fn test_default_file_loading() {
    // Remove env vars to test file-based config
    std::env::remove_var("SPIN_WINDOW__TITLE");
    std::env::remove_var("SPIN_SPIN__PERIOD_SECS");

    let config = AppConfig::load().unwrap();

    // Values from config/default.toml
    assert_eq!(config.spin.axis, [2.0, 1.0, 0.0]);
    assert_eq!(config.spin.period_secs, 8.0);
    assert!(config.spin.to_spin().is_ok());
}

#[test]
#[serial]
fn test_missing_config_dir_uses_env_and_defaults() {
    std::env::remove_var("SPIN_WINDOW__TITLE");

    // No files in the directory: everything comes from serde defaults
    let config = AppConfig::load_from("does-not-exist").unwrap();
    assert_eq!(config.window.width, 1280);
}
