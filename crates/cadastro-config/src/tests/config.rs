use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.ui.width, eq(crate::DEFAULT_UI_WIDTH));
    assert_that!(config.ui.compact_below, eq(crate::DEFAULT_UI_COMPACT_BELOW));
    assert_eq!(*config.logging.level, LevelFilter::Info);
    assert_eq!(config.logging.file, None);
    assert!(config.logging.colored);
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested");
    let _dir = EnvGuard::set("CADASTRO_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        temp.path(),
        r#"
            [logging]
            level = "debug"
            file = "cadastro.log"
            colored = false

            [ui]
            width = 40
            compact_below = 50
        "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(*config.logging.level, LevelFilter::Debug);
    assert_eq!(config.logging.file.as_deref(), Some("cadastro.log"));
    assert!(!config.logging.colored);
    assert_that!(config.ui.width, eq(40_u16));
    assert!(config.ui.is_compact(config.ui.width));
}

#[test]
#[serial]
fn given_toml_and_env_when_load_then_env_wins() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        temp.path(),
        r#"
            [ui]
            width = 100
        "#,
    );
    let _width = EnvGuard::set("CADASTRO_UI_WIDTH", "120");
    let _level = EnvGuard::set("CADASTRO_LOG_LEVEL", "warn");
    let _colored = EnvGuard::set("CADASTRO_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.ui.width, eq(120_u16));
    assert_eq!(*config.logging.level, LevelFilter::Warn);
    assert!(!config.logging.colored);
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_inside_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("CADASTRO_LOG_FILE", "app.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_eq!(path, Some(temp.path().join("log").join("app.log")));
}

#[test]
#[serial]
fn given_no_log_file_when_log_file_path_then_none() {
    let _temp = setup_config_dir();

    let config = Config::load().unwrap();

    assert_eq!(config.log_file_path().unwrap(), None);
}
