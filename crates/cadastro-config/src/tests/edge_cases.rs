use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(temp.path(), "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_unknown_level_in_toml_when_load_then_falls_back_to_info() {
    let (temp, _guard) = setup_config_dir();
    write_config(
        temp.path(),
        r#"
            [logging]
            level = "chatty"
        "#,
    );

    let config = Config::load().unwrap();

    assert_eq!(*config.logging.level, LevelFilter::Info);
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_default() {
    let _temp = setup_config_dir();
    let _width = EnvGuard::set("CADASTRO_UI_WIDTH", "wide");

    let config = Config::load().unwrap();

    assert_that!(config.ui.width, eq(crate::DEFAULT_UI_WIDTH));
}

#[test]
#[serial]
fn given_wrong_type_in_toml_when_load_then_error() {
    let (temp, _guard) = setup_config_dir();
    write_config(
        temp.path(),
        r#"
            [ui]
            width = "eighty"
        "#,
    );

    assert_that!(Config::load(), err(anything()));
}
