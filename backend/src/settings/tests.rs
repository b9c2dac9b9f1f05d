//! Unit tests for environment parsing.

use super::*;
use mockable::MockEnv;
use rstest::{fixture, rstest};
use std::collections::HashMap;

fn mock_env(vars: HashMap<&'static str, &'static str>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).map(|value| (*value).to_owned()));
    env
}

#[fixture]
fn required_vars() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        (DATABASE_URL_ENV, "postgres://food:pw@localhost/food"),
        (API_KEY_ENV, "s3cret"),
    ])
}

#[rstest]
fn defaults_apply_to_optional_settings(required_vars: HashMap<&'static str, &'static str>) {
    let settings = AppSettings::from_env(&mock_env(required_vars)).expect("valid settings");

    assert_eq!(settings.database_url, "postgres://food:pw@localhost/food");
    assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR.parse().expect("default parses"));
    assert_eq!(settings.pool_max_size, DEFAULT_MAX_SIZE);
}

#[rstest]
#[case(DATABASE_URL_ENV)]
#[case(API_KEY_ENV)]
fn missing_required_variable_is_fatal(
    mut required_vars: HashMap<&'static str, &'static str>,
    #[case] name: &'static str,
) {
    required_vars.remove(name);
    let err = AppSettings::from_env(&mock_env(required_vars)).expect_err("must fail");
    assert_eq!(err, SettingsError::MissingEnv { name });
}

#[rstest]
#[case(DATABASE_URL_ENV)]
#[case(API_KEY_ENV)]
fn blank_required_variable_is_fatal(
    mut required_vars: HashMap<&'static str, &'static str>,
    #[case] name: &'static str,
) {
    required_vars.insert(name, "   ");
    let err = AppSettings::from_env(&mock_env(required_vars)).expect_err("must fail");
    assert_eq!(err, SettingsError::MissingEnv { name });
}

#[rstest]
fn bind_addr_override_is_parsed(mut required_vars: HashMap<&'static str, &'static str>) {
    required_vars.insert(BIND_ADDR_ENV, "127.0.0.1:9090");
    let settings = AppSettings::from_env(&mock_env(required_vars)).expect("valid settings");
    assert_eq!(settings.bind_addr.port(), 9090);
}

#[rstest]
fn invalid_bind_addr_is_rejected(mut required_vars: HashMap<&'static str, &'static str>) {
    required_vars.insert(BIND_ADDR_ENV, "localhost");
    let err = AppSettings::from_env(&mock_env(required_vars)).expect_err("must fail");
    assert!(matches!(
        err,
        SettingsError::InvalidEnv {
            name: BIND_ADDR_ENV,
            ..
        }
    ));
}

#[rstest]
#[case("0")]
#[case("-3")]
#[case("ten")]
fn invalid_pool_size_is_rejected(
    mut required_vars: HashMap<&'static str, &'static str>,
    #[case] value: &'static str,
) {
    required_vars.insert(POOL_MAX_SIZE_ENV, value);
    let err = AppSettings::from_env(&mock_env(required_vars)).expect_err("must fail");
    assert_eq!(
        err,
        SettingsError::InvalidEnv {
            name: POOL_MAX_SIZE_ENV,
            value: value.to_owned(),
            expected: POOL_MAX_SIZE_EXPECTED,
        }
    );
}

#[rstest]
fn pool_size_override_is_parsed(mut required_vars: HashMap<&'static str, &'static str>) {
    required_vars.insert(POOL_MAX_SIZE_ENV, "25");
    let settings = AppSettings::from_env(&mock_env(required_vars)).expect("valid settings");
    assert_eq!(settings.pool_max_size, 25);
}

#[rstest]
fn debug_output_hides_secrets(required_vars: HashMap<&'static str, &'static str>) {
    let settings = AppSettings::from_env(&mock_env(required_vars)).expect("valid settings");
    let rendered = format!("{settings:?}");
    assert!(!rendered.contains("s3cret"));
    assert!(!rendered.contains("pw@"));
}

#[rstest]
fn process_environment_reader_is_constructible() {
    let env = mockable::DefaultEnv::new();
    assert!(env.string("FOOD_CATALOGUE_TEST_NEVER_SET").is_none());
}
