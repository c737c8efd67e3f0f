//! NETINV_* overrides are validated like config file values.
//!
//! Single test: it mutates process environment variables.

use netinv::application::ApplicationError;
use netinv::config::Settings;

#[test]
fn given_color_env_override_when_loading_then_invalid_values_are_errors() {
    std::env::set_var("NETINV_COLOR", "maybe");
    let err = Settings::load_from(None).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));

    std::env::set_var("NETINV_COLOR", "false");
    let settings = Settings::load_from(None).expect("valid override");
    assert!(!settings.color);

    std::env::remove_var("NETINV_COLOR");
    let settings = Settings::load_from(None).expect("no override");
    assert!(settings.color);
}
