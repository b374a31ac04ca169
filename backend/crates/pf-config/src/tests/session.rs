use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};
use serial_test::serial;
use uuid::Uuid;

// =========================================================================
// Session identity
// =========================================================================

#[test]
#[serial]
fn given_no_user_id_when_session_user_then_none() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _user = EnvGuard::remove("PF_AUTH_USER_ID");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.session_user(), none());
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_uuid_user_id_when_session_user_then_parsed() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let user_id = Uuid::new_v4();
    let _user = EnvGuard::set("PF_AUTH_USER_ID", &user_id.to_string());

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.session_user(), some(eq(user_id)));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_malformed_user_id_when_validate_then_error_mentions_field() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _user = EnvGuard::set("PF_AUTH_USER_ID", "not-a-uuid");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("auth.user_id"));
    assert_that!(config.auth.session_user(), none());
}
