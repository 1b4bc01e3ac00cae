use super::*;

#[test]
fn local_validation_wins_over_session_error() {
    let state = AuthState { error: Some("用户名或密码错误".to_owned()), ..AuthState::default() };
    assert_eq!(
        form_message(Some(gradnote::forms::PASSWORD_REQUIRED), &state),
        Some(gradnote::forms::PASSWORD_REQUIRED.to_owned())
    );
}

#[test]
fn session_error_is_shown_after_failed_login() {
    let state = AuthState { error: Some("用户名或密码错误".to_owned()), ..AuthState::default() };
    assert_eq!(form_message(None, &state), Some("用户名或密码错误".to_owned()));
}

#[test]
fn no_message_for_clean_form() {
    assert_eq!(form_message(None, &AuthState::default()), None);
}
