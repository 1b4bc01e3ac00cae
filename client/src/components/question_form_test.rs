use super::*;
use gradnote::ApiError;
use gradnote::forms::CONTENT_REQUIRED;

#[test]
fn text_tab_is_default() {
    assert_eq!(FormTab::default(), FormTab::Text);
}

#[test]
fn tabs_have_distinct_labels() {
    assert_ne!(FormTab::Text.label(), FormTab::Image.label());
    assert_eq!(FormTab::Image.content_label(), "Recognized text");
}

#[test]
fn invalid_submit_shows_validation_message() {
    assert_eq!(submit_error_message(&SubmitError::Invalid(CONTENT_REQUIRED)), CONTENT_REQUIRED);
}

#[test]
fn api_failure_falls_back_to_generic_message() {
    let timeout = SubmitError::Api(ApiError::Network("request timed out after 10000 ms".to_owned()));
    assert_eq!(submit_error_message(&timeout), SUBMIT_FAILED);

    let rejected = SubmitError::Api(ApiError::Server { status: 422, message: Some("content too long".to_owned()) });
    assert_eq!(submit_error_message(&rejected), "content too long");
}
