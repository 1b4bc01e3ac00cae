use super::*;

#[test]
fn placeholder_text_distinguishes_redirects() {
    assert_eq!(placeholder_text(GuardDecision::Redirect("/login")), "Redirecting to login...");
    assert_eq!(placeholder_text(GuardDecision::Placeholder), "Loading...");
    assert_eq!(placeholder_text(GuardDecision::Recover), "Loading...");
}

#[test]
fn guard_redirects_replace_history() {
    assert!(replace().replace);
}
