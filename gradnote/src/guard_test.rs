use super::*;
use crate::session::AuthAction;
use crate::types::User;

fn authenticated() -> AuthState {
    AuthState::default().reduce(AuthAction::LoginFulfilled {
        token: "t".to_owned(),
        user: Some(User { id: 1, username: "li".to_owned(), email: None, created_at: None }),
    })
}

fn loading() -> AuthState {
    AuthState { loading: true, ..AuthState::default() }
}

// =============================================================
// Protected guard
// =============================================================

#[test]
fn authenticated_session_renders() {
    let mut guard = ProtectedGuard::default();
    assert_eq!(guard.evaluate(&authenticated(), true), GuardDecision::Render);
    assert_eq!(guard.phase(), GuardPhase::Resolved);
}

#[test]
fn loading_shows_placeholder() {
    let mut guard = ProtectedGuard::default();
    assert_eq!(guard.evaluate(&loading(), true), GuardDecision::Placeholder);
    assert_eq!(guard.phase(), GuardPhase::Unknown);
}

#[test]
fn no_stored_token_redirects_without_fetching() {
    let mut guard = ProtectedGuard::default();
    assert_eq!(guard.evaluate(&AuthState::default(), false), GuardDecision::Redirect("/login"));
}

#[test]
fn stored_token_recovers_exactly_once() {
    let mut guard = ProtectedGuard::default();
    let idle = AuthState::restore(Some("saved".to_owned()));

    assert_eq!(guard.evaluate(&idle, true), GuardDecision::Recover);
    guard.begin_check();
    // Re-renders before the fetch reports pending must not fetch again.
    assert_eq!(guard.evaluate(&idle, true), GuardDecision::Placeholder);
    assert_eq!(guard.evaluate(&loading(), true), GuardDecision::Placeholder);

    // The fetch failed.
    guard.finish_check();
    let failed = idle.reduce(AuthAction::FetchUserRejected("expired".to_owned()));
    assert_eq!(guard.evaluate(&failed, true), GuardDecision::Redirect("/login"));
    assert_eq!(guard.evaluate(&failed, true), GuardDecision::Redirect("/login"));
}

#[test]
fn successful_recovery_renders() {
    let mut guard = ProtectedGuard::default();
    assert_eq!(guard.evaluate(&AuthState::restore(Some("s".to_owned())), true), GuardDecision::Recover);
    guard.begin_check();
    guard.finish_check();
    assert_eq!(guard.evaluate(&authenticated(), true), GuardDecision::Render);
}

#[test]
fn logout_after_render_redirects() {
    let mut guard = ProtectedGuard::default();
    assert_eq!(guard.evaluate(&authenticated(), true), GuardDecision::Render);
    let logged_out = authenticated().reduce(AuthAction::LogoutFulfilled);
    assert_eq!(guard.evaluate(&logged_out, false), GuardDecision::Redirect("/login"));
}

#[test]
fn begin_check_is_ignored_once_resolved() {
    let mut guard = ProtectedGuard::default();
    guard.finish_check();
    guard.begin_check();
    assert_eq!(guard.phase(), GuardPhase::Resolved);
}

// =============================================================
// Guest guard
// =============================================================

#[test]
fn guest_guard_redirects_authenticated_home() {
    assert_eq!(guest_decision(&authenticated()), GuestDecision::Redirect("/"));
}

#[test]
fn guest_guard_renders_for_anonymous() {
    assert_eq!(guest_decision(&AuthState::default()), GuestDecision::Render);
    assert_eq!(guest_decision(&loading()), GuestDecision::Render);
}
