//! Route guards wrapping protected and guest-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decisions come from `gradnote::guard`; these components only wire them to
//! the session signal, the router and the recovery fetch. Each protected
//! route instance owns one `ProtectedGuard`, so a failed recovery redirects
//! instead of fetching again.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use gradnote::AuthState;
use gradnote::guard::{GuardDecision, GuestDecision, ProtectedGuard, guest_decision};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::has_stored_token;

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Text shown while the guard is not rendering its children.
fn placeholder_text(decision: GuardDecision) -> &'static str {
    match decision {
        GuardDecision::Redirect(_) => "Redirecting to login...",
        _ => "Loading...",
    }
}

/// Render `children` only for an authenticated session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let guard = StoredValue::new(ProtectedGuard::default());
    let recheck = Trigger::new();
    let decision = RwSignal::new(GuardDecision::Placeholder);
    let navigate = use_navigate();

    Effect::new(move || {
        recheck.track();
        let state = auth.get();
        let mut next = GuardDecision::Placeholder;
        guard.update_value(|g| next = g.evaluate(&state, has_stored_token()));

        match next {
            GuardDecision::Recover => {
                guard.update_value(ProtectedGuard::begin_check);
                recover_session(auth, guard, recheck);
            }
            GuardDecision::Redirect(path) => navigate(path, replace()),
            GuardDecision::Placeholder | GuardDecision::Render => {}
        }
        decision.set(next);
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                view! {
                    <div class="route-placeholder">
                        <p>{move || placeholder_text(decision.get())}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// One current-user fetch for a token restored from storage.
fn recover_session(auth: RwSignal<AuthState>, guard: StoredValue<ProtectedGuard>, recheck: Trigger) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let client = crate::net::browser::api_client();
        let dispatch = crate::state::auth::SignalDispatch(auth);
        let _ = gradnote::session::fetch_current_user(&client, &dispatch).await;
        guard.update_value(ProtectedGuard::finish_check);
        recheck.notify();
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = auth;
        guard.update_value(ProtectedGuard::finish_check);
        recheck.notify();
    }
}

/// Render `children` only when nobody is logged in; otherwise go home.
#[component]
pub fn GuestRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuestDecision::Redirect(path) = guest_decision(&auth.get()) {
            navigate(path, replace());
        }
    });

    view! {
        <Show when=move || guest_decision(&auth.get()) == GuestDecision::Render>
            {children()}
        </Show>
    }
}
