//! Email + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gradnote::AuthState;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SignalDispatch;

/// Inline message: local validation first, then the session's last error.
fn form_message(local: Option<&str>, state: &AuthState) -> Option<String> {
    local.map(str::to_owned).or_else(|| state.error.clone())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();

    // A stale error from an earlier attempt does not belong on a fresh form.
    gradnote::session::clear_error(&SignalDispatch(auth));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let (email_value, password_value) =
            match gradnote::forms::validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    local_error.set(Some(message));
                    return;
                }
            };
        local_error.set(None);

        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let client = crate::net::browser::api_client();
            let dispatch = SignalDispatch(auth);
            if gradnote::session::login(&client, &dispatch, &email_value, &password_value)
                .await
                .is_ok()
            {
                navigate(gradnote::HOME_ROUTE, NavigateOptions::default());
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value, navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"GradNote"</h1>
                <p class="auth-card__subtitle">"Sign in to your mistake notebook"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" type="submit" disabled=move || auth.get().loading>
                        {move || if auth.get().loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                {move || {
                    form_message(local_error.get(), &auth.get())
                        .map(|message| view! { <p class="auth-message auth-message--error">{message}</p> })
                }}
                <p class="auth-card__footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
