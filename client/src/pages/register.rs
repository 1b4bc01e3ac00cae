//! Account registration page.

use gradnote::forms::RegisterInput;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::ui::UiState;

pub const REGISTER_SUCCEEDED: &str = "Registration succeeded, please sign in.";
pub const REGISTER_FAILED: &str = "Registration failed, please try again.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = RegisterInput {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        if let Err(invalid) = gradnote::forms::validate_register_input(&input) {
            message.set(Some(invalid.to_owned()));
            return;
        }
        message.set(None);
        busy.set(true);

        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let client = crate::net::browser::api_client();
            match gradnote::forms::register_account(&client, &input).await {
                Ok(_) => {
                    crate::components::notice::notify_success(ui, REGISTER_SUCCEEDED);
                    navigate(gradnote::LOGIN_ROUTE, NavigateOptions::default());
                }
                Err(e) => {
                    let text = match e {
                        gradnote::forms::SubmitError::Invalid(m) => m.to_owned(),
                        gradnote::forms::SubmitError::Api(api) => api.user_message(REGISTER_FAILED),
                    };
                    message.set(Some(text));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (input, navigate, ui);
            busy.set(false);
        }
    };

    let field = move |kind: &'static str, placeholder: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"GradNote"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    {field("text", "Username", "username", username)}
                    {field("email", "you@example.com", "email", email)}
                    {field("password", "Password", "new-password", password)}
                    {field("password", "Confirm password", "new-password", confirm)}
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                {move || message.get().map(|text| view! { <p class="auth-message auth-message--error">{text}</p> })}
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
