//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Sorry, the page you visited does not exist."</p>
            <a class="button button--primary" href="/">"Back home"</a>
        </div>
    }
}
