//! Create-mistake page.

use leptos::prelude::*;

use crate::components::question_form::QuestionForm;

#[component]
pub fn QuestionCreatePage() -> impl IntoView {
    view! {
        <div class="question-create-page">
            <header class="page__header">
                <h2 class="page__title">"New mistake"</h2>
                <nav class="breadcrumb">
                    <a href="/">"Home"</a>
                    " / "
                    <a href="/questions">"Mistakes"</a>
                    " / "
                    <span>"New"</span>
                </nav>
            </header>
            <QuestionForm/>
        </div>
    }
}
