//! Mistake submission form with "type it" and "from a photo" tabs.
//!
//! The image tab runs OCR through `ImageUploader`; the recognized text lands
//! in the shared content field and the stored image URL rides along with the
//! next submit. Both tabs submit through `forms::submit_question`, which
//! refuses blank content before any request.

#[cfg(test)]
#[path = "question_form_test.rs"]
mod question_form_test;

use gradnote::forms::SubmitError;
use gradnote::types::ImageProcessResult;
use leptos::prelude::*;

use crate::components::image_uploader::ImageUploader;
#[cfg(feature = "csr")]
use crate::components::notice::{notify_error, notify_success};
use crate::state::ui::UiState;

pub const SUBMIT_FAILED: &str = "Submit failed, please try again.";
pub const SUBMIT_SUCCEEDED: &str = "Mistake saved.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormTab {
    #[default]
    Text,
    Image,
}

impl FormTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Type it in",
            Self::Image => "Upload a photo",
        }
    }

    /// Label above the content field; on the image tab it holds OCR output.
    pub fn content_label(self) -> &'static str {
        match self {
            Self::Text => "Question",
            Self::Image => "Recognized text",
        }
    }
}

/// Inline message for a failed submit.
pub fn submit_error_message(error: &SubmitError) -> String {
    match error {
        SubmitError::Invalid(message) => (*message).to_owned(),
        SubmitError::Api(api) => api.user_message(SUBMIT_FAILED),
    }
}

#[component]
pub fn QuestionForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let tab = RwSignal::new(FormTab::default());
    let content = RwSignal::new(String::new());
    let remarks = RwSignal::new(String::new());
    let image_url = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_uploaded = Callback::new(move |result: ImageProcessResult| {
        content.set(result.text);
        image_url.set(Some(result.image_url).filter(|url| !url.is_empty()));
        error.set(None);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        // Blank content fails here, before the task and its request exist.
        if let Err(message) = gradnote::forms::build_question_draft(&content.get_untracked(), "", None) {
            error.set(Some(message.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let client = crate::net::browser::api_client();
            let result = gradnote::forms::submit_question(
                &client,
                &content.get_untracked(),
                &remarks.get_untracked(),
                image_url.get_untracked().as_deref(),
            )
            .await;
            match result {
                Ok(_) => {
                    content.set(String::new());
                    remarks.set(String::new());
                    image_url.set(None);
                    notify_success(ui, SUBMIT_SUCCEEDED);
                }
                Err(e) => {
                    let message = submit_error_message(&e);
                    notify_error(ui, message.clone());
                    error.set(Some(message));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ui, remarks, image_url);
            busy.set(false);
        }
    };

    let tab_button = move |which: FormTab| {
        view! {
            <button
                type="button"
                class="tabs__tab"
                class:tabs__tab--active=move || tab.get() == which
                on:click=move |_| tab.set(which)
            >
                {which.label()}
            </button>
        }
    };

    view! {
        <section class="card question-form">
            <h2 class="card__title">"Submit a mistake"</h2>
            <div class="tabs">{tab_button(FormTab::Text)} {tab_button(FormTab::Image)}</div>
            <Show when=move || tab.get() == FormTab::Image>
                <ImageUploader on_uploaded=on_uploaded/>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    {move || tab.get().content_label()}
                    <textarea
                        class="form__textarea"
                        rows="6"
                        placeholder="Enter the question..."
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__label">
                    "Remarks"
                    <textarea
                        class="form__textarea"
                        rows="4"
                        placeholder="Optional: notes, why it went wrong..."
                        prop:value=move || remarks.get()
                        on:input=move |ev| remarks.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || image_url.get().is_some()>
                    <p class="form__hint">"The uploaded image will be attached."</p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit" }}
                </button>
            </form>
        </section>
    }
}
