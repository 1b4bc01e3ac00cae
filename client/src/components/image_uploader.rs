//! Image picker that validates locally and sends the image for OCR.
//!
//! DESIGN
//! ======
//! The browser reports a picked file's type and size before its bytes are
//! read, so oversized or non-image files are refused without reading or
//! uploading anything. Accepted files go through `forms::upload_image`, which
//! re-checks them before its single request.

#[cfg(test)]
#[path = "image_uploader_test.rs"]
mod image_uploader_test;

use gradnote::forms::validate_image;
use gradnote::types::ImageProcessResult;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::components::notice::{notify_error, notify_success};
use crate::state::ui::UiState;

pub const UPLOAD_FAILED: &str = "Image upload failed.";
pub const UPLOAD_SUCCEEDED: &str = "Image recognized.";

/// Label for the picker button.
fn picker_label(uploading: bool, has_image: bool) -> &'static str {
    match (uploading, has_image) {
        (true, _) => "Recognizing...",
        (false, true) => "Choose another image",
        (false, false) => "Upload image",
    }
}

/// Pre-read check on what the picker reports.
///
/// # Errors
///
/// The message to show when the file is refused.
pub fn precheck(content_type: &str, size: f64) -> Result<(), &'static str> {
    // `File.size` is a JS number; whole bytes within u64 range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = size.max(0.0) as u64;
    validate_image(content_type, size).map_err(gradnote::forms::UploadRejection::message)
}

#[component]
pub fn ImageUploader(on_uploaded: Callback<ImageProcessResult>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let uploading = RwSignal::new(false);
    let image_url = RwSignal::new(None::<String>);

    let on_change = move |ev: leptos::ev::Event| {
        if uploading.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            if let Err(message) = precheck(&file.type_(), file.size()) {
                notify_error(ui, message);
                return;
            }
            uploading.set(true);
            leptos::task::spawn_local(async move {
                let result = match crate::net::browser::read_file(&file).await {
                    Ok(upload) => {
                        let client = crate::net::browser::api_client();
                        gradnote::forms::upload_image(&client, upload)
                            .await
                            .map_err(|e| upload_error_message(&e))
                    }
                    Err(e) => {
                        log::warn!("{e}");
                        Err(UPLOAD_FAILED.to_owned())
                    }
                };
                match result {
                    Ok(processed) => {
                        image_url.set(Some(processed.image_url.clone()).filter(|url| !url.is_empty()));
                        notify_success(ui, UPLOAD_SUCCEEDED);
                        on_uploaded.run(processed);
                    }
                    Err(message) => notify_error(ui, message),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, ui, on_uploaded);
        }
    };

    view! {
        <div class="image-uploader">
            <label class="image-uploader__picker" class:image-uploader__picker--busy=move || uploading.get()>
                <input
                    type="file"
                    accept="image/*"
                    class="image-uploader__input"
                    disabled=move || uploading.get()
                    on:change=on_change
                />
                <span>{move || picker_label(uploading.get(), image_url.get().is_some())}</span>
            </label>
            {move || {
                image_url
                    .get()
                    .map(|url| view! { <img class="image-uploader__preview" src=url alt="Uploaded image"/> })
            }}
        </div>
    }
}

/// Message for a failed upload: local rejection, server text or a default.
pub fn upload_error_message(error: &gradnote::forms::SubmitError) -> String {
    match error {
        gradnote::forms::SubmitError::Invalid(message) => (*message).to_owned(),
        gradnote::forms::SubmitError::Api(api) => api.user_message(UPLOAD_FAILED),
    }
}
