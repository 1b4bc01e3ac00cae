//! Transient success/error banner driven by `UiState::notice`.

use leptos::prelude::*;

use crate::state::ui::{NOTICE_MS, UiState};

/// Show `message` as a success banner and schedule its dismissal.
pub fn notify_success(ui: RwSignal<UiState>, message: impl Into<String>) {
    let seq = ui.try_update(|state| state.notify_success(message)).unwrap_or_default();
    schedule_dismiss(ui, seq);
}

/// Show `message` as an error banner and schedule its dismissal.
pub fn notify_error(ui: RwSignal<UiState>, message: impl Into<String>) {
    let seq = ui.try_update(|state| state.notify_error(message)).unwrap_or_default();
    schedule_dismiss(ui, seq);
}

fn schedule_dismiss(ui: RwSignal<UiState>, seq: u64) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
        ui.update(|state| state.dismiss(seq));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ui, seq, NOTICE_MS);
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        ui.get().notice.map(|notice| {
            let seq = notice.seq;
            view! {
                <div class=format!("notice {}", notice.kind.css_modifier()) role="status">
                    <span class="notice__message">{notice.message}</span>
                    <button
                        class="notice__close"
                        title="Dismiss"
                        on:click=move |_| ui.update(|state| state.dismiss(seq))
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
