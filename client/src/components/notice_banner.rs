//! Inline banner for load/submit results.

use leptos::prelude::*;

use cards::{EditorSession, Notice};

#[cfg(test)]
#[path = "notice_banner_test.rs"]
mod notice_banner_test;

fn notice_class(notice: Option<&Notice>) -> &'static str {
    match notice {
        Some(Notice::Error(_)) => "notice notice--error",
        Some(Notice::Info(_)) => "notice notice--info",
        None => "notice",
    }
}

/// Shows the session notice, if any, with a dismiss button.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let session = expect_context::<RwSignal<EditorSession>>();

    view! {
        <Show when=move || session.with(|s| s.notice().is_some())>
            <div id="notice" class=move || session.with(|s| notice_class(s.notice())) role="status">
                <span class="notice__message">
                    {move || session.with(|s| s.notice().map(|n| n.message().to_owned()).unwrap_or_default())}
                </span>
                <button class="notice__dismiss" on:click=move |_| session.update(EditorSession::dismiss_notice)>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
