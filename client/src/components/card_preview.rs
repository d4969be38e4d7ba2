//! Card image preview.

use leptos::prelude::*;

use cards::EditorSession;
use cards::form::PREVIEW_ELEMENT_ID;

use crate::state::config::ClientConfig;

#[component]
pub fn CardPreview() -> impl IntoView {
    let session = expect_context::<RwSignal<EditorSession>>();
    let config = expect_context::<RwSignal<ClientConfig>>();

    let src = move || {
        let path = session.with(|s| s.form().preview.clone());
        config.with(|c| c.preview_url(&path))
    };
    let alt = move || session.with(|s| s.current().map(ToString::to_string).unwrap_or_default());

    view! {
        <img id=PREVIEW_ELEMENT_ID class="card-editor__preview" src=src alt=alt/>
    }
}
