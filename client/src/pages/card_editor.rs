//! Card editor page: preview, form, and prev/next/submit actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page loads the initial card once on mount. Every later load or
//! submit is triggered by a button. The session decides what lands in the
//! form; this page only wires events to `net::driver`.

use leptos::prelude::*;

use cards::{CARD_KINDS, Direction, EditorSession, StatKind, TextField};

use crate::components::card_preview::CardPreview;
use crate::components::notice_banner::NoticeBanner;
use crate::components::stat_input::StatInput;
use crate::components::text_input::TextInput;
use crate::net::driver;
use crate::state::config::ClientConfig;

#[cfg(test)]
#[path = "card_editor_test.rs"]
mod card_editor_test;

const KIND_LIST_ID: &str = "card-kinds";

fn heading(session: &EditorSession) -> String {
    match (session.current(), session.is_loading()) {
        (Some(id), true) => format!("{id} (loading…)"),
        (Some(id), false) => id.to_string(),
        (None, true) => "Loading…".to_owned(),
        (None, false) => "No card loaded".to_owned(),
    }
}

#[component]
pub fn CardEditorPage() -> impl IntoView {
    let session = expect_context::<RwSignal<EditorSession>>();
    let config = expect_context::<RwSignal<ClientConfig>>();

    // Runs once: the effect reads no tracked signals.
    Effect::new(move || driver::start(session, config));

    let navigate = move |direction: Direction| driver::navigate(session, config, direction);
    let submit = move || driver::submit(session, config);

    let text_fields = [TextField::Name, TextField::CostLife]
        .into_iter()
        .map(|field| view! { <TextInput field=field/> })
        .collect_view();
    let list_fields = [TextField::Attributes, TextField::Colors, TextField::Subtypes]
        .into_iter()
        .map(|field| view! { <TextInput field=field/> })
        .collect_view();
    let stat_fields = StatKind::ALL
        .into_iter()
        .map(|kind| view! { <StatInput kind=kind/> })
        .collect_view();
    let kind_options = CARD_KINDS
        .iter()
        .map(|kind| view! { <option value=*kind></option> })
        .collect_view();

    view! {
        <div class="card-editor">
            <header class="card-editor__header toolbar">
                <span class="toolbar__title">{move || session.with(heading)}</span>
            </header>
            <NoticeBanner/>
            <div class="card-editor__body">
                <CardPreview/>
                <form class="card-form" on:submit=move |ev| ev.prevent_default()>
                    {text_fields}
                    <TextInput field=TextField::Kind list=KIND_LIST_ID/>
                    <datalist id=KIND_LIST_ID>{kind_options}</datalist>
                    {list_fields}
                    {stat_fields}
                </form>
            </div>
            <footer class="card-editor__actions">
                <button id="prevCard" class="card-editor__button" on:click=move |_| navigate(Direction::Prev)>
                    "Previous"
                </button>
                <button id="nextCard" class="card-editor__button" on:click=move |_| navigate(Direction::Next)>
                    "Next"
                </button>
                <button
                    id="submit"
                    class="card-editor__button card-editor__button--primary"
                    disabled=move || session.with(EditorSession::is_submitting)
                    on:click=move |_| submit()
                >
                    "Submit"
                </button>
            </footer>
        </div>
    }
}
