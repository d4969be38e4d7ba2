//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use cards::EditorSession;

use crate::pages::card_editor::CardEditorPage;
use crate::state::config::ClientConfig;

/// Root application component.
///
/// Provides the editor session and backend configuration to every child.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(EditorSession::new());
    let config = RwSignal::new(ClientConfig::default());

    provide_context(session);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/card-qa.css"/>
        <Title text="Card QA"/>
        <CardEditorPage/>
    }
}
