//! Runs editor requests on the browser task queue.
//!
//! Each action asks the session for a request, performs it with `api`, and
//! feeds the result back. Navigation responses that lost the race are
//! dropped by the session, so nothing here needs to cancel in-flight fetches.

use leptos::prelude::*;

use cards::{Direction, EditorSession, LoadRequest, SubmitRequest};

use crate::state::config::ClientConfig;

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

/// Load the initial card.
pub fn start(session: RwSignal<EditorSession>, config: RwSignal<ClientConfig>) {
    if let Some(request) = session.try_update(EditorSession::begin_start) {
        spawn_load(session, config.get_untracked(), request);
    }
}

/// Move to the previous or next card. Unsaved edits are dropped once the
/// response lands.
pub fn navigate(session: RwSignal<EditorSession>, config: RwSignal<ClientConfig>, direction: Direction) {
    match session.try_update(|s| s.begin_navigate(direction)) {
        Some(Ok(request)) => spawn_load(session, config.get_untracked(), request),
        Some(Err(err)) => leptos::logging::warn!("{} ignored: {err}", direction.label()),
        None => {}
    }
}

/// Submit the form for the current card.
pub fn submit(session: RwSignal<EditorSession>, config: RwSignal<ClientConfig>) {
    match session.try_update(EditorSession::begin_submit) {
        Some(Ok(request)) => spawn_submit(session, config.get_untracked(), request),
        Some(Err(err)) => leptos::logging::warn!("submit rejected: {err}"),
        None => {}
    }
}

#[cfg(any(test, feature = "csr"))]
fn load_summary(request: &LoadRequest, outcome: &cards::LoadOutcome) -> String {
    use cards::LoadOutcome;

    let path = request.endpoint.path();
    match outcome {
        LoadOutcome::Applied(id) => format!("{path}: loaded {id}"),
        LoadOutcome::Failed(err) => format!("{path}: {err}"),
        LoadOutcome::Superseded => format!("{path}: superseded, response dropped"),
    }
}

fn spawn_load(session: RwSignal<EditorSession>, config: ClientConfig, request: LoadRequest) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let url = config.url(&request.endpoint);
        let result = super::api::fetch_card(&url).await;
        let Some(outcome) = session.try_update(|s| s.finish_load(request.ticket, result)) else {
            return;
        };
        let summary = load_summary(&request, &outcome);
        if matches!(outcome, cards::LoadOutcome::Failed(_)) {
            log::warn!("{summary}");
        } else {
            log::info!("{summary}");
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, config, request);
    }
}

fn spawn_submit(session: RwSignal<EditorSession>, config: ClientConfig, request: SubmitRequest) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        for term in request.card.unlisted_terms() {
            log::warn!("submitting {} with unrecognized {term}", request.card.id);
        }
        let url = config.url(&request.endpoint);
        let result = super::api::submit_card(&url, &request.card).await;
        match session.try_update(|s| s.finish_submit(result)) {
            Some(Ok(())) => log::info!("submitted {}", request.card.id),
            Some(Err(err)) => log::warn!("submit {} failed: {err}", request.card.id),
            None => {}
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, config, request);
    }
}
