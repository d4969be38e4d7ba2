//! REST helpers for the card backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs that report the backend as
//! unreachable, since these calls only make sense in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped onto `EditorError` so the session can show it in
//! the banner instead of leaving the form silently stale.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use cards::{Card, EditorError};

#[cfg(any(test, feature = "csr"))]
fn status_failed_message(url: &str, status: u16) -> String {
    format!("{url} returned HTTP {status}")
}

#[cfg(any(test, feature = "csr"))]
fn decode_card(body: &str) -> Result<Card, EditorError> {
    serde_json::from_str(body).map_err(EditorError::from)
}

/// Fetch one card with `GET url`.
///
/// # Errors
///
/// Returns [`EditorError::Network`] for connection failures and non-2xx
/// statuses, and [`EditorError::Decode`] when the body is not a card.
pub async fn fetch_card(url: &str) -> Result<Card, EditorError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| EditorError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(EditorError::Network(status_failed_message(url, resp.status())));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| EditorError::Network(e.to_string()))?;
        decode_card(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(EditorError::Network("not available outside the browser".to_owned()))
    }
}

/// Post an edited card with `POST url`. The response body is ignored; any
/// 2xx status counts as saved.
///
/// # Errors
///
/// Returns [`EditorError::Network`] for connection failures and non-2xx
/// statuses.
pub async fn submit_card(url: &str, card: &Card) -> Result<(), EditorError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(card)
            .map_err(|e| EditorError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| EditorError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(EditorError::Network(status_failed_message(url, resp.status())));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, card);
        Err(EditorError::Network("not available outside the browser".to_owned()))
    }
}
