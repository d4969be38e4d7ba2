//! Editor session: the one place that knows which card is current.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front ends call a `begin_*` method, perform the HTTP request it describes,
//! then hand the result to the matching `finish_*` method. The session never
//! touches the network itself.
//!
//! ORDERING
//! ========
//! Every load gets a fresh, increasing [`Ticket`]. Only the most recently
//! issued ticket may change the form; a slower response for an older request
//! is dropped when it finally arrives. The last request the operator made
//! wins, not the last response to arrive.

use crate::card::{Card, CardId};
use crate::endpoint::{Direction, Endpoint};
use crate::error::EditorError;
use crate::form::{CardForm, StatKind, TextField};

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Identifies one load request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// A load the caller should perform: `GET endpoint`, then [`EditorSession::finish_load`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: Ticket,
    pub endpoint: Endpoint,
}

/// A submit the caller should perform: `POST endpoint` with `card` as JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub endpoint: Endpoint,
    pub card: Card,
}

/// What happened to a finished load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The card is now current and rendered.
    Applied(CardId),
    /// The load failed; the form is unchanged and a notice was raised.
    Failed(EditorError),
    /// A newer load was issued meanwhile; the result was discarded.
    Superseded,
}

/// Operator-visible message shown in the inline banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Info(message) | Self::Error(message) => message,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Editor state for the lifetime of one page or CLI run.
#[derive(Clone, Debug, Default)]
pub struct EditorSession {
    current: Option<CardId>,
    form: CardForm,
    issued: u64,
    pending_load: Option<Ticket>,
    submitting: Option<CardId>,
    unlisted: Vec<String>,
    notice: Option<Notice>,
}

impl EditorSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the card currently in the form, if any has loaded.
    #[must_use]
    pub fn current(&self) -> Option<&CardId> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn form(&self) -> &CardForm {
        &self.form
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True while the most recent load has not finished.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    /// Request the initial card (`GET /start`).
    pub fn begin_start(&mut self) -> LoadRequest {
        self.issue(Endpoint::Start)
    }

    /// Request the card before or after the current one.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoCurrentCard`] before the first card has loaded.
    pub fn begin_navigate(&mut self, direction: Direction) -> Result<LoadRequest, EditorError> {
        let Some(current) = self.current.clone() else {
            return Err(self.raise(EditorError::NoCurrentCard));
        };
        Ok(self.issue(Endpoint::navigate(direction, current)))
    }

    /// Apply the result of a load. Results for superseded tickets are dropped
    /// without touching the form or the notice.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Card, EditorError>) -> LoadOutcome {
        if self.pending_load != Some(ticket) {
            return LoadOutcome::Superseded;
        }
        self.pending_load = None;

        match result {
            Ok(card) => {
                self.form.render(&card);
                self.current = Some(card.id.clone());
                self.notice = None;
                LoadOutcome::Applied(card.id)
            }
            Err(err) => LoadOutcome::Failed(self.raise(err)),
        }
    }

    /// Build the submit payload from the form. Colors or attributes outside
    /// the backend vocabulary are sent anyway but raise an info notice.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoCurrentCard`] before the first load, or
    /// [`EditorError::Validation`] when the form cannot be read back.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, EditorError> {
        let Some(current) = self.current.clone() else {
            return Err(self.raise(EditorError::NoCurrentCard));
        };
        let card = match self.form.read(&current) {
            Ok(card) => card,
            Err(err) => return Err(self.raise(EditorError::from(err))),
        };

        self.unlisted = card.unlisted_terms();
        if !self.unlisted.is_empty() {
            self.notice = Some(Notice::Info(format!(
                "sending unrecognized {}",
                self.unlisted.join(", ")
            )));
        }
        self.submitting = Some(current);
        Ok(SubmitRequest {
            endpoint: Endpoint::Submit,
            card,
        })
    }

    /// Record the outcome of a submit and hand it back to the caller.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged after raising it as a notice.
    pub fn finish_submit(&mut self, result: Result<(), EditorError>) -> Result<(), EditorError> {
        let submitted = self.submitting.take();
        let unlisted = std::mem::take(&mut self.unlisted);
        match result {
            Ok(()) => {
                let label = submitted.map_or_else(|| "card".to_owned(), |id| id.to_string());
                let message = if unlisted.is_empty() {
                    format!("saved {label}")
                } else {
                    format!("saved {label}; unrecognized {}", unlisted.join(", "))
                };
                self.notice = Some(Notice::Info(message));
                Ok(())
            }
            Err(err) => Err(self.raise(err)),
        }
    }

    pub fn toggle_stat(&mut self, kind: StatKind, checked: bool) {
        self.form.toggle(kind, checked);
    }

    pub fn edit_stat(&mut self, kind: StatKind, value: impl Into<String>) {
        self.form.set_stat_value(kind, value);
    }

    pub fn edit_text(&mut self, field: TextField, value: impl Into<String>) {
        self.form.set_text(field, value);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn issue(&mut self, endpoint: Endpoint) -> LoadRequest {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending_load = Some(ticket);
        LoadRequest { ticket, endpoint }
    }

    fn raise(&mut self, err: EditorError) -> EditorError {
        self.notice = Some(Notice::Error(err.to_string()));
        err
    }
}
