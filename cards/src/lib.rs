//! Shared card model and editor controller for the card QA tool.
//!
//! This crate owns everything both front ends agree on: the JSON shape of a
//! card, the form projection the operator edits, the backend routes, and the
//! session that decides which response is allowed to land in the form.
//! It performs no I/O; callers own transport and feed results back in.

pub mod card;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod list;
pub mod session;

pub use card::{ATTRIBUTES, CARD_KINDS, COLORS, Card, CardId, Stat};
pub use endpoint::{DEFAULT_BASE_URL, Direction, Endpoint};
pub use error::{EditorError, ValidationError};
pub use form::{CardForm, StatField, StatKind, TextField};
pub use list::{join_list, split_list};
pub use session::{EditorSession, LoadOutcome, LoadRequest, Notice, SubmitRequest, Ticket};
