//! Networking for the card backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls; `driver` runs them on the browser task
//! queue and hands results back to the editor session.

pub mod api;
pub mod driver;
