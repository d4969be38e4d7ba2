//! Client-side state that is not part of the editor session.
//!
//! The session itself lives in the `cards` crate so the CLI can share it.

pub mod config;
