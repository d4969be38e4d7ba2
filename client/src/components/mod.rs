//! Reusable form components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `EditorSession` from Leptos context;
//! none of them talk to the network.

pub mod card_preview;
pub mod notice_banner;
pub mod stat_input;
pub mod text_input;
