//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns orchestration (which requests run when) and delegates
//! field rendering to `components`.

pub mod card_editor;
