//! Reactive client state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each module defines one plain struct that `app` wraps in an `RwSignal` and
//! provides to the tree. Session transitions themselves live in the core
//! crate; this layer only adapts them to signals.

pub mod auth;
pub mod ui;
