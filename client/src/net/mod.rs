//! Browser bindings for the core client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` implements the core's `Transport`, `TokenStore` and `Navigator`
//! traits over fetch, `localStorage` and `window.location`; `storage` holds
//! the raw `localStorage` access they and the UI state share.

pub mod browser;
pub mod storage;
