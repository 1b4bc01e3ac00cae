//! Typed wrappers over the REST endpoints.
//!
//! ARCHITECTURE
//! ============
//! One module per resource. Each function maps typed arguments to exactly one
//! [`HttpClient`](crate::http::HttpClient) call: no retries, no caching and no
//! validation beyond what the server enforces. Client-side checks live in
//! [`crate::forms`] and run before these are called.

pub mod auth;
pub mod image;
pub mod knowledge;
pub mod questions;
