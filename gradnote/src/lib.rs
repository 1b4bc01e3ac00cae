//! Shared client core for the GradNote mistake notebook.
//!
//! This crate owns everything the browser client and the CLI have in common:
//! the wire types, the HTTP client policy (bearer injection, 401 handling,
//! timeouts), the REST wrappers, the session store, the route-guard state
//! machine and form/upload validation. It has no UI or platform code; the
//! platform seams are the [`http::Transport`], [`http::TokenStore`] and
//! [`http::Navigator`] traits.

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod guard;
pub mod http;
pub mod session;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpClient, MemoryTokens, Navigator, TokenStore, Transport};
pub use session::{AuthAction, AuthState, SessionStore};

/// Route the 401 handler and the protected guard redirect to.
pub const LOGIN_ROUTE: &str = "/login";

/// Route guest-only pages redirect authenticated users to.
pub const HOME_ROUTE: &str = "/";

/// Storage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";
