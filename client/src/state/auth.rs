//! Session state for the browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is an `RwSignal<AuthState>` in context. The core crate's async
//! operations (`login`, `logout`, `fetch_current_user`) report progress through
//! [`SignalDispatch`], which replaces the signal's value with the next reduced
//! snapshot so every reader sees a consistent identity.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gradnote::session::AuthDispatch;
use gradnote::{AuthAction, AuthState, TokenStore};
use leptos::prelude::*;

use crate::net::browser::LocalStorageTokens;

/// Start-up snapshot: the stored token, not yet verified.
pub fn initial_state() -> AuthState {
    AuthState::restore(LocalStorageTokens.load())
}

/// Replace `state` with its successor.
pub fn apply(state: &mut AuthState, action: AuthAction) {
    *state = std::mem::take(state).reduce(action);
}

/// Dispatches session actions into the context signal.
#[derive(Clone, Copy)]
pub struct SignalDispatch(pub RwSignal<AuthState>);

impl AuthDispatch for SignalDispatch {
    fn dispatch(&self, action: AuthAction) {
        self.0.update(|state| apply(state, action));
    }
}

/// Whether a token is waiting in storage for a recovery fetch.
pub fn has_stored_token() -> bool {
    LocalStorageTokens.load().is_some()
}
