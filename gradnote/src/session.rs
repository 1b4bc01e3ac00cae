//! Session store: the client's belief about who is logged in.
//!
//! DESIGN
//! ======
//! `AuthState` is an immutable snapshot. It only changes through
//! [`AuthState::reduce`], which maps one pending/fulfilled/rejected action to
//! the next snapshot. The async operations below (`login`, `logout`,
//! `fetch_current_user`) call the API and report progress through an
//! [`AuthDispatch`]; the browser dispatches into a reactive signal, the CLI
//! and tests into a [`SessionStore`].
//!
//! Operations are not serialized against each other: if two are in flight,
//! whichever resolves last decides the final snapshot.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::api;
use crate::error::ApiError;
use crate::http::{HttpClient, Navigator, TokenStore, Transport};
use crate::types::{LoginRequest, LoginResponse, User};

pub const LOGIN_FAILED: &str = "Login failed, please try again.";
pub const LOGOUT_FAILED: &str = "Logout failed.";
pub const FETCH_USER_FAILED: &str = "Failed to load the current user.";

/// Snapshot of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True only after a login or current-user fetch succeeded.
    pub is_authenticated: bool,
    /// An auth operation is in flight.
    pub loading: bool,
    /// Last failure, shown to the user until cleared.
    pub error: Option<String>,
}

/// Transitions of the session state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    LoginPending,
    LoginFulfilled { token: String, user: Option<User> },
    LoginRejected(String),
    LogoutPending,
    LogoutFulfilled,
    /// The server call failed; the local session is ended anyway.
    LogoutRejected(String),
    FetchUserPending,
    FetchUserFulfilled(User),
    FetchUserRejected(String),
    ClearError,
}

impl AuthState {
    /// Start-up snapshot: a stored token is remembered but not yet trusted.
    #[must_use]
    pub fn restore(token: Option<String>) -> Self {
        Self { token, ..Self::default() }
    }

    /// Apply one action and return the next snapshot.
    #[must_use]
    pub fn reduce(self, action: AuthAction) -> Self {
        match action {
            AuthAction::LoginPending => Self { loading: true, error: None, ..self },
            AuthAction::LoginFulfilled { token, user } => Self {
                user,
                token: Some(token),
                is_authenticated: true,
                loading: false,
                error: None,
            },
            AuthAction::LoginRejected(message) => Self {
                is_authenticated: false,
                loading: false,
                error: Some(message),
                ..self
            },
            AuthAction::LogoutPending => Self { loading: true, ..self },
            AuthAction::LogoutFulfilled => Self::default(),
            AuthAction::LogoutRejected(message) => Self { error: Some(message), ..Self::default() },
            AuthAction::FetchUserPending => Self { loading: true, ..self },
            AuthAction::FetchUserFulfilled(user) => Self {
                user: Some(user),
                is_authenticated: true,
                loading: false,
                error: None,
                ..self
            },
            AuthAction::FetchUserRejected(message) => Self {
                user: None,
                is_authenticated: false,
                loading: false,
                error: Some(message),
                ..self
            },
            AuthAction::ClearError => Self { error: None, ..self },
        }
    }

    /// Name shown in the header.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("User", |u| u.username.as_str())
    }
}

/// Sink for session actions.
pub trait AuthDispatch {
    fn dispatch(&self, action: AuthAction);
}

impl<F> AuthDispatch for F
where
    F: Fn(AuthAction),
{
    fn dispatch(&self, action: AuthAction) {
        self(action);
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&AuthState)>;

/// Single-threaded session container with change subscriptions.
pub struct SessionStore {
    state: RefCell<Rc<AuthState>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl SessionStore {
    #[must_use]
    pub fn new(initial: AuthState) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial)),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Current snapshot. Later dispatches never mutate it.
    #[must_use]
    pub fn snapshot(&self) -> Rc<AuthState> {
        Rc::clone(&self.state.borrow())
    }

    /// Register a listener called with every new snapshot.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

impl AuthDispatch for SessionStore {
    fn dispatch(&self, action: AuthAction) {
        let next = Rc::new(self.snapshot().as_ref().clone().reduce(action));
        *self.state.borrow_mut() = Rc::clone(&next);

        // Listeners may subscribe or dispatch re-entrantly; iterate a copy.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }
}

/// Log in and persist the returned token.
///
/// # Errors
///
/// Returns the [`ApiError`] after dispatching `LoginRejected` with the
/// server's message (or [`LOGIN_FAILED`]).
pub async fn login<T, S, N, D>(
    client: &HttpClient<T, S, N>,
    store: &D,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
    D: AuthDispatch + ?Sized,
{
    store.dispatch(AuthAction::LoginPending);
    let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    match api::auth::login(client, &request).await {
        Ok(response) => {
            client.tokens().save(&response.token);
            log::info!("login succeeded");
            store.dispatch(AuthAction::LoginFulfilled {
                token: response.token.clone(),
                user: response.user.clone(),
            });
            Ok(response)
        }
        Err(e) => {
            log::warn!("login failed: {e}");
            store.dispatch(AuthAction::LoginRejected(e.user_message(LOGIN_FAILED)));
            Err(e)
        }
    }
}

/// End the session.
///
/// The stored token and the local identity are cleared whether or not the
/// server call succeeds; an unreachable server cannot keep the user logged in.
///
/// # Errors
///
/// Returns the [`ApiError`] of the server call, after the local session has
/// been cleared and `LogoutRejected` dispatched.
pub async fn logout<T, S, N, D>(client: &HttpClient<T, S, N>, store: &D) -> Result<(), ApiError>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
    D: AuthDispatch + ?Sized,
{
    store.dispatch(AuthAction::LogoutPending);
    let result = api::auth::logout(client).await;
    client.tokens().clear();
    match result {
        Ok(()) => {
            log::info!("logged out");
            store.dispatch(AuthAction::LogoutFulfilled);
            Ok(())
        }
        Err(e) => {
            log::warn!("logout call failed, local session cleared anyway: {e}");
            store.dispatch(AuthAction::LogoutRejected(e.user_message(LOGOUT_FAILED)));
            Err(e)
        }
    }
}

/// Ask the server who the stored token belongs to.
///
/// # Errors
///
/// Returns the [`ApiError`] after dispatching `FetchUserRejected`.
pub async fn fetch_current_user<T, S, N, D>(client: &HttpClient<T, S, N>, store: &D) -> Result<User, ApiError>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
    D: AuthDispatch + ?Sized,
{
    store.dispatch(AuthAction::FetchUserPending);
    match api::auth::current_user(client).await {
        Ok(user) => {
            log::debug!("session recovered for user {}", user.id);
            store.dispatch(AuthAction::FetchUserFulfilled(user.clone()));
            Ok(user)
        }
        Err(e) => {
            log::info!("no active session: {e}");
            store.dispatch(AuthAction::FetchUserRejected(e.user_message(FETCH_USER_FAILED)));
            Err(e)
        }
    }
}

/// Clear the last error without touching the identity.
pub fn clear_error<D: AuthDispatch + ?Sized>(store: &D) {
    store.dispatch(AuthAction::ClearError);
}
