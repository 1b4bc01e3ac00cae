//! Route-guard decisions, independent of any UI framework.
//!
//! DESIGN
//! ======
//! The protected guard is a one-shot state machine. A guard instance asks for
//! at most one session-recovery fetch; once that fetch has settled, an
//! unauthenticated session redirects instead of fetching again. This keeps a
//! failed recovery from looping.
//!
//! ```text
//! Unknown --(stored token, not authenticated)--> Checking --finish_check--> Resolved
//!    \--(authenticated or no stored token)----------------------------------^
//! ```

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::AuthState;

/// Progress of the protected guard's session check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    Unknown,
    Checking,
    Resolved,
}

/// What the protected route should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is in flight; show a loading placeholder.
    Placeholder,
    /// Dispatch one current-user fetch, then call [`ProtectedGuard::begin_check`].
    Recover,
    /// Navigate away.
    Redirect(&'static str),
    /// Render the protected children.
    Render,
}

/// Gate for pages that need a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProtectedGuard {
    phase: GuardPhase,
}

impl ProtectedGuard {
    #[must_use]
    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    /// Decide for the current snapshot. `has_stored_token` tells whether a
    /// recovery fetch has anything to work with.
    pub fn evaluate(&mut self, state: &AuthState, has_stored_token: bool) -> GuardDecision {
        if state.is_authenticated && !state.loading {
            self.phase = GuardPhase::Resolved;
            return GuardDecision::Render;
        }
        if state.loading {
            return GuardDecision::Placeholder;
        }
        match self.phase {
            GuardPhase::Unknown if has_stored_token => GuardDecision::Recover,
            GuardPhase::Unknown | GuardPhase::Resolved => {
                self.phase = GuardPhase::Resolved;
                GuardDecision::Redirect(crate::LOGIN_ROUTE)
            }
            GuardPhase::Checking => GuardDecision::Placeholder,
        }
    }

    /// The recovery fetch was dispatched.
    pub fn begin_check(&mut self) {
        if self.phase == GuardPhase::Unknown {
            self.phase = GuardPhase::Checking;
        }
    }

    /// The recovery fetch settled, successfully or not.
    pub fn finish_check(&mut self) {
        self.phase = GuardPhase::Resolved;
    }
}

/// What a guest-only route (login, register) should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuestDecision {
    Redirect(&'static str),
    Render,
}

/// Authenticated users are sent home; everyone else sees the page.
#[must_use]
pub fn guest_decision(state: &AuthState) -> GuestDecision {
    if state.is_authenticated {
        GuestDecision::Redirect(crate::HOME_ROUTE)
    } else {
        GuestDecision::Render
    }
}
