//! Route guard for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route applies identical unauthenticated redirect behavior.
//! The decision is a small state machine over `(loading, user)`; the effect
//! that acts on it runs after render, never inline.
//!
//! STATES
//! ======
//! `Pending` (loading) defers the decision. `Authorized` renders content.
//! `Unauthorized` redirects to `/login`, once per entry into the state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, Destination};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Pending,
    Authorized,
    Unauthorized,
}

impl From<&AuthState> for GuardState {
    fn from(state: &AuthState) -> Self {
        match (state.loading, &state.user) {
            (true, _) => Self::Pending,
            (false, Some(_)) => Self::Authorized,
            (false, None) => Self::Unauthorized,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardEffect {
    RedirectToLogin,
}

/// Tracks the last observed state so a redirect fires on the transition,
/// not on every re-run.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteGuard {
    last: GuardState,
}

impl RouteGuard {
    #[must_use]
    pub fn state(&self) -> GuardState {
        self.last
    }

    /// Feed the latest auth state; returns the effect to perform, if any.
    pub fn observe(&mut self, auth: &AuthState) -> Option<GuardEffect> {
        let next = GuardState::from(auth);
        let prev = std::mem::replace(&mut self.last, next);
        (next == GuardState::Unauthorized && prev != GuardState::Unauthorized).then_some(GuardEffect::RedirectToLogin)
    }
}

/// True when auth has loaded and no user is present.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    GuardState::from(state) == GuardState::Unauthorized
}

/// Redirect to `/login` when auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut guard = RouteGuard::default();
    Effect::new(move || {
        let state = auth.get();
        if guard.observe(&state) == Some(GuardEffect::RedirectToLogin) {
            log::info!("unauthenticated; redirecting to login");
            navigate(Destination::Login.path(), NavigateOptions::default());
        }
    });
}
