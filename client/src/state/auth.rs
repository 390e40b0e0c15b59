//! Auth-session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` sits at the app root and owns the one `SessionStore`.
//! Pages reach it through `use_auth` (operations) and `use_auth_state`
//! (reactive `AuthState`). Route guards and the dashboard shell observe the
//! same state to coordinate login redirects and identity-dependent rendering.
//!
//! CONCURRENCY
//! ===========
//! `login`/`signup` suspend on the simulated round-trip. Overlapping calls are
//! not cancelled: whichever settles last wins `user` and `loading`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::session::{LocalStorageSlot, SessionStore};
use super::user::{Role, User};
use crate::util::credentials::CredentialValidator;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("use_auth must be used within an AuthProvider")]
    UnauthorizedContextAccess,
}

/// Named navigation targets pushed by session transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    Login,
}

impl Destination {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Login => "/login",
        }
    }
}

/// Sink for navigation side effects.
pub trait Navigator: Send + Sync {
    fn push(&self, destination: Destination);
}

/// Navigates by assigning `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn push(&self, destination: Destination) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(destination.path());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("navigation to {} skipped outside the browser", destination.path());
        }
    }
}

/// Session operations exposed to pages.
#[derive(Clone)]
pub struct AuthContext {
    store: Arc<SessionStore>,
    validator: CredentialValidator,
    navigator: Arc<dyn Navigator>,
}

impl AuthContext {
    #[must_use]
    pub fn new(store: SessionStore, validator: CredentialValidator, navigator: impl Navigator + 'static) -> Self {
        Self {
            store: Arc::new(store),
            validator,
            navigator: Arc::new(navigator),
        }
    }

    /// Context wired to `localStorage` and `window.location`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(
            SessionStore::new(LocalStorageSlot::default()),
            CredentialValidator::default(),
            LocationNavigator,
        )
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.store.snapshot()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state().user
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.state().loading
    }

    pub fn subscribe(&self, observer: impl Fn(&AuthState) + Send + Sync + 'static) {
        self.store.subscribe(observer);
    }

    /// Rehydrate the persisted session. Effective once per store.
    pub fn restore(&self) {
        self.store.restore();
    }

    /// Sign in with the allow-listed account and go to the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the pair does not match;
    /// the current user is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.store.set_loading(true);
        let outcome = self.validator.validate_login(email, password).await;
        match &outcome {
            Ok(user) => {
                log::info!("login succeeded for {}", user.id);
                self.store.save(user.clone());
                self.navigator.push(Destination::Dashboard);
            }
            Err(e) => log::warn!("login failed: {e}"),
        }
        self.store.set_loading(false);
        outcome
    }

    /// Create an account, sign it in and go to the dashboard.
    pub async fn signup(&self, name: &str, email: &str, password: &str, role: Role) -> User {
        self.store.set_loading(true);
        let user = self.validator.create_account(name, email, password, role).await;
        log::info!("signup created {}", user.id);
        self.store.save(user.clone());
        self.navigator.push(Destination::Dashboard);
        self.store.set_loading(false);
        user
    }

    /// Forget the session and go to the login page. Safe to repeat.
    pub fn logout(&self) {
        self.store.clear();
        self.navigator.push(Destination::Login);
    }
}

/// Fetch the auth context, or report that the caller sits outside
/// `AuthProvider`.
///
/// # Errors
///
/// Returns [`AuthError::UnauthorizedContextAccess`] when no provider is in scope.
pub fn try_use_auth() -> Result<AuthContext, AuthError> {
    use_context::<AuthContext>().ok_or(AuthError::UnauthorizedContextAccess)
}

/// Fetch the auth context.
///
/// # Panics
///
/// Panics when called outside `AuthProvider`; that is an integration bug, not
/// a runtime condition.
pub fn use_auth() -> AuthContext {
    match try_use_auth() {
        Ok(auth) => auth,
        Err(e) => panic!("{e}"),
    }
}

/// Reactive view of the session.
///
/// # Panics
///
/// Panics when called outside `AuthProvider`.
pub fn use_auth_state() -> ReadSignal<AuthState> {
    match use_context::<ReadSignal<AuthState>>() {
        Some(state) => state,
        None => panic!("{}", AuthError::UnauthorizedContextAccess),
    }
}

/// Owns the session for its subtree. Restore runs once, after the first
/// render, so server and hydrated markup both start from `loading = true`.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::browser();
    let state = RwSignal::new(auth.state());
    auth.subscribe(move |s| state.set(s.clone()));

    provide_context(auth.clone());
    provide_context(state.read_only());

    Effect::new(move || auth.restore());

    children()
}
