//! Credential checks for the prototype account.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no auth backend. Login accepts one fixed email/password pair and
//! signup accepts anything; both wait a fixed delay first so the UI exercises
//! the same busy states a network round-trip would.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::time::Duration;

use uuid::Uuid;

use crate::state::auth::AuthError;
use crate::state::user::{Role, User};

/// The only email accepted by `validate_login`.
pub const VALID_EMAIL: &str = "priyanshr230@gmail.com";
/// Password paired with [`VALID_EMAIL`].
pub const VALID_PASSWORD: &str = "1234";
/// Default simulated round-trip.
pub const SIMULATED_LATENCY: Duration = Duration::from_secs(1);

/// Wait out the simulated round-trip. Outside the browser there is no timer
/// and this resolves immediately.
async fn simulate_latency(latency: Duration) {
    if latency.is_zero() {
        return;
    }
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(latency).await;
}

/// Fresh unique user id in the `user-<hex>` form.
#[must_use]
pub fn fresh_user_id() -> String {
    format!("user-{}", Uuid::new_v4().simple())
}

/// The user record tied to the allow-listed account.
#[must_use]
pub fn demo_user() -> User {
    User {
        id: "user-1".to_owned(),
        name: "Priyansh".to_owned(),
        email: VALID_EMAIL.to_owned(),
        role: Role::Family,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CredentialValidator {
    latency: Duration,
}

impl Default for CredentialValidator {
    fn default() -> Self {
        Self { latency: SIMULATED_LATENCY }
    }
}

impl CredentialValidator {
    #[must_use]
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Accept only the exact allow-listed pair.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for any other input.
    pub async fn validate_login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        simulate_latency(self.latency).await;
        if email != VALID_EMAIL || password != VALID_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(demo_user())
    }

    /// Build a new account from the submitted fields. Never fails; no
    /// uniqueness or format checks are made.
    pub async fn create_account(&self, name: &str, email: &str, password: &str, role: Role) -> User {
        // Nothing stores passwords.
        let _ = password;
        simulate_latency(self.latency).await;
        User {
            id: fresh_user_id(),
            name: name.to_owned(),
            email: email.to_owned(),
            role,
        }
    }
}
