use std::sync::Mutex;
use std::time::Duration;

use futures::executor::block_on;

use super::*;
use crate::state::session::MemorySlot;
use crate::util::credentials::{VALID_EMAIL, VALID_PASSWORD};

#[derive(Clone, Default)]
struct RecordingNavigator {
    pushed: Arc<Mutex<Vec<Destination>>>,
}

impl RecordingNavigator {
    fn pushed(&self) -> Vec<Destination> {
        self.pushed.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, destination: Destination) {
        self.pushed.lock().unwrap().push(destination);
    }
}

fn harness() -> (AuthContext, MemorySlot, RecordingNavigator) {
    let slot = MemorySlot::default();
    let nav = RecordingNavigator::default();
    let auth = AuthContext::new(
        SessionStore::new(slot.clone()),
        CredentialValidator::with_latency(Duration::ZERO),
        nav.clone(),
    );
    auth.restore();
    (auth, slot, nav)
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

#[test]
fn destinations_map_to_entry_points() {
    assert_eq!(Destination::Dashboard.path(), "/dashboard");
    assert_eq!(Destination::Login.path(), "/login");
}

// =============================================================
// login
// =============================================================

#[test]
fn login_with_fixed_pair_signs_in_family_user() {
    let (auth, slot, nav) = harness();
    let user = block_on(auth.login(VALID_EMAIL, VALID_PASSWORD)).unwrap();
    assert_eq!(user.role, Role::Family);
    assert_eq!(user.id, "user-1");
    assert_eq!(auth.user(), Some(user));
    assert!(!auth.loading());
    assert!(slot.raw().is_some());
    assert_eq!(nav.pushed(), vec![Destination::Dashboard]);
}

#[test]
fn login_with_wrong_pair_fails_and_stays_logged_out() {
    let (auth, slot, nav) = harness();
    for (email, password) in [(VALID_EMAIL, "nope"), ("x@y.z", VALID_PASSWORD), ("", "")] {
        let err = block_on(auth.login(email, password)).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(auth.user().is_none());
        assert!(!auth.loading());
    }
    assert!(slot.raw().is_none());
    assert!(nav.pushed().is_empty());
}

#[test]
fn login_raises_loading_then_clears_it() {
    let (auth, _, _) = harness();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    auth.subscribe(move |s| sink.lock().unwrap().push(s.loading));
    let _ = block_on(auth.login("bad", "bad"));
    let seen = seen.lock().unwrap();
    assert_eq!(seen.first(), Some(&true));
    assert_eq!(seen.last(), Some(&false));
}

#[test]
fn failed_login_keeps_existing_session() {
    let (auth, _, _) = harness();
    let user = block_on(auth.login(VALID_EMAIL, VALID_PASSWORD)).unwrap();
    assert!(block_on(auth.login(VALID_EMAIL, "wrong")).is_err());
    assert_eq!(auth.user(), Some(user));
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_echoes_fields_and_persists() {
    let (auth, slot, nav) = harness();
    let user = block_on(auth.signup("Dana", "dana@example.com", "pw", Role::Caregiver));
    assert_eq!(user.name, "Dana");
    assert_eq!(user.email, "dana@example.com");
    assert_eq!(user.role, Role::Caregiver);
    assert_eq!(auth.user(), Some(user.clone()));
    assert!(!auth.loading());
    let stored: User = serde_json::from_str(&slot.raw().unwrap()).unwrap();
    assert_eq!(stored, user);
    assert_eq!(nav.pushed(), vec![Destination::Dashboard]);
}

#[test]
fn successive_signups_get_distinct_ids() {
    let (auth, _, _) = harness();
    let a = block_on(auth.signup("A", "a@example.com", "pw", Role::Family));
    let b = block_on(auth.signup("A", "a@example.com", "pw", Role::Family));
    assert_ne!(a.id, b.id);
    assert_eq!(auth.user(), Some(b));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_storage_and_user() {
    let (auth, slot, nav) = harness();
    block_on(auth.login(VALID_EMAIL, VALID_PASSWORD)).unwrap();
    auth.logout();
    assert!(auth.user().is_none());
    assert!(slot.raw().is_none());
    assert_eq!(nav.pushed(), vec![Destination::Dashboard, Destination::Login]);
}

#[test]
fn logout_twice_matches_logout_once() {
    let (once, once_slot, _) = harness();
    block_on(once.login(VALID_EMAIL, VALID_PASSWORD)).unwrap();
    once.logout();

    let (twice, twice_slot, _) = harness();
    block_on(twice.login(VALID_EMAIL, VALID_PASSWORD)).unwrap();
    twice.logout();
    twice.logout();

    assert_eq!(once.state(), twice.state());
    assert_eq!(once_slot.raw(), twice_slot.raw());
    assert!(twice_slot.raw().is_none());
}

#[test]
fn session_survives_into_a_new_store_until_logout() {
    let (auth, slot, _) = harness();
    let user = block_on(auth.login(VALID_EMAIL, VALID_PASSWORD)).unwrap();

    let reloaded = AuthContext::new(
        SessionStore::new(slot.clone()),
        CredentialValidator::with_latency(Duration::ZERO),
        RecordingNavigator::default(),
    );
    assert!(reloaded.loading());
    reloaded.restore();
    assert_eq!(reloaded.user(), Some(user));
    assert!(!reloaded.loading());
}

// =============================================================
// context access
// =============================================================

#[test]
fn try_use_auth_outside_provider_errors() {
    let owner = Owner::new();
    let result = owner.with(try_use_auth);
    assert_eq!(result.err(), Some(AuthError::UnauthorizedContextAccess));
}

#[test]
fn try_use_auth_finds_provided_context() {
    let owner = Owner::new();
    let (auth, _, _) = harness();
    owner.with(|| {
        provide_context(auth);
        assert!(try_use_auth().is_ok());
    });
}

#[test]
#[should_panic(expected = "within an AuthProvider")]
fn use_auth_outside_provider_panics() {
    let owner = Owner::new();
    owner.with(|| {
        let _ = use_auth();
    });
}
