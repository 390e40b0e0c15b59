use super::*;
use crate::state::user::{Role, User};

fn user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: Role::Caregiver,
    }
}

fn state(loading: bool, user: Option<User>) -> AuthState {
    AuthState { user, loading }
}

fn redirects(guard: &mut RouteGuard, states: &[AuthState]) -> usize {
    states.iter().filter_map(|s| guard.observe(s)).count()
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&state(false, None)));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&state(true, None)));
    assert!(!should_redirect_unauth(&state(true, Some(user()))));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&state(false, Some(user()))));
}

// =============================================================
// RouteGuard transitions
// =============================================================

#[test]
fn guard_starts_pending() {
    assert_eq!(RouteGuard::default().state(), GuardState::Pending);
}

#[test]
fn loading_never_redirects() {
    let mut guard = RouteGuard::default();
    let n = redirects(&mut guard, &[state(true, None), state(true, Some(user())), state(true, None)]);
    assert_eq!(n, 0);
    assert_eq!(guard.state(), GuardState::Pending);
}

#[test]
fn pending_to_unauthorized_redirects_exactly_once() {
    let mut guard = RouteGuard::default();
    let n = redirects(&mut guard, &[state(true, None), state(false, None), state(false, None), state(false, None)]);
    assert_eq!(n, 1);
    assert_eq!(guard.state(), GuardState::Unauthorized);
}

#[test]
fn first_observation_unauthorized_redirects_once() {
    let mut guard = RouteGuard::default();
    assert_eq!(guard.observe(&state(false, None)), Some(GuardEffect::RedirectToLogin));
    assert_eq!(guard.observe(&state(false, None)), None);
}

#[test]
fn pending_to_authorized_has_no_effect() {
    let mut guard = RouteGuard::default();
    let n = redirects(&mut guard, &[state(true, None), state(false, Some(user())), state(false, Some(user()))]);
    assert_eq!(n, 0);
    assert_eq!(guard.state(), GuardState::Authorized);
}

#[test]
fn logout_after_authorized_redirects_once() {
    let mut guard = RouteGuard::default();
    let n = redirects(
        &mut guard,
        &[state(true, None), state(false, Some(user())), state(false, None), state(false, None)],
    );
    assert_eq!(n, 1);
}
