use futures::executor::block_on;

use super::*;

fn instant() -> CredentialValidator {
    CredentialValidator::with_latency(Duration::ZERO)
}

#[test]
fn default_latency_is_one_second() {
    assert_eq!(CredentialValidator::default().latency(), Duration::from_secs(1));
}

#[test]
fn validate_login_accepts_fixed_pair() {
    let user = block_on(instant().validate_login(VALID_EMAIL, VALID_PASSWORD)).unwrap();
    assert_eq!(user, demo_user());
    assert_eq!(user.role, Role::Family);
    assert_eq!(user.id, "user-1");
}

#[test]
fn validate_login_rejects_wrong_password() {
    let err = block_on(instant().validate_login(VALID_EMAIL, "12345")).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn validate_login_rejects_wrong_email() {
    let err = block_on(instant().validate_login("someone@else.com", VALID_PASSWORD)).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn validate_login_is_exact_match() {
    let padded = format!(" {VALID_EMAIL}");
    assert!(block_on(instant().validate_login(&padded, VALID_PASSWORD)).is_err());
    let upper = VALID_EMAIL.to_ascii_uppercase();
    assert!(block_on(instant().validate_login(&upper, VALID_PASSWORD)).is_err());
    assert!(block_on(instant().validate_login("", "")).is_err());
}

#[test]
fn create_account_echoes_fields() {
    let user = block_on(instant().create_account("Bob", "bob@example.com", "pw", Role::Caregiver));
    assert_eq!(user.name, "Bob");
    assert_eq!(user.email, "bob@example.com");
    assert_eq!(user.role, Role::Caregiver);
    assert!(user.id.starts_with("user-"));
}

#[test]
fn create_account_accepts_empty_input() {
    let user = block_on(instant().create_account("", "", "", Role::Family));
    assert_eq!(user.name, "");
    assert_eq!(user.email, "");
}

#[test]
fn create_account_ids_differ() {
    let v = instant();
    let a = block_on(v.create_account("A", "a@x", "p", Role::Family));
    let b = block_on(v.create_account("A", "a@x", "p", Role::Family));
    assert_ne!(a.id, b.id);
}

#[test]
fn fresh_user_id_is_prefixed_hex() {
    let id = fresh_user_id();
    let hex = id.strip_prefix("user-").unwrap();
    assert_eq!(hex.len(), 32);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
}
