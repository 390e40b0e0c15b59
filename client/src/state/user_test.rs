use super::*;

fn sample() -> User {
    User {
        id: "user-1".to_owned(),
        name: "Priyansh".to_owned(),
        email: "p@example.com".to_owned(),
        role: Role::Family,
    }
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Caregiver).unwrap(), "\"caregiver\"");
    assert_eq!(serde_json::to_string(&Role::Family).unwrap(), "\"family\"");
}

#[test]
fn role_parse_accepts_only_known_values() {
    assert_eq!(Role::parse("caregiver"), Some(Role::Caregiver));
    assert_eq!(Role::parse("family"), Some(Role::Family));
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse("Family"), None);
}

#[test]
fn user_json_has_exactly_four_fields() {
    let value = serde_json::to_value(sample()).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(obj["role"], "family");
}

#[test]
fn user_rejects_extra_fields() {
    let raw = r#"{"id":"u","name":"n","email":"e","role":"family","admin":true}"#;
    assert!(serde_json::from_str::<User>(raw).is_err());
}

#[test]
fn initial_uses_first_char_or_fallback() {
    assert_eq!(sample().initial(), "P");
    let mut anon = sample();
    anon.name.clear();
    assert_eq!(anon.initial(), "U");
}
