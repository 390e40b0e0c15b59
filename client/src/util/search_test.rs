use super::*;

#[test]
fn empty_query_matches_everything() {
    assert!(matches_query("", &["anything"]));
    assert!(matches_query("", &[]));
}

#[test]
fn match_ignores_case() {
    assert!(matches_query("MEDIC", &["Blood Pressure Medication"]));
}

#[test]
fn any_field_may_match() {
    assert!(matches_query("water", &["Blood Pressure Medication", "Take 1 pill with water"]));
}

#[test]
fn no_match_when_absent() {
    assert!(!matches_query("yoga", &["Lunch", "Prepared meal"]));
}

#[test]
fn whitespace_is_significant() {
    assert!(!matches_query(" lunch", &["Lunch"]));
}
