use super::*;

fn draft(name: &str, role: &str, schedule: bool, date: &str, time: &str) -> VisitorDraft {
    VisitorDraft {
        name: name.to_owned(),
        role: role.to_owned(),
        notes: String::new(),
        schedule_visit: schedule,
        date: date.to_owned(),
        time: time.to_owned(),
    }
}

// =============================================================
// search
// =============================================================

#[test]
fn known_search_matches_name_or_role() {
    let book = VisitorBook::seeded();
    assert_eq!(book.known("").len(), 5);
    assert_eq!(book.known("nurse")[0].name, "Sarah Johnson");
    assert_eq!(book.known("chen")[0].role, "Doctor");
    assert!(book.known("plumber").is_empty());
}

#[test]
fn unknown_log_is_seeded() {
    let book = VisitorBook::seeded();
    assert_eq!(book.unknown().len(), 3);
    assert_eq!(book.unknown()[2].status, UnknownStatus::Delivery);
}

// =============================================================
// add_visitor
// =============================================================

#[test]
fn add_visitor_requires_name() {
    let mut book = VisitorBook::seeded();
    assert_eq!(book.add_visitor(&draft("  ", "Friend", false, "", "")), Err(FormError::MissingVisitorName));
}

#[test]
fn add_visitor_registers_known_visitor() {
    let mut book = VisitorBook::seeded();
    let outcome = book.add_visitor(&draft("Tom Lee", "Friend", false, "", "")).unwrap();
    assert_eq!(outcome, VisitorOutcome::Added("Tom Lee".to_owned()));
    assert_eq!(outcome.message(), "Tom Lee added to known visitors");
    assert_eq!(book.known("tom")[0].role, "Friend");
    assert_eq!(book.upcoming().len(), 3);
}

#[test]
fn add_visitor_with_schedule_needs_date_and_time() {
    let mut book = VisitorBook::seeded();
    assert_eq!(
        book.add_visitor(&draft("Tom", "Friend", true, "2026-10-20", "")),
        Err(FormError::MissingVisitSlot)
    );
    assert_eq!(book.upcoming().len(), 3);
}

#[test]
fn add_visitor_with_schedule_defaults_role_to_guest() {
    let mut book = VisitorBook::seeded();
    let outcome = book.add_visitor(&draft("Tom", "", true, "2026-10-20", "14:00")).unwrap();
    assert_eq!(outcome.message(), "Visit scheduled for Tom");
    let last = book.upcoming().last().unwrap();
    assert_eq!(last.role, DEFAULT_ROLE);
    assert_eq!(last.id, 1000);
}

// =============================================================
// schedule_visit / remove_visit
// =============================================================

#[test]
fn schedule_visit_requires_every_field() {
    let mut book = VisitorBook::seeded();
    for d in [
        draft("", "Family", true, "d", "t"),
        draft("Ann", "", true, "d", "t"),
        draft("Ann", "Family", true, "", "t"),
        draft("Ann", "Family", true, "d", ""),
    ] {
        assert_eq!(book.schedule_visit(&d), Err(FormError::IncompleteVisit));
    }
    assert_eq!(book.upcoming().len(), 3);
}

#[test]
fn schedule_visit_appends_with_fresh_ids() {
    let mut book = VisitorBook::seeded();
    book.schedule_visit(&draft("Ann", "Family", true, "Sunday", "09:00")).unwrap();
    book.schedule_visit(&draft("Ben", "Friend", true, "Monday", "10:00")).unwrap();
    let ids: Vec<u32> = book.upcoming().iter().map(|v| v.id).collect();
    assert_eq!(ids, [201, 202, 203, 1000, 1001]);
}

#[test]
fn remove_visit_by_id() {
    let mut book = VisitorBook::seeded();
    assert!(book.remove_visit(202));
    assert!(!book.remove_visit(202));
    assert_eq!(book.upcoming().len(), 2);
}
