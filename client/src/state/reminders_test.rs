use super::*;

fn titles(list: &[Reminder]) -> Vec<&str> {
    list.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn seeded_book_partitions_by_date() {
    let book = ReminderBook::seeded();
    assert_eq!(book.tab(ReminderTab::Today, "").len(), 3);
    assert_eq!(
        titles(&book.tab(ReminderTab::Upcoming, "")),
        ["Doctor Appointment", "Physical Therapy"]
    );
    assert_eq!(titles(&book.tab(ReminderTab::Completed, "")), ["Blood Pressure Medication"]);
}

#[test]
fn search_filters_title_and_description() {
    let book = ReminderBook::seeded();
    assert_eq!(titles(&book.tab(ReminderTab::Today, "lunch")), ["Heart Medication"]);
    assert_eq!(titles(&book.tab(ReminderTab::Upcoming, "JOHNSON")), ["Doctor Appointment"]);
}

#[test]
fn completed_tab_ignores_search() {
    let book = ReminderBook::seeded();
    assert_eq!(book.tab(ReminderTab::Completed, "zzz").len(), 1);
}

#[test]
fn add_requires_title() {
    let mut book = ReminderBook::seeded();
    let draft = ReminderDraft { title: "   ".to_owned(), ..ReminderDraft::default() };
    assert_eq!(book.add(&draft), Err(FormError::MissingTitle));
    assert_eq!(book.all().len(), 5);
}

#[test]
fn add_without_date_lands_in_today() {
    let mut book = ReminderBook::seeded();
    let draft = ReminderDraft {
        title: " Walk ".to_owned(),
        time: "08:00".to_owned(),
        ..ReminderDraft::default()
    };
    let id = book.add(&draft).unwrap();
    assert_eq!(id, 6);
    let today = book.tab(ReminderTab::Today, "walk");
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].title, "Walk");
    assert!(today[0].alexa);
    assert!(!today[0].completed);
}

#[test]
fn add_with_date_lands_in_upcoming() {
    let mut book = ReminderBook::seeded();
    let draft = ReminderDraft {
        title: "Dentist".to_owned(),
        date: "2026-11-02".to_owned(),
        frequency: Frequency::Once,
        ..ReminderDraft::default()
    };
    book.add(&draft).unwrap();
    assert_eq!(book.tab(ReminderTab::Upcoming, "dentist")[0].date.as_deref(), Some("2026-11-02"));
}

#[test]
fn complete_and_remove_by_id() {
    let mut book = ReminderBook::seeded();
    assert!(book.complete(2));
    assert_eq!(book.tab(ReminderTab::Completed, "").len(), 2);
    assert!(!book.complete(99));
    assert!(book.remove(2));
    assert!(!book.remove(2));
    assert_eq!(book.all().len(), 4);
}

#[test]
fn frequency_parse_matches_select_values() {
    assert_eq!(Frequency::parse("weekly"), Some(Frequency::Weekly));
    assert_eq!(Frequency::parse("Weekly"), None);
    for f in Frequency::ALL {
        assert_eq!(Frequency::parse(f.value()), Some(f));
    }
}
