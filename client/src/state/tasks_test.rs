use super::*;

fn ids(list: &[Task]) -> Vec<u32> {
    list.iter().map(|t| t.id).collect()
}

#[test]
fn seeded_list_splits_today_and_upcoming() {
    let list = TaskList::seeded();
    assert_eq!(ids(&list.due_today("")), [1, 2, 3, 4]);
    assert_eq!(ids(&list.upcoming("")), [5, 6]);
}

#[test]
fn status_partitions_cover_every_task() {
    let list = TaskList::seeded();
    let pending = list.with_status(TaskStatus::Pending, "");
    let completed = list.with_status(TaskStatus::Completed, "");
    assert_eq!(ids(&completed), [1]);
    assert_eq!(pending.len() + completed.len(), list.all().len());
}

#[test]
fn search_applies_to_every_partition() {
    let list = TaskList::seeded();
    assert_eq!(ids(&list.due_today("medication")), [1, 4]);
    assert_eq!(ids(&list.upcoming("whole foods")), [6]);
    assert!(list.with_status(TaskStatus::Completed, "grocery").is_empty());
}

#[test]
fn today_progress_counts_completed() {
    let mut list = TaskList::seeded();
    assert_eq!(list.today_progress(), (1, 4));
    list.toggle(2);
    assert_eq!(list.today_progress(), (2, 4));
}

#[test]
fn add_defaults_blank_due_date_to_today() {
    let mut list = TaskList::seeded();
    let id = list
        .add(&TaskDraft { title: "Call pharmacy".to_owned(), ..TaskDraft::default() })
        .unwrap();
    assert_eq!(id, 7);
    assert!(ids(&list.due_today("")).contains(&7));
}

#[test]
fn add_keeps_explicit_due_date() {
    let mut list = TaskList::seeded();
    let draft = TaskDraft {
        title: "Haircut".to_owned(),
        due_date: "2026-10-20".to_owned(),
        priority: Priority::Low,
        ..TaskDraft::default()
    };
    let id = list.add(&draft).unwrap();
    let task = list.upcoming("haircut").pop().unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.priority, Priority::Low);
}

#[test]
fn add_requires_title() {
    let mut list = TaskList::seeded();
    assert_eq!(list.add(&TaskDraft::default()), Err(FormError::MissingTitle));
}

#[test]
fn toggle_flips_and_reports_status() {
    let mut list = TaskList::seeded();
    assert_eq!(list.toggle(1), Some(TaskStatus::Pending));
    assert_eq!(list.toggle(1), Some(TaskStatus::Completed));
    assert_eq!(list.toggle(42), None);
}

#[test]
fn remove_drops_task() {
    let mut list = TaskList::seeded();
    assert!(list.remove(6));
    assert!(!list.remove(6));
    assert_eq!(list.all().len(), 5);
}

#[test]
fn priority_parse_matches_select_values() {
    for p in Priority::ALL {
        assert_eq!(Priority::parse(p.value()), Some(p));
    }
    assert_eq!(Priority::parse("urgent"), None);
    assert_eq!(TaskStatus::parse("completed"), Some(TaskStatus::Completed));
}
