use super::*;

fn active_labels(path: &str) -> Vec<&'static str> {
    nav_items(path)
        .into_iter()
        .filter(|item| item.active)
        .map(|item| item.entry.label)
        .collect()
}

#[test]
fn navigation_order_is_fixed() {
    let labels: Vec<_> = NAVIGATION.iter().map(|e| e.label).collect();
    assert_eq!(labels, ["Dashboard", "Live Feed", "Reminders", "Visitors", "Tasks", "Settings"]);
}

#[test]
fn exact_path_marks_single_entry() {
    assert_eq!(active_labels("/dashboard/tasks"), ["Tasks"]);
}

#[test]
fn dashboard_root_does_not_activate_children() {
    assert_eq!(active_labels("/dashboard"), ["Dashboard"]);
}

#[test]
fn sub_route_marks_nothing() {
    assert!(active_labels("/dashboard/tasks/123").is_empty());
}

#[test]
fn trailing_slash_marks_nothing() {
    assert!(active_labels("/dashboard/tasks/").is_empty());
}

#[test]
fn unrelated_path_marks_nothing() {
    assert!(active_labels("/login").is_empty());
}

#[test]
fn nav_items_always_lists_every_entry() {
    assert_eq!(nav_items("/nowhere").len(), NAVIGATION.len());
}

#[test]
fn link_class_reflects_active_flag() {
    assert_eq!(link_class(true), "nav-link nav-link--active");
    assert_eq!(link_class(false), "nav-link");
}
