use super::*;

#[test]
fn only_status_card_is_marked_healthy() {
    let healthy: Vec<_> = STATUS_CARDS.iter().filter(|c| c.healthy).map(|c| c.title).collect();
    assert_eq!(healthy, ["Status"]);
}

#[test]
fn schedule_labels_follow_done_flag() {
    let labels: Vec<_> = TODAYS_SCHEDULE.iter().map(ScheduleItem::status_label).collect();
    assert_eq!(labels, ["Completed", "Upcoming", "Upcoming", "Upcoming", "Upcoming"]);
}

#[test]
fn activity_is_newest_first() {
    assert_eq!(RECENT_ACTIVITY[0].ago, "10 minutes ago");
    assert_eq!(RECENT_ACTIVITY[3].tone, Tone::Destructive);
}
