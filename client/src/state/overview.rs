//! Static content of the dashboard overview page.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use crate::util::nav::NavIcon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusCard {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    pub icon: NavIcon,
    pub healthy: bool,
}

pub const STATUS_CARDS: [StatusCard; 4] = [
    StatusCard { title: "Status", value: "Normal", caption: "All systems operational", icon: NavIcon::Home, healthy: true },
    StatusCard { title: "Reminders", value: "3", caption: "Upcoming today", icon: NavIcon::Bell, healthy: false },
    StatusCard { title: "Visitors", value: "2", caption: "Expected today", icon: NavIcon::Users, healthy: false },
    StatusCard { title: "Tasks", value: "5", caption: "Scheduled for today", icon: NavIcon::Calendar, healthy: false },
];

/// Severity used to colour an activity row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Destructive,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "tone-primary",
            Self::Secondary => "tone-secondary",
            Self::Accent => "tone-accent",
            Self::Destructive => "tone-destructive",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub detail: &'static str,
    pub ago: &'static str,
    pub tone: Tone,
}

pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity { title: "Medication Reminder", detail: "Blood pressure medication at 9:00 AM", ago: "10 minutes ago", tone: Tone::Primary },
    Activity { title: "Visitor Detected", detail: "Nurse Sarah arrived", ago: "45 minutes ago", tone: Tone::Secondary },
    Activity { title: "Health Check", detail: "Heart rate normal at 72 BPM", ago: "2 hours ago", tone: Tone::Accent },
    Activity { title: "Alert Resolved", detail: "Unknown visitor identified as delivery person", ago: "3 hours ago", tone: Tone::Destructive },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleItem {
    pub title: &'static str,
    pub detail: &'static str,
    pub time: &'static str,
    pub done: bool,
    pub icon: NavIcon,
}

impl ScheduleItem {
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.done { "Completed" } else { "Upcoming" }
    }
}

pub const TODAYS_SCHEDULE: [ScheduleItem; 5] = [
    ScheduleItem { title: "Blood Pressure Medication", detail: "Take 1 pill with water", time: "9:00 AM", done: true, icon: NavIcon::Bell },
    ScheduleItem { title: "Lunch", detail: "Prepared meal in refrigerator", time: "12:30 PM", done: false, icon: NavIcon::Bell },
    ScheduleItem { title: "Heart Medication", detail: "Take 1 pill after lunch", time: "1:00 PM", done: false, icon: NavIcon::Bell },
    ScheduleItem { title: "Doctor Visit", detail: "Dr. Johnson for checkup", time: "3:30 PM", done: false, icon: NavIcon::Users },
    ScheduleItem { title: "Evening Medication", detail: "Take 1 pill before dinner", time: "6:00 PM", done: false, icon: NavIcon::Bell },
];
