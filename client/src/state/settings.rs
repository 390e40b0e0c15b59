//! Settings page form state.
//!
//! Nothing here is persisted; saving only flips a transient flag so the
//! button can show a confirmation.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use super::user::{Role, User};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Account,
    Appearance,
    Devices,
    Alerts,
}

impl SettingsTab {
    pub const ALL: [Self; 4] = [Self::Account, Self::Appearance, Self::Devices, Self::Alerts];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Appearance => "Appearance",
            Self::Devices => "Devices",
            Self::Alerts => "Alerts",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.value() == raw)
    }
}

#[must_use]
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Family => "Family Member",
        Role::Caregiver => "Caregiver",
    }
}

/// Profile and password fields of the account tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    /// Pre-fill from the signed-in user; blank when there is none.
    #[must_use]
    pub fn from_user(user: Option<&User>) -> Self {
        user.map_or_else(Self::default, |u| Self {
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role,
            ..Self::default()
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Appearance {
    pub font_size: FontSize,
    pub reduce_motion: bool,
    pub high_contrast: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub fall_alerts: bool,
    pub visitor_alerts: bool,
    pub reminder_alerts: bool,
    pub email_notifications: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            fall_alerts: true,
            visitor_alerts: true,
            reminder_alerts: true,
            email_notifications: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alert {
    Fall,
    Visitor,
    Reminder,
    Email,
}

impl Alert {
    pub const ALL: [Self; 4] = [Self::Fall, Self::Visitor, Self::Reminder, Self::Email];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Fall => "Fall Detection Alerts",
            Self::Visitor => "Visitor Alerts",
            Self::Reminder => "Reminder Alerts",
            Self::Email => "Email Notifications",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Fall => "Receive alerts when a fall is detected",
            Self::Visitor => "Get notified when visitors arrive",
            Self::Reminder => "Reminders for medications and tasks",
            Self::Email => "Receive alerts via email",
        }
    }
}

impl NotificationPrefs {
    #[must_use]
    pub fn get(&self, alert: Alert) -> bool {
        match alert {
            Alert::Fall => self.fall_alerts,
            Alert::Visitor => self.visitor_alerts,
            Alert::Reminder => self.reminder_alerts,
            Alert::Email => self.email_notifications,
        }
    }

    pub fn set(&mut self, alert: Alert, on: bool) {
        let slot = match alert {
            Alert::Fall => &mut self.fall_alerts,
            Alert::Visitor => &mut self.visitor_alerts,
            Alert::Reminder => &mut self.reminder_alerts,
            Alert::Email => &mut self.email_notifications,
        };
        *slot = on;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub profile: ProfileForm,
    pub appearance: Appearance,
    pub alerts: NotificationPrefs,
    pub saving: bool,
}

impl SettingsState {
    #[must_use]
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            profile: ProfileForm::from_user(user),
            ..Self::default()
        }
    }

    /// Enter the saving state. Returns `false` if a save is already showing.
    pub fn begin_save(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        true
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }
}
