//! Reminder list held in page state.
//!
//! DESIGN
//! ======
//! Seeded with the demo medication/appointment schedule. Reminders without a
//! date belong to today; dated ones are upcoming. Edits live only as long as
//! the page.

#[cfg(test)]
#[path = "reminders_test.rs"]
mod reminders_test;

use super::form::FormError;
use crate::util::search::matches_query;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Frequency {
    Once,
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Self; 4] = [Self::Once, Self::Daily, Self::Weekly, Self::Monthly];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Once => "Once",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.value() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reminder {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub time: String,
    pub frequency: Frequency,
    pub date: Option<String>,
    pub alexa: bool,
    pub completed: bool,
}

/// Fields of the "Add Reminder" dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReminderDraft {
    pub title: String,
    pub description: String,
    pub time: String,
    pub frequency: Frequency,
    pub date: String,
    pub alexa: bool,
}

impl Default for ReminderDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            time: String::new(),
            frequency: Frequency::Daily,
            date: String::new(),
            alexa: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReminderTab {
    #[default]
    Today,
    Upcoming,
    Completed,
}

impl ReminderTab {
    pub const ALL: [Self; 3] = [Self::Today, Self::Upcoming, Self::Completed];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReminderBook {
    reminders: Vec<Reminder>,
    next_id: u32,
}

impl Default for ReminderBook {
    fn default() -> Self {
        Self::seeded()
    }
}

fn seed(id: u32, title: &str, description: &str, time: &str, frequency: Frequency, date: Option<&str>, completed: bool) -> Reminder {
    Reminder {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        time: time.to_owned(),
        frequency,
        date: date.map(str::to_owned),
        alexa: true,
        completed,
    }
}

impl ReminderBook {
    #[must_use]
    pub fn seeded() -> Self {
        let reminders = vec![
            seed(1, "Blood Pressure Medication", "Take 1 pill with water", "9:00 AM", Frequency::Daily, None, true),
            seed(2, "Heart Medication", "Take 1 pill after lunch", "1:00 PM", Frequency::Daily, None, false),
            seed(3, "Evening Medication", "Take 1 pill before dinner", "6:00 PM", Frequency::Daily, None, false),
            seed(4, "Doctor Appointment", "Checkup with Dr. Johnson", "3:30 PM", Frequency::Once, Some("Tomorrow"), false),
            seed(5, "Physical Therapy", "Gentle stretching exercises", "10:00 AM", Frequency::Weekly, Some("Every Monday"), false),
        ];
        Self { reminders, next_id: 6 }
    }

    #[must_use]
    pub fn all(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Reminders in `tab` whose title or description matches `query`.
    ///
    /// The completed tab ignores the search box.
    #[must_use]
    pub fn tab(&self, tab: ReminderTab, query: &str) -> Vec<Reminder> {
        self.reminders
            .iter()
            .filter(|r| match tab {
                ReminderTab::Today => r.date.is_none() && matches_query(query, &[r.title.as_str(), r.description.as_str()]),
                ReminderTab::Upcoming => r.date.is_some() && matches_query(query, &[r.title.as_str(), r.description.as_str()]),
                ReminderTab::Completed => r.completed,
            })
            .cloned()
            .collect()
    }

    /// Add a reminder from the dialog fields.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingTitle`] when the title is blank.
    pub fn add(&mut self, draft: &ReminderDraft) -> Result<u32, FormError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let id = self.next_id;
        self.next_id += 1;
        let date = draft.date.trim();
        self.reminders.push(Reminder {
            id,
            title: title.to_owned(),
            description: draft.description.trim().to_owned(),
            time: draft.time.clone(),
            frequency: draft.frequency,
            date: (!date.is_empty()).then(|| date.to_owned()),
            alexa: draft.alexa,
            completed: false,
        });
        Ok(id)
    }

    /// Mark a reminder done. Returns `false` for unknown ids.
    pub fn complete(&mut self, id: u32) -> bool {
        match self.reminders.iter_mut().find(|r| r.id == id) {
            Some(reminder) => {
                reminder.completed = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|r| r.id != id);
        self.reminders.len() != before
    }
}
