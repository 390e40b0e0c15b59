//! Visitor registry held in page state.
//!
//! DESIGN
//! ======
//! Known visitors are the people approved for recognition; unknown visitors
//! are the detection log (read-only here); upcoming visits are editable.
//! New visits get ids from a counter that starts above the seeded ids.

#[cfg(test)]
#[path = "visitors_test.rs"]
mod visitors_test;

use super::form::FormError;
use crate::util::search::matches_query;

/// Relationship choices offered by the visitor dialogs.
pub const RELATIONSHIPS: [&str; 6] = ["Family", "Friend", "Caregiver", "Doctor", "Nurse", "Other"];

/// Role recorded when a scheduled visitor has no relationship set.
pub const DEFAULT_ROLE: &str = "Guest";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnownVisitor {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub last_visit: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnknownStatus {
    Unidentified,
    Delivery,
}

impl UnknownStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unidentified => "Unidentified",
            Self::Delivery => "Delivery",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVisitor {
    pub id: u32,
    pub timestamp: String,
    pub status: UnknownStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpcomingVisit {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub date: String,
    pub time: String,
}

/// Shared fields of the "Add Visitor" and "Schedule Visit" dialogs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitorDraft {
    pub name: String,
    pub role: String,
    pub notes: String,
    pub schedule_visit: bool,
    pub date: String,
    pub time: String,
}

/// What an accepted "Add Visitor" submission did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisitorOutcome {
    Added(String),
    Scheduled(String),
}

impl VisitorOutcome {
    /// Toast text for the outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Added(name) => format!("{name} added to known visitors"),
            Self::Scheduled(name) => format!("Visit scheduled for {name}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisitorTab {
    #[default]
    Known,
    Unknown,
    Upcoming,
}

impl VisitorTab {
    pub const ALL: [Self; 3] = [Self::Known, Self::Unknown, Self::Upcoming];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Known => "Known Visitors",
            Self::Unknown => "Unknown Visitors",
            Self::Upcoming => "Upcoming Visits",
        }
    }
}

#[derive(Clone, Debug)]
pub struct VisitorBook {
    known: Vec<KnownVisitor>,
    unknown: Vec<UnknownVisitor>,
    upcoming: Vec<UpcomingVisit>,
    next_id: u32,
}

impl Default for VisitorBook {
    fn default() -> Self {
        Self::seeded()
    }
}

fn known(id: u32, name: &str, role: &str, last_visit: &str) -> KnownVisitor {
    KnownVisitor {
        id,
        name: name.to_owned(),
        role: role.to_owned(),
        last_visit: last_visit.to_owned(),
    }
}

fn visit(id: u32, name: &str, role: &str, date: &str, time: &str) -> UpcomingVisit {
    UpcomingVisit {
        id,
        name: name.to_owned(),
        role: role.to_owned(),
        date: date.to_owned(),
        time: time.to_owned(),
    }
}

impl VisitorBook {
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            known: vec![
                known(1, "Sarah Johnson", "Nurse", "Today, 9:45 AM"),
                known(2, "Dr. Michael Chen", "Doctor", "Yesterday, 3:30 PM"),
                known(3, "Emma Wilson", "Family", "3 days ago"),
                known(4, "Robert Davis", "Caregiver", "1 week ago"),
                known(5, "Lisa Thompson", "Friend", "2 weeks ago"),
            ],
            unknown: vec![
                UnknownVisitor { id: 101, timestamp: "Today, 11:23 AM".to_owned(), status: UnknownStatus::Unidentified },
                UnknownVisitor { id: 102, timestamp: "Yesterday, 4:15 PM".to_owned(), status: UnknownStatus::Unidentified },
                UnknownVisitor { id: 103, timestamp: "3 days ago".to_owned(), status: UnknownStatus::Delivery },
            ],
            upcoming: vec![
                visit(201, "Dr. Michael Chen", "Doctor", "Tomorrow", "10:00 AM"),
                visit(202, "Sarah Johnson", "Nurse", "Tomorrow", "2:30 PM"),
                visit(203, "Emma Wilson", "Family", "Saturday", "11:00 AM"),
            ],
            next_id: 1000,
        }
    }

    /// Known visitors whose name or role matches `query`.
    #[must_use]
    pub fn known(&self, query: &str) -> Vec<KnownVisitor> {
        self.known
            .iter()
            .filter(|v| matches_query(query, &[v.name.as_str(), v.role.as_str()]))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn unknown(&self) -> &[UnknownVisitor] {
        &self.unknown
    }

    #[must_use]
    pub fn upcoming(&self) -> &[UpcomingVisit] {
        &self.upcoming
    }

    fn take_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// "Add Visitor" dialog: register a known visitor, or schedule a visit
    /// when the schedule box is ticked.
    ///
    /// # Errors
    ///
    /// [`FormError::MissingVisitorName`] for a blank name;
    /// [`FormError::MissingVisitSlot`] when scheduling without date and time.
    pub fn add_visitor(&mut self, draft: &VisitorDraft) -> Result<VisitorOutcome, FormError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingVisitorName);
        }
        let role = match draft.role.trim() {
            "" => DEFAULT_ROLE,
            role => role,
        };
        if draft.schedule_visit {
            if draft.date.is_empty() || draft.time.is_empty() {
                return Err(FormError::MissingVisitSlot);
            }
            let id = self.take_id();
            self.upcoming.push(visit(id, name, role, &draft.date, &draft.time));
            return Ok(VisitorOutcome::Scheduled(name.to_owned()));
        }
        let id = self.take_id();
        self.known.push(known(id, name, role, "Never"));
        Ok(VisitorOutcome::Added(name.to_owned()))
    }

    /// "Schedule Visit" dialog: every field is required.
    ///
    /// # Errors
    ///
    /// [`FormError::IncompleteVisit`] when name, role, date or time is missing.
    pub fn schedule_visit(&mut self, draft: &VisitorDraft) -> Result<VisitorOutcome, FormError> {
        let name = draft.name.trim();
        if name.is_empty() || draft.role.is_empty() || draft.date.is_empty() || draft.time.is_empty() {
            return Err(FormError::IncompleteVisit);
        }
        let id = self.take_id();
        self.upcoming.push(visit(id, name, &draft.role, &draft.date, &draft.time));
        Ok(VisitorOutcome::Scheduled(name.to_owned()))
    }

    pub fn remove_visit(&mut self, id: u32) -> bool {
        let before = self.upcoming.len();
        self.upcoming.retain(|v| v.id != id);
        self.upcoming.len() != before
    }
}
