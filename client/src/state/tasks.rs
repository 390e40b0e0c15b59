//! Care task list held in page state.
//!
//! DESIGN
//! ======
//! Tasks due "Today" form the today tab, everything else is upcoming. The
//! "All Tasks" tab splits by status instead.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use super::form::FormError;
use crate::util::search::matches_query;

pub const TODAY: &str = "Today";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: String,
    pub due_time: String,
    pub alexa: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: String,
    pub due_time: String,
    pub alexa: bool,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            due_date: String::new(),
            due_time: String::new(),
            alexa: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskTab {
    #[default]
    Today,
    Upcoming,
    All,
}

impl TaskTab {
    pub const ALL: [Self; 3] = [Self::Today, Self::Upcoming, Self::All];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
            Self::All => "All Tasks",
        }
    }
}

#[derive(Clone, Debug)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::seeded()
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(id: u32, title: &str, description: &str, priority: Priority, status: TaskStatus, due_date: &str, due_time: &str, alexa: bool) -> Task {
    Task {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        priority,
        status,
        due_date: due_date.to_owned(),
        due_time: due_time.to_owned(),
        alexa,
    }
}

impl TaskList {
    #[must_use]
    pub fn seeded() -> Self {
        use Priority::{High, Low, Medium};
        use TaskStatus::{Completed, Pending};
        let tasks = vec![
            seed(1, "Take morning medication", "Blood pressure and heart medication", High, Completed, TODAY, "9:00 AM", true),
            seed(2, "Lunch", "Prepared meal in refrigerator", Medium, Pending, TODAY, "12:30 PM", true),
            seed(3, "Doctor appointment", "Checkup with Dr. Johnson", High, Pending, TODAY, "3:30 PM", true),
            seed(4, "Evening medication", "Take before dinner", High, Pending, TODAY, "6:00 PM", true),
            seed(5, "Physical therapy exercises", "Gentle stretching routine", Medium, Pending, "Tomorrow", "10:00 AM", true),
            seed(6, "Grocery delivery", "Delivery from Whole Foods", Low, Pending, "Tomorrow", "2:00 PM", false),
        ];
        Self { tasks, next_id: 7 }
    }

    #[must_use]
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    fn filtered<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks
            .iter()
            .filter(move |t| matches_query(query, &[t.title.as_str(), t.description.as_str()]))
    }

    #[must_use]
    pub fn due_today(&self, query: &str) -> Vec<Task> {
        self.filtered(query).filter(|t| t.due_date == TODAY).cloned().collect()
    }

    #[must_use]
    pub fn upcoming(&self, query: &str) -> Vec<Task> {
        self.filtered(query).filter(|t| t.due_date != TODAY).cloned().collect()
    }

    #[must_use]
    pub fn with_status(&self, status: TaskStatus, query: &str) -> Vec<Task> {
        self.filtered(query).filter(|t| t.status == status).cloned().collect()
    }

    /// `(completed, total)` for tasks due today.
    #[must_use]
    pub fn today_progress(&self) -> (usize, usize) {
        let today = self.due_today("");
        let done = today.iter().filter(|t| t.status == TaskStatus::Completed).count();
        (done, today.len())
    }

    /// Add a task from the dialog fields. A blank due date means today.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingTitle`] when the title is blank.
    pub fn add(&mut self, draft: &TaskDraft) -> Result<u32, FormError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let id = self.next_id;
        self.next_id += 1;
        let due_date = match draft.due_date.trim() {
            "" => TODAY.to_owned(),
            date => date.to_owned(),
        };
        self.tasks.push(Task {
            id,
            title: title.to_owned(),
            description: draft.description.trim().to_owned(),
            priority: draft.priority,
            status: draft.status,
            due_date,
            due_time: draft.due_time.clone(),
            alexa: draft.alexa,
        });
        Ok(id)
    }

    /// Flip pending/completed. Returns the new status, or `None` for unknown ids.
    pub fn toggle(&mut self, id: u32) -> Option<TaskStatus> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.status = task.status.toggled();
        Some(task.status)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }
}
