//! Identity record owned by the session store.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

/// Account role chosen at signup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Caregiver,
    #[default]
    Family,
}

impl Role {
    /// Lowercase wire/display form (`"caregiver"` / `"family"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Caregiver => "caregiver",
            Self::Family => "family",
        }
    }

    /// Parse the value of a role radio input. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "caregiver" => Some(Self::Caregiver),
            "family" => Some(Self::Family),
            _ => None,
        }
    }
}

/// Signed-in user as persisted in the durable session slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// First character of the display name, or `U` when the name is empty.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map_or_else(|| "U".to_owned(), |c| c.to_string())
    }
}
