use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use utoipa::ToSchema;

/// Todo priority.
///
/// Stored as an integer level (`1..=3`), exchanged on the wire as a lowercase token.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    /// Parse a wire token. Exact, case-sensitive match on `low`, `medium` or `high`.
    pub fn from_wire(token: &str) -> Option<Self> {
        Self::from_str(token).ok()
    }

    /// Look up the priority for a stored level.
    pub fn from_level(level: i32) -> Option<Self> {
        Self::iter().find(|p| p.level() == level)
    }

    /// Integer level used by storage.
    pub fn level(self) -> i32 {
        self as i32
    }

    /// Wire token for a stored level; empty when the level is unknown.
    pub fn wire_token(level: i32) -> String {
        Self::from_level(level)
            .map(|p| p.to_string())
            .unwrap_or_default()
    }
}

/// Todo lifecycle status.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    #[default]
    Created,
    Processing,
    Done,
}

impl Status {
    pub fn from_wire(token: &str) -> Option<Self> {
        Self::from_str(token).ok()
    }
}

/// Sort direction for the priority column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Interpret a user supplied direction token.
    ///
    /// An empty token selects the default (descending). Anything other than
    /// `asc`/`desc` (any letter case) yields `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.is_empty() {
            return Some(Self::default());
        }
        Self::from_str(token).ok()
    }
}

/// Persisted todo as seen by the domain.
///
/// `status` is kept as a plain string: updates store whatever token was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i32,
    pub task: String,
    pub status: String,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a repository insert. Storage assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub task: String,
    pub status: String,
    pub priority: i32,
}

/// Filter and sort options for listing todos. Empty fields mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQuery {
    pub task: String,
    pub status: String,
    pub order: String,
}

impl TodoQuery {
    /// Whether `todo` passes the task substring and status filters.
    pub fn matches(&self, todo: &Todo) -> bool {
        (self.task.is_empty() || todo.task.contains(&self.task))
            && (self.status.is_empty() || todo.status == self.status)
    }
}
