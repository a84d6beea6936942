//! Task domain model and priority ordering.
//!
//! A [`Task`] is the unit of work the user manages. Tasks carry a [`Priority`]
//! from the three-valued scale `P0` (most urgent) to `P2` (default), a completion
//! flag and creation/update timestamps maintained by storage.

use crate::domain::error::JustdoError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage-assigned task identifier.
pub type TaskId = i64;

/// Task urgency.
///
/// Variants are declared from most to least urgent, so the derived ordering sorts
/// `P0 < P1 < P2`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    /// Highest urgency.
    P0,
    /// Medium urgency.
    P1,
    /// Lowest urgency; assigned to every new task.
    #[default]
    P2,
}

impl Priority {
    /// All priorities, most urgent first.
    pub const ALL: [Self; 3] = [Self::P0, Self::P1, Self::P2];

    /// Returns the next priority in the circular cycle `P2 → P1 → P0 → P2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use justdo::Priority;
    ///
    /// assert_eq!(Priority::P2.next(), Priority::P1);
    /// assert_eq!(Priority::P1.next(), Priority::P0);
    /// assert_eq!(Priority::P0.next(), Priority::P2);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::P2 => Self::P1,
            Self::P1 => Self::P0,
            Self::P0 => Self::P2,
        }
    }

    /// Returns the label stored in the database and shown in the UI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P0 => "P0",
            Self::P1 => "P1",
            Self::P2 => "P2",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = JustdoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "P0" => Ok(Self::P0),
            "P1" => Ok(Self::P1),
            "P2" => Ok(Self::P2),
            _ => Err(JustdoError::InvalidPriority(s.to_string())),
        }
    }
}

/// A persisted task.
///
/// `id`, `created_at` and `updated_at` are owned by storage: the id never
/// changes after creation and `updated_at` moves forward on every content,
/// priority or completion change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Builds a fresh, not yet completed task with default priority.
    ///
    /// Used by storage backends once an id has been assigned.
    #[must_use]
    pub fn new(id: TaskId, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            priority: Priority::default(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}
