//! Reminder record, draft and field validation.
//!
//! # Responsibility
//! - Define the record shared by the pending and completed collections.
//! - Validate draft fields before a reminder is created.
//!
//! # Invariants
//! - `id` is never nil and never reused for another reminder.
//! - `title` is non-empty after trimming.
//! - `due_at` is immutable after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to a reminder at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(Uuid);

impl ReminderId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    ///
    /// Returns `None` for the nil UUID, which is never a valid identity.
    pub fn from_uuid(uuid: Uuid) -> Option<Self> {
        if uuid.is_nil() {
            None
        } else {
            Some(Self(uuid))
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ReminderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    /// Waiting to be done; listed in the pending collection.
    Pending,
    /// Marked done; listed in the completed collection.
    Completed,
}

/// A titled task with a due instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    /// Trimmed, never empty.
    pub title: String,
    /// Free text, may be empty.
    pub description: String,
    /// Sole ordering key for both collections.
    pub due_at: DateTime<Utc>,
    pub status: ReminderStatus,
    pub created_at: DateTime<Utc>,
    /// Set once, when the reminder is completed.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Reminder {
    /// Returns whether this reminder still waits in the pending collection.
    pub fn is_pending(&self) -> bool {
        self.status == ReminderStatus::Pending
    }
}

/// Not-yet-committed field values for a reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    pub title: String,
    pub description: String,
    pub due_at: DateTime<Utc>,
}

impl ReminderDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_at,
        }
    }

    /// Checks field constraints without consuming the draft.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank after trimming.
    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        if self.title.trim().is_empty() {
            return Err(ReminderValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Field constraint violations for reminder drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderValidationError {
    /// Title is empty or whitespace only.
    EmptyTitle,
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "reminder title must not be blank"),
        }
    }
}

impl Error for ReminderValidationError {}
