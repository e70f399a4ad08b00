//! Reminder store and its ordering rules.
//!
//! # Responsibility
//! - Create reminders from validated drafts.
//! - Move reminders from pending to completed.
//! - Serve ordered, read-only snapshots of both collections.
//!
//! # Invariants
//! - `pending` is sorted by `due_at` ascending, ties in creation order.
//! - `completed` is sorted by `due_at` descending, ties per `CompletedTieBreak`.
//! - `pending.len() + completed.len()` equals the number of reminders created.
//! - Completion is one-way; a second `complete` for the same id is `NotFound`.

use crate::model::reminder::{
    Reminder, ReminderDraft, ReminderId, ReminderStatus, ReminderValidationError,
};
use chrono::Utc;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Configuration value for [`CompletedTieBreak::CreationOrder`].
pub const TIE_BREAK_CREATION: &str = "creation";
/// Configuration value for [`CompletedTieBreak::CompletionOrder`].
pub const TIE_BREAK_COMPLETION: &str = "completion";

/// Order among completed reminders that share the same `due_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletedTieBreak {
    /// Earlier-created reminder first.
    #[default]
    CreationOrder,
    /// Earlier-completed reminder first.
    CompletionOrder,
}

impl CompletedTieBreak {
    /// Stable string id used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreationOrder => TIE_BREAK_CREATION,
            Self::CompletionOrder => TIE_BREAK_COMPLETION,
        }
    }

    /// Parses a configuration value, ignoring surrounding whitespace and case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            TIE_BREAK_CREATION => Some(Self::CreationOrder),
            TIE_BREAK_COMPLETION => Some(Self::CompletionOrder),
            _ => None,
        }
    }
}

/// Construction options for [`ReminderStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub completed_tie_break: CompletedTieBreak,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Draft failed a field constraint.
    Validation(ReminderValidationError),
    /// Id is unknown or no longer pending.
    NotFound(ReminderId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "pending reminder not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ReminderValidationError> for StoreError {
    fn from(value: ReminderValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Receiver of committed drafts.
///
/// `CreationFlow::submit` hands its draft to a sink, which keeps the flow
/// independent of the concrete store.
pub trait ReminderSink {
    fn accept(&mut self, draft: ReminderDraft) -> StoreResult<Reminder>;
}

struct Entry {
    reminder: Reminder,
    created_seq: u64,
}

/// Session-owned source of truth for all reminders.
pub struct ReminderStore {
    config: StoreConfig,
    pending: Vec<Entry>,
    completed: Vec<Entry>,
    next_seq: u64,
}

impl ReminderStore {
    /// Creates an empty store with default ordering options.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            pending: Vec::new(),
            completed: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Creates a pending reminder from `draft`.
    ///
    /// The title is stored trimmed. Past due instants are accepted.
    ///
    /// # Errors
    /// - `Validation` when the title is blank.
    pub fn create(&mut self, draft: ReminderDraft) -> StoreResult<Reminder> {
        draft.validate()?;

        let reminder = Reminder {
            id: ReminderId::new(),
            title: draft.title.trim().to_string(),
            description: draft.description,
            due_at: draft.due_at,
            status: ReminderStatus::Pending,
            created_at: Utc::now(),
            completed_at: None,
        };
        let created_seq = self.next_seq;
        self.next_seq += 1;

        // Equal due instants land after existing ones, keeping creation order.
        let index = self
            .pending
            .partition_point(|entry| entry.reminder.due_at <= reminder.due_at);
        self.pending.insert(
            index,
            Entry {
                reminder: reminder.clone(),
                created_seq,
            },
        );

        debug!(
            "event=reminder_create module=store status=ok reminder_id={} position={} pending={}",
            reminder.id,
            index,
            self.pending.len()
        );
        Ok(reminder)
    }

    /// Marks a pending reminder as completed and returns the updated record.
    ///
    /// # Errors
    /// - `NotFound` when `id` is unknown or already completed. Both
    ///   collections are left untouched.
    pub fn complete(&mut self, id: ReminderId) -> StoreResult<Reminder> {
        let Some(position) = self
            .pending
            .iter()
            .position(|entry| entry.reminder.id == id)
        else {
            warn!(
                "event=reminder_complete module=store status=not_found reminder_id={}",
                id
            );
            return Err(StoreError::NotFound(id));
        };

        let mut entry = self.pending.remove(position);
        entry.reminder.status = ReminderStatus::Completed;
        entry.reminder.completed_at = Some(Utc::now());

        let due_at = entry.reminder.due_at;
        let created_seq = entry.created_seq;
        let index = match self.config.completed_tie_break {
            CompletedTieBreak::CreationOrder => self.completed.partition_point(|other| {
                other.reminder.due_at > due_at
                    || (other.reminder.due_at == due_at && other.created_seq < created_seq)
            }),
            CompletedTieBreak::CompletionOrder => self
                .completed
                .partition_point(|other| other.reminder.due_at >= due_at),
        };
        let reminder = entry.reminder.clone();
        self.completed.insert(index, entry);

        debug!(
            "event=reminder_complete module=store status=ok reminder_id={} position={} pending={} completed={}",
            id,
            index,
            self.pending.len(),
            self.completed.len()
        );
        Ok(reminder)
    }

    /// Pending reminders, soonest due first.
    pub fn list_pending(&self) -> Vec<Reminder> {
        snapshot(&self.pending)
    }

    /// Completed reminders, latest due first.
    pub fn list_completed(&self) -> Vec<Reminder> {
        snapshot(&self.completed)
    }

    /// Looks up a reminder in either collection.
    pub fn get(&self, id: ReminderId) -> Option<Reminder> {
        self.pending
            .iter()
            .chain(self.completed.iter())
            .find(|entry| entry.reminder.id == id)
            .map(|entry| entry.reminder.clone())
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn completed_len(&self) -> usize {
        self.completed.len()
    }

    /// Number of reminders ever created in this store.
    pub fn total_created(&self) -> u64 {
        self.next_seq
    }
}

impl Default for ReminderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderSink for ReminderStore {
    fn accept(&mut self, draft: ReminderDraft) -> StoreResult<Reminder> {
        self.create(draft)
    }
}

fn snapshot(entries: &[Entry]) -> Vec<Reminder> {
    entries.iter().map(|entry| entry.reminder.clone()).collect()
}
