//! Create-dialog state machine.
//!
//! # Responsibility
//! - Hold the transient draft while the create dialog is open.
//! - Validate the draft on submit and hand it to a [`ReminderSink`].
//!
//! # Invariants
//! - `Closed` always carries a default draft (blank text, clock-provided due).
//! - A rejected submit keeps the flow `Open` with the draft intact.
//! - Field edits have no effect outside the flow until `submit`.

use crate::model::reminder::{Reminder, ReminderDraft, ReminderValidationError};
use crate::store::reminder_store::{ReminderSink, StoreError};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Source of the default due instant for fresh drafts.
pub type DueClock = fn() -> DateTime<Utc>;

/// Visibility state of the create dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Closed,
    Open,
}

/// Draft fields that can be flagged invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    DueAt,
}

/// Errors from creation flow transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// `open` while the dialog is already open.
    AlreadyOpen,
    /// Edit, submit or cancel while the dialog is closed.
    NotOpen,
    /// Draft failed validation; the flow stays open.
    Validation(ReminderValidationError),
    /// Sink refused the draft; the flow stays open.
    Sink(StoreError),
}

impl Display for FlowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyOpen => write!(f, "create dialog is already open"),
            Self::NotOpen => write!(f, "create dialog is not open"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Sink(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FlowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Sink(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ReminderValidationError> for FlowError {
    fn from(value: ReminderValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Collects draft values for one reminder at a time.
pub struct CreationFlow {
    state: FlowState,
    draft: ReminderDraft,
    invalid_field: Option<DraftField>,
    clock: DueClock,
}

impl CreationFlow {
    /// Creates a closed flow whose default due instant is the current time.
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Creates a closed flow with a custom default due instant source.
    pub fn with_clock(clock: DueClock) -> Self {
        Self {
            state: FlowState::Closed,
            draft: default_draft(clock),
            invalid_field: None,
            clock,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == FlowState::Open
    }

    /// Current draft values.
    pub fn draft(&self) -> &ReminderDraft {
        &self.draft
    }

    /// Field rejected by the last submit, cleared when that field is edited.
    pub fn invalid_field(&self) -> Option<DraftField> {
        self.invalid_field
    }

    /// Shows the dialog with a fresh default draft.
    pub fn open(&mut self) -> Result<(), FlowError> {
        if self.is_open() {
            return Err(FlowError::AlreadyOpen);
        }
        self.reset();
        self.state = FlowState::Open;
        debug!("event=flow_open module=flow status=ok");
        Ok(())
    }

    /// Dismisses the dialog and discards the draft without creating anything.
    pub fn cancel(&mut self) -> Result<(), FlowError> {
        self.ensure_open()?;
        self.close();
        debug!("event=flow_cancel module=flow status=ok");
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), FlowError> {
        self.ensure_open()?;
        self.draft.title = title.into();
        self.clear_invalid(DraftField::Title);
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), FlowError> {
        self.ensure_open()?;
        self.draft.description = description.into();
        self.clear_invalid(DraftField::Description);
        Ok(())
    }

    /// Stores the instant yielded by the date/time picker.
    pub fn set_due_at(&mut self, due_at: DateTime<Utc>) -> Result<(), FlowError> {
        self.ensure_open()?;
        self.draft.due_at = due_at;
        self.clear_invalid(DraftField::DueAt);
        Ok(())
    }

    /// Validates the draft and hands it to `sink`.
    ///
    /// On success the flow closes and resets to defaults.
    ///
    /// # Errors
    /// - `NotOpen` when the dialog is closed.
    /// - `Validation` when the title is blank; the title field is flagged.
    /// - `Sink` when the sink rejects the draft.
    pub fn submit<S>(&mut self, sink: &mut S) -> Result<Reminder, FlowError>
    where
        S: ReminderSink + ?Sized,
    {
        self.ensure_open()?;

        if let Err(err) = self.draft.validate() {
            self.invalid_field = Some(match err {
                ReminderValidationError::EmptyTitle => DraftField::Title,
            });
            info!("event=flow_submit module=flow status=rejected reason=empty_title");
            return Err(err.into());
        }

        let reminder = sink.accept(self.draft.clone()).map_err(FlowError::Sink)?;
        self.close();
        info!(
            "event=flow_submit module=flow status=ok reminder_id={}",
            reminder.id
        );
        Ok(reminder)
    }

    fn ensure_open(&self) -> Result<(), FlowError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(FlowError::NotOpen)
        }
    }

    fn clear_invalid(&mut self, field: DraftField) {
        if self.invalid_field == Some(field) {
            self.invalid_field = None;
        }
    }

    fn close(&mut self) {
        self.state = FlowState::Closed;
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = default_draft(self.clock);
        self.invalid_field = None;
    }
}

impl Default for CreationFlow {
    fn default() -> Self {
        Self::new()
    }
}

fn default_draft(clock: DueClock) -> ReminderDraft {
    ReminderDraft::new(String::new(), String::new(), clock())
}

#[cfg(test)]
mod tests {
    use super::{CreationFlow, DraftField, FlowError};
    use crate::model::reminder::{Reminder, ReminderDraft, ReminderId};
    use crate::store::reminder_store::{ReminderSink, StoreError, StoreResult};
    use chrono::{DateTime, TimeZone, Utc};

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()
    }

    struct RefusingSink;

    impl ReminderSink for RefusingSink {
        fn accept(&mut self, _draft: ReminderDraft) -> StoreResult<Reminder> {
            Err(StoreError::NotFound(ReminderId::new()))
        }
    }

    #[test]
    fn editing_title_clears_highlight() {
        let mut flow = CreationFlow::with_clock(fixed_clock);
        let mut sink = RefusingSink;
        flow.open().unwrap();

        let err = flow.submit(&mut sink).unwrap_err();
        assert!(matches!(err, FlowError::Validation(_)));
        assert_eq!(flow.invalid_field(), Some(DraftField::Title));

        flow.set_description("still blank title").unwrap();
        assert_eq!(flow.invalid_field(), Some(DraftField::Title));

        flow.set_title("now valid").unwrap();
        assert_eq!(flow.invalid_field(), None);
    }

    #[test]
    fn sink_failure_keeps_flow_open_with_draft() {
        let mut flow = CreationFlow::with_clock(fixed_clock);
        let mut sink = RefusingSink;
        flow.open().unwrap();
        flow.set_title("water plants").unwrap();

        let err = flow.submit(&mut sink).unwrap_err();
        assert!(matches!(err, FlowError::Sink(StoreError::NotFound(_))));
        assert!(flow.is_open());
        assert_eq!(flow.draft().title, "water plants");
        assert_eq!(flow.invalid_field(), None);
    }

    #[test]
    fn reset_uses_clock_for_default_due() {
        let flow = CreationFlow::with_clock(fixed_clock);
        assert_eq!(flow.draft().due_at, fixed_clock());
        assert!(flow.draft().title.is_empty());
    }
}
