//! Core state model for the remindlist reminder manager.
//! This crate owns every reminder invariant; presentation layers only read
//! snapshots and forward user events.

pub mod config;
pub mod flow;
pub mod logging;
pub mod model;
pub mod store;

pub use config::{ConfigError, CoreConfig};
pub use flow::creation_flow::{CreationFlow, DraftField, DueClock, FlowError, FlowState};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::reminder::{
    Reminder, ReminderDraft, ReminderId, ReminderStatus, ReminderValidationError,
};
pub use store::reminder_store::{
    CompletedTieBreak, ReminderSink, ReminderStore, StoreConfig, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
