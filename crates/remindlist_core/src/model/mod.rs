//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical reminder record and its lifecycle status.
//! - Define the draft shape collected before a reminder is committed.
//!
//! # Invariants
//! - Every reminder is identified by a stable `ReminderId`.
//! - Status moves one way only: `Pending -> Completed`.

pub mod reminder;
