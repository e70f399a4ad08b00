//! In-memory reminder storage.
//!
//! # Responsibility
//! - Own the authoritative partition of reminders into pending and completed.
//! - Keep both collections in their required order after every mutation.
//!
//! # Invariants
//! - A reminder lives in exactly one collection, chosen by its status.
//! - Readers only ever receive owned snapshots.

pub mod reminder_store;
