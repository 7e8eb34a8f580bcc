//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so the registry never depends on a
//! concrete storage backend. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`EntryStore`] - Whole-set load/save of redirect entries

pub mod entry_store;

pub use entry_store::{EntryStore, StoreError};

#[cfg(test)]
pub use entry_store::MockEntryStore;
