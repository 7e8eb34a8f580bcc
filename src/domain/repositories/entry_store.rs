//! Storage trait for the durable redirect set.

use crate::domain::entities::Entry;
use async_trait::async_trait;

/// Errors raised while loading or saving the entry set.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Redirects file {path} is corrupt: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("Storage task failed: {0}")]
    Task(String),
}

/// Durable storage for the complete set of redirect entries.
///
/// The store always reads and writes the whole set; there is no per-entry
/// update. Implementations must make `save` atomic with respect to `load`:
/// a concurrent or subsequent load sees either the previous set or the new
/// one, never a partial write.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStore`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Loads every persisted entry in stored order.
    ///
    /// # Returns
    ///
    /// - `Ok(vec![])` when nothing has been persisted yet (first run)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the stored data cannot be parsed.
    /// Returns [`StoreError::Io`] if the storage cannot be read.
    async fn load(&self) -> Result<Vec<Entry>, StoreError>;

    /// Replaces the persisted set with `entries`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Task`] when the write
    /// could not be completed; the previously persisted set is left intact.
    async fn save(&self, entries: &[Entry]) -> Result<(), StoreError>;

    /// Human-readable location of the backing storage, used in logs.
    fn location(&self) -> String;
}
