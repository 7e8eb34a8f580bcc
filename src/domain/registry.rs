//! The redirect registry: the in-memory, lock-guarded, disk-backed set of
//! shortname → target mappings.
//!
//! # Locking
//!
//! A single [`tokio::sync::RwLock`] guards the mapping.
//!
//! - `add`, `delete` and `flush` hold the write lock for the whole
//!   check → mutate → save sequence, so writers serialize on disk I/O and the
//!   file always mirrors a state the registry actually held.
//! - `resolve` and `list` take the read lock. Request counters are atomics, so
//!   concurrent resolves never lose an increment and never wait on each other.
//!
//! # Durability
//!
//! Every add/delete saves the full set before returning. Counters are not
//! saved on resolve; they reach disk with the next add/delete or with
//! [`RedirectRegistry::flush`] at shutdown.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::domain::entities::Entry;
use crate::domain::repositories::{EntryStore, StoreError};
use crate::utils::add_request::ValidationError;

/// Errors returned by registry mutations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Invalid add request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Shortname {shortname} already points to {existing_target}")]
    DuplicateShortname {
        shortname: String,
        existing_target: String,
    },

    /// The in-memory mutation was applied but could not be saved.
    #[error("Change applied but not persisted: {0}")]
    Persistence(#[source] StoreError),

    #[error("Failed to load redirects: {0}")]
    Load(#[source] StoreError),
}

/// What to do when the persisted file exists but cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptFilePolicy {
    /// Log a warning and start with an empty registry.
    #[default]
    Reset,
    /// Refuse to start.
    Fail,
}

impl std::str::FromStr for CorruptFilePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reset" => Ok(Self::Reset),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "unknown corrupt file policy '{}' (expected 'reset' or 'fail')",
                other
            )),
        }
    }
}

#[derive(Debug)]
struct Slot {
    target: String,
    request_count: AtomicU64,
}

impl Slot {
    fn snapshot(&self, shortname: &str) -> Entry {
        Entry {
            shortname: shortname.to_string(),
            target: self.target.clone(),
            request_count: self.request_count.load(Ordering::Relaxed),
        }
    }
}

type Slots = IndexMap<String, Slot>;

/// Concurrent, durable store of redirect entries.
///
/// Constructed once at startup with [`RedirectRegistry::open`] and shared
/// behind an `Arc`.
pub struct RedirectRegistry {
    slots: RwLock<Slots>,
    store: Arc<dyn EntryStore>,
    /// Set when counters changed after the last successful save.
    dirty: AtomicBool,
}

impl RedirectRegistry {
    /// Creates an empty registry backed by `store` without loading it.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self {
            slots: RwLock::new(IndexMap::new()),
            store,
            dirty: AtomicBool::new(false),
        }
    }

    /// Loads the persisted entries from `store` and builds the registry.
    ///
    /// A missing file yields an empty registry. Duplicate shortnames in the
    /// loaded data are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Load`] if the store cannot be read, or if it is
    /// corrupt and `policy` is [`CorruptFilePolicy::Fail`].
    pub async fn open(
        store: Arc<dyn EntryStore>,
        policy: CorruptFilePolicy,
    ) -> Result<Self, RegistryError> {
        let entries = match store.load().await {
            Ok(entries) => entries,
            Err(e @ StoreError::Corrupt { .. }) => match policy {
                CorruptFilePolicy::Reset => {
                    warn!("{}. Starting with an empty registry.", e);
                    Vec::new()
                }
                CorruptFilePolicy::Fail => return Err(RegistryError::Load(e)),
            },
            Err(e) => return Err(RegistryError::Load(e)),
        };

        let mut slots = Slots::with_capacity(entries.len());
        for entry in entries {
            if slots.contains_key(&entry.shortname) {
                warn!(
                    shortname = %entry.shortname,
                    target = %entry.target,
                    "Dropping duplicate shortname found in {}",
                    store.location()
                );
                continue;
            }
            slots.insert(
                entry.shortname,
                Slot {
                    target: entry.target,
                    request_count: AtomicU64::new(entry.request_count),
                },
            );
        }

        info!("Loaded {} redirects from {}", slots.len(), store.location());

        Ok(Self {
            slots: RwLock::new(slots),
            store,
            dirty: AtomicBool::new(false),
        })
    }

    /// Adds a new redirect and persists the full set.
    ///
    /// The uniqueness check, the insertion and the save happen under one write
    /// lock: of two concurrent adds for the same shortname exactly one wins.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] for an empty shortname. Other
    /// shortname rules are enforced by
    /// [`crate::utils::add_request::validate_add_request`].
    ///
    /// Returns [`RegistryError::DuplicateShortname`] (with the current target)
    /// if the shortname is taken; nothing is changed.
    ///
    /// Returns [`RegistryError::Persistence`] if saving fails. The entry stays
    /// in memory and keeps resolving, but may not survive a restart.
    pub async fn add(&self, shortname: &str, target: &str) -> Result<Entry, RegistryError> {
        if shortname.is_empty() {
            return Err(ValidationError::Shortname(String::new()).into());
        }

        let mut slots = self.slots.write().await;

        if let Some(existing) = slots.get(shortname) {
            return Err(RegistryError::DuplicateShortname {
                shortname: shortname.to_string(),
                existing_target: existing.target.clone(),
            });
        }

        slots.insert(
            shortname.to_string(),
            Slot {
                target: target.to_string(),
                request_count: AtomicU64::new(0),
            },
        );
        info!(shortname, target, "Redirect added");

        self.save_locked(&slots).await?;

        Ok(Entry::new(shortname, target))
    }

    /// Removes a redirect and persists the full set.
    ///
    /// Deleting an absent shortname is a no-op: nothing is saved and
    /// `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Persistence`] if saving fails; the entry is
    /// already gone from memory.
    pub async fn delete(&self, shortname: &str) -> Result<bool, RegistryError> {
        let mut slots = self.slots.write().await;

        if slots.shift_remove(shortname).is_none() {
            debug!(shortname, "Delete of unknown shortname ignored");
            return Ok(false);
        }
        info!(shortname, "Redirect deleted");

        self.save_locked(&slots).await?;

        Ok(true)
    }

    /// Looks up a shortname and counts the request.
    ///
    /// Returns the entry with its counter already incremented, or `None` if
    /// the shortname is unknown (in which case nothing changes).
    pub async fn resolve(&self, shortname: &str) -> Option<Entry> {
        let slots = self.slots.read().await;
        let slot = slots.get(shortname)?;

        let count = slot.request_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.dirty.store(true, Ordering::Release);

        Some(Entry {
            shortname: shortname.to_string(),
            target: slot.target.clone(),
            request_count: count,
        })
    }

    /// Returns a snapshot of one entry without counting a request.
    pub async fn get(&self, shortname: &str) -> Option<Entry> {
        let slots = self.slots.read().await;
        slots.get(shortname).map(|slot| slot.snapshot(shortname))
    }

    /// Returns a snapshot of every entry in insertion order.
    pub async fn list(&self) -> Vec<Entry> {
        let slots = self.slots.read().await;
        slots
            .iter()
            .map(|(shortname, slot)| slot.snapshot(shortname))
            .collect()
    }

    /// Returns the number of registered shortnames.
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    /// Returns true if no redirects are registered.
    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }

    /// Saves the current set if request counters changed since the last save.
    ///
    /// Called on shutdown so counters survive a clean restart.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Persistence`] if saving fails.
    pub async fn flush(&self) -> Result<(), RegistryError> {
        let slots = self.slots.write().await;

        if !self.dirty.load(Ordering::Acquire) {
            debug!("Registry clean, nothing to flush");
            return Ok(());
        }

        self.save_locked(&slots).await
    }

    /// Location of the backing store, for logs and health output.
    pub fn store_location(&self) -> String {
        self.store.location()
    }

    /// Persists `slots`. Callers must hold the write lock.
    async fn save_locked(&self, slots: &Slots) -> Result<(), RegistryError> {
        let entries: Vec<Entry> = slots
            .iter()
            .map(|(shortname, slot)| slot.snapshot(shortname))
            .collect();

        match self.store.save(&entries).await {
            Ok(()) => {
                self.dirty.store(false, Ordering::Release);
                debug!("Saved {} redirects to {}", entries.len(), self.store.location());
                Ok(())
            }
            Err(e) => {
                // Unsaved state is retried by the shutdown flush.
                self.dirty.store(true, Ordering::Release);
                error!("Failed to save redirects: {}", e);
                Err(RegistryError::Persistence(e))
            }
        }
    }
}
