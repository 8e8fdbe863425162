//! Persisted watchlist of favorited items.
//!
//! The whole list lives as one JSON array under [`WATCHLIST_KEY`] in a
//! [`KeyValueStore`]. Entries are keyed by *name*: membership and removal both
//! compare names, so two distinct items sharing a display name collide.
//!
//! Storage failures never surface to the caller. A missing, unreadable or
//! malformed slot reads as an empty list. A toggle that cannot read the slot
//! does nothing, and a failed write leaves the membership as it was; all of
//! these are logged.

use std::sync::Mutex;

use serde_json::Value;

use crate::config::WATCHLIST_KEY;
use crate::error::Result;
use crate::models::WatchlistEntry;
use crate::store::KeyValueStore;

/// Watchlist over an injected key-value store.
///
/// Each [`toggle`](Self::toggle) holds an internal lock across its
/// read-modify-write, so toggles through the same `Watchlist` never lose
/// updates. Another process writing the same backing slot can still
/// overwrite a concurrent change.
pub struct Watchlist {
    store: Box<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl Watchlist {
    pub fn new<S: KeyValueStore + 'static>(store: S) -> Self {
        Self::from_boxed(Box::new(store))
    }

    pub fn from_boxed(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Raw stored entries. Fails if the slot cannot be read or does not hold
    /// a JSON array; individual entries are not validated.
    fn read_raw(&self) -> Result<Vec<Value>> {
        match self.store.get(WATCHLIST_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_raw(&self, entries: &[Value]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(WATCHLIST_KEY, &raw)
    }

    fn raw_entries_or_empty(&self) -> Vec<Value> {
        self.read_raw().unwrap_or_else(|e| {
            log::error!("Failed to read watchlist: {}", e);
            Vec::new()
        })
    }

    /// All entries in insertion order.
    ///
    /// Stored entries that do not fit [`WatchlistEntry`] are skipped.
    pub fn entries(&self) -> Vec<WatchlistEntry> {
        self.raw_entries_or_empty()
            .into_iter()
            .filter_map(|v| match serde_json::from_value(v) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable watchlist entry: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Whether any stored entry carries `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.raw_entries_or_empty()
            .iter()
            .any(|v| entry_name(v) == Some(name))
    }

    /// Add `entry` if its name is absent, otherwise remove every entry with
    /// that name. Returns the membership after the call.
    ///
    /// If the stored list cannot be read the watchlist is left untouched and
    /// `false` is returned. Entries this crate cannot interpret are kept as
    /// stored.
    pub fn toggle(&self, entry: WatchlistEntry) -> bool {
        let _guard = self.write_lock.lock().unwrap_or_else(|p| p.into_inner());

        let mut entries = match self.read_raw() {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("Failed to read watchlist, not updating: {}", e);
                return false;
            }
        };
        let was_member = entries.iter().any(|v| entry_name(v) == Some(entry.name.as_str()));
        if was_member {
            entries.retain(|v| entry_name(v) != Some(entry.name.as_str()));
        } else {
            match serde_json::to_value(&entry) {
                Ok(value) => entries.push(value),
                Err(e) => {
                    log::error!("Failed to encode watchlist entry: {}", e);
                    return false;
                }
            }
        }

        match self.write_raw(&entries) {
            Ok(()) => !was_member,
            Err(e) => {
                log::error!("Failed to update watchlist: {}", e);
                was_member
            }
        }
    }

    /// Remove every entry. Failures are logged.
    pub fn clear(&self) {
        let _guard = self.write_lock.lock().unwrap_or_else(|p| p.into_inner());
        if let Err(e) = self.write_raw(&[]) {
            log::error!("Failed to clear watchlist: {}", e);
        }
    }
}

fn entry_name(v: &Value) -> Option<&str> {
    v.get("name").and_then(|n| n.as_str())
}
