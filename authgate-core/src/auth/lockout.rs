use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use crate::auth::DEFAULT_FREEZE;

/// Per-principal login freeze after a failed attempt.
///
/// Each entry is a single "locked until" deadline; a missing entry means the
/// principal has never failed. Entries go stale on their own once the clock
/// passes the deadline, so nothing here ever has to evict for correctness.
/// The map is sharded, so lock traffic on one principal never blocks checks
/// on another.
pub struct UserLock {
    freeze: chrono::Duration,
    locked: DashMap<String, DateTime<Utc>>,
}

impl UserLock {
    pub fn new(freeze: Duration) -> Self {
        Self {
            freeze: chrono::Duration::from_std(freeze).unwrap_or(chrono::Duration::MAX),
            locked: DashMap::new(),
        }
    }

    /// The configured freeze span, as the std duration callers sleep with.
    pub fn freeze(&self) -> Duration {
        self.freeze.to_std().unwrap_or(Duration::ZERO)
    }

    /// True iff the current time is strictly before the principal's
    /// recorded deadline. Evaluated against the clock at call time; never
    /// mutates the map.
    pub fn is_locked(&self, principal: &str) -> bool {
        match self.locked.get(principal) {
            Some(until) => Utc::now() < *until,
            None => false,
        }
    }

    /// Records `now + freeze` as the new deadline, overwriting any prior
    /// one. Later failures always reset the lock, never shorten it.
    pub fn lock(&self, principal: &str) {
        let until = Utc::now() + self.freeze;
        self.locked.insert(principal.to_string(), until);
        debug!("{} locked until {}", principal, until);
    }

    /// Drops entries whose deadline has already passed. Memory hygiene
    /// only; `is_locked` treats stale entries as unlocked regardless.
    pub fn prune_stale(&self) {
        let now = Utc::now();
        let mut to_remove = Vec::new();
        for entry in self.locked.iter() {
            if *entry.value() <= now {
                to_remove.push(entry.key().clone());
            }
        }
        let pruned = to_remove.len();
        for key in to_remove {
            self.locked.remove(&key);
        }
        if pruned > 0 {
            debug!("pruned {} stale lockout entries", pruned);
        }
    }

    pub fn tracked_principals(&self) -> usize {
        self.locked.len()
    }

    /// Test helper: rewrites an existing deadline so expiry can be tested
    /// without sleeping out the full freeze span.
    pub fn test_force_locked_until(&self, principal: &str, until: DateTime<Utc>) -> bool {
        if let Some(mut entry) = self.locked.get_mut(principal) {
            *entry = until;
            true
        } else {
            false
        }
    }
}

impl Default for UserLock {
    fn default() -> Self {
        Self::new(DEFAULT_FREEZE)
    }
}
