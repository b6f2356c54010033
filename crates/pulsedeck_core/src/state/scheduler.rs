//! Cancellable snooze reactivation schedule.
//!
//! # Responsibility
//! - Track at most one pending reactivation per reminder id.
//! - Hand back entries that have come due, in firing order.
//!
//! # Invariants
//! - Scheduling an id that is already pending replaces the old due time.
//! - An entry is returned by `take_due` at most once.

use crate::clock::EpochMs;
use crate::model::EntityId;
use std::collections::BTreeMap;

/// Pending reactivations keyed by reminder id.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SnoozeScheduler {
    pending: BTreeMap<EntityId, EpochMs>,
}

impl SnoozeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules reactivation of `id` at `due_ms`.
    ///
    /// Returns the due time this call replaced, if any.
    pub fn schedule(&mut self, id: impl Into<EntityId>, due_ms: EpochMs) -> Option<EpochMs> {
        self.pending.insert(id.into(), due_ms)
    }

    /// Cancels the pending reactivation for `id`.
    pub fn cancel(&mut self, id: &str) -> Option<EpochMs> {
        self.pending.remove(id)
    }

    /// Cancels everything. Returns how many entries were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn due_at(&self, id: &str) -> Option<EpochMs> {
        self.pending.get(id).copied()
    }

    /// Earliest pending due time.
    pub fn next_due(&self) -> Option<EpochMs> {
        self.pending.values().copied().min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every id due at or before `now_ms`, ordered by due
    /// time then id.
    pub fn take_due(&mut self, now_ms: EpochMs) -> Vec<EntityId> {
        let mut due: Vec<(EpochMs, EntityId)> = self
            .pending
            .iter()
            .filter(|(_, due_ms)| **due_ms <= now_ms)
            .map(|(id, due_ms)| (*due_ms, id.clone()))
            .collect();
        due.sort();

        for (_, id) in &due {
            self.pending.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }
}
