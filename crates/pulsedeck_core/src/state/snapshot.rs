//! Immutable collection snapshot.
//!
//! # Invariants
//! - Collections are never mutated in place; a transition builds a new slice.
//! - An unchanged collection keeps its previous `Arc`, so identity comparison
//!   tells whether a transition touched it.

use crate::clock::EpochMs;
use crate::model::reminder::Reminder;
use crate::model::task::Task;
use crate::seed::{seed_reminders, seed_tasks};
use serde::Serialize;
use std::sync::Arc;

/// Full copy of both collections at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    tasks: Arc<[Task]>,
    reminders: Arc<[Reminder]>,
}

impl Snapshot {
    pub fn new(tasks: Vec<Task>, reminders: Vec<Reminder>) -> Self {
        Self {
            tasks: tasks.into(),
            reminders: reminders.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Snapshot populated with the fixed sample data relative to `now_ms`.
    pub fn seeded(now_ms: EpochMs) -> Self {
        Self::new(seed_tasks(now_ms), seed_reminders(now_ms))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn reminder(&self, id: &str) -> Option<&Reminder> {
        self.reminders.iter().find(|reminder| reminder.id == id)
    }

    /// Returns whether both snapshots share the same collection allocations.
    pub fn is_same(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks) && Arc::ptr_eq(&self.reminders, &other.reminders)
    }

    pub(crate) fn with_tasks(&self, tasks: Vec<Task>) -> Self {
        Self {
            tasks: replace_if_changed(&self.tasks, tasks),
            reminders: Arc::clone(&self.reminders),
        }
    }

    pub(crate) fn with_reminders(&self, reminders: Vec<Reminder>) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            reminders: replace_if_changed(&self.reminders, reminders),
        }
    }
}

fn replace_if_changed<T: PartialEq>(previous: &Arc<[T]>, next: Vec<T>) -> Arc<[T]> {
    if previous[..] == next[..] {
        Arc::clone(previous)
    } else {
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::Snapshot;

    #[test]
    fn unchanged_collection_keeps_identity() {
        let snapshot = Snapshot::seeded(0);
        let same = snapshot.with_tasks(snapshot.tasks().to_vec());
        assert!(same.is_same(&snapshot));

        let trimmed = snapshot.with_tasks(snapshot.tasks()[1..].to_vec());
        assert!(!trimmed.is_same(&snapshot));
        assert_eq!(trimmed.reminders(), snapshot.reminders());
    }

    #[test]
    fn lookup_by_id() {
        let snapshot = Snapshot::seeded(0);
        assert_eq!(
            snapshot.task("3").map(|task| task.title.as_str()),
            Some("Team standup meeting")
        );
        assert!(snapshot.reminder("missing").is_none());
    }
}
