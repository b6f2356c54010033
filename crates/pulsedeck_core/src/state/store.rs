//! Explicit state container owned by the presentation boundary.
//!
//! # Responsibility
//! - Hold the current snapshot and swap it wholesale on every dispatch.
//! - Keep the snooze schedule in step with reminder transitions.
//!
//! # Invariants
//! - All mutation goes through `dispatch` or `tick`.
//! - A reminder has at most one pending reactivation; re-snoozing replaces it,
//!   and done, dismiss and clear cancel it.
//! - Logs carry ids and action names only, never titles or descriptions.

use crate::clock::{minutes_to_ms, Clock, EpochMs, SystemClock};
use crate::model::task::Task;
use crate::model::EntityId;
use crate::state::action::Action;
use crate::state::reducer::reduce;
use crate::state::scheduler::SnoozeScheduler;
use crate::state::snapshot::Snapshot;
use crate::views::Views;
use log::{debug, info};

/// Task/reminder store driven by dispatched actions.
#[derive(Debug)]
pub struct Store<C: Clock = SystemClock> {
    clock: C,
    snapshot: Snapshot,
    scheduler: SnoozeScheduler,
}

impl Store<SystemClock> {
    /// Store on the wall clock, seeded with sample data.
    pub fn with_system_clock() -> Self {
        Self::seeded(SystemClock)
    }
}

impl<C: Clock> Store<C> {
    pub fn new(clock: C, snapshot: Snapshot) -> Self {
        Self {
            clock,
            snapshot,
            scheduler: SnoozeScheduler::new(),
        }
    }

    /// Creates a store seeded relative to the clock's current reading.
    pub fn seeded(clock: C) -> Self {
        let snapshot = Snapshot::seeded(clock.now_ms());
        info!(
            "event=store_seeded module=store tasks={} reminders={}",
            snapshot.tasks().len(),
            snapshot.reminders().len()
        );
        Self::new(clock, snapshot)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn now_ms(&self) -> EpochMs {
        self.clock.now_ms()
    }

    /// Derived views over the current snapshot at the current time.
    pub fn views(&self) -> Views<'_> {
        Views::new(&self.snapshot, self.clock.now_ms())
    }

    /// Due time of the pending reactivation for `id`, if any.
    pub fn pending_reactivation(&self, id: &str) -> Option<EpochMs> {
        self.scheduler.due_at(id)
    }

    pub fn pending_reactivations(&self) -> usize {
        self.scheduler.len()
    }

    /// Applies one action and replaces the snapshot.
    ///
    /// Returns whether the snapshot changed. Unknown ids are a silent no-op.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let now_ms = self.clock.now_ms();
        let known_reminder = action
            .target_id()
            .is_some_and(|id| self.snapshot.reminder(id).is_some());

        let next = reduce(&self.snapshot, &action, now_ms);
        let changed = !next.is_same(&self.snapshot);
        self.snapshot = next;

        match &action {
            Action::SnoozeReminder { id, minutes } if known_reminder => {
                let due_ms = now_ms + minutes_to_ms(*minutes);
                let replaced = self.scheduler.schedule(id.clone(), due_ms);
                info!(
                    "event=snooze_scheduled module=store id={} due_ms={} replaced={}",
                    id,
                    due_ms,
                    replaced.is_some()
                );
            }
            Action::MarkReminderDone(id)
            | Action::DismissReminder(id)
            | Action::ReactivateReminder(id) => {
                if self.scheduler.cancel(id).is_some() {
                    info!("event=snooze_cancelled module=store id={id}");
                }
            }
            Action::ClearAll => {
                let dropped = self.scheduler.cancel_all();
                info!("event=store_cleared module=store cancelled_snoozes={dropped}");
            }
            _ => {}
        }

        debug!(
            "event=dispatch module=store action={} id={} changed={}",
            action.name(),
            action.target_id().unwrap_or("-"),
            changed
        );
        changed
    }

    /// Fires every reactivation that has come due.
    ///
    /// Returns the reactivated reminder ids in firing order.
    pub fn tick(&mut self) -> Vec<EntityId> {
        let now_ms = self.clock.now_ms();
        let due = self.scheduler.take_due(now_ms);
        for id in &due {
            self.snapshot = reduce(
                &self.snapshot,
                &Action::ReactivateReminder(id.clone()),
                now_ms,
            );
            info!("event=snooze_fired module=store id={id}");
        }
        due
    }

    pub fn complete_task(&mut self, id: &str) -> bool {
        self.dispatch(Action::CompleteTask(id.to_string()))
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        self.dispatch(Action::DeleteTask(id.to_string()))
    }

    pub fn reschedule_task(&mut self, id: &str) -> bool {
        self.dispatch(Action::RescheduleTask(id.to_string()))
    }

    pub fn add_task(&mut self, task: Task) -> bool {
        self.dispatch(Action::AddTask(task))
    }

    pub fn mark_reminder_done(&mut self, id: &str) -> bool {
        self.dispatch(Action::MarkReminderDone(id.to_string()))
    }

    pub fn dismiss_reminder(&mut self, id: &str) -> bool {
        self.dispatch(Action::DismissReminder(id.to_string()))
    }

    pub fn snooze_reminder(&mut self, id: &str, minutes: u32) -> bool {
        self.dispatch(Action::SnoozeReminder {
            id: id.to_string(),
            minutes,
        })
    }

    pub fn reschedule_reminder(&mut self, id: &str) -> bool {
        self.dispatch(Action::RescheduleReminder(id.to_string()))
    }

    pub fn clear_all(&mut self) -> bool {
        self.dispatch(Action::ClearAll)
    }
}
