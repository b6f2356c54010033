//! Pure transition functions.
//!
//! # Responsibility
//! - Compute the next collection from the previous one and an operation.
//! - Fold an `Action` into a new `Snapshot`.
//!
//! # Invariants
//! - Every function is total: an absent id yields an equal collection.
//! - Inputs are never mutated; callers swap in the returned value.
//! - Rescheduling a task never rewrites its `category`.

use crate::clock::{minutes_to_ms, EpochMs, DAY_MS, HOUR_MS};
use crate::model::reminder::Reminder;
use crate::model::task::Task;
use crate::state::action::Action;
use crate::state::snapshot::Snapshot;

/// Fixed offset applied by task reschedule.
pub const TASK_RESCHEDULE_OFFSET_MS: EpochMs = DAY_MS;
/// Fixed offset applied by reminder reschedule.
pub const REMINDER_RESCHEDULE_OFFSET_MS: EpochMs = 2 * HOUR_MS;

/// Applies one action to `snapshot` at time `now_ms`.
pub fn reduce(snapshot: &Snapshot, action: &Action, now_ms: EpochMs) -> Snapshot {
    match action {
        Action::CompleteTask(id) => snapshot.with_tasks(complete_task(snapshot.tasks(), id)),
        Action::DeleteTask(id) => snapshot.with_tasks(delete_task(snapshot.tasks(), id)),
        Action::RescheduleTask(id) => {
            snapshot.with_tasks(reschedule_task(snapshot.tasks(), id, now_ms))
        }
        Action::AddTask(task) => snapshot.with_tasks(add_task(snapshot.tasks(), task)),
        Action::MarkReminderDone(id) => {
            snapshot.with_reminders(mark_reminder_done(snapshot.reminders(), id))
        }
        Action::DismissReminder(id) => {
            snapshot.with_reminders(dismiss_reminder(snapshot.reminders(), id))
        }
        Action::SnoozeReminder { id, minutes } => snapshot.with_reminders(snooze_reminder(
            snapshot.reminders(),
            id,
            *minutes,
            now_ms,
        )),
        Action::RescheduleReminder(id) => {
            snapshot.with_reminders(reschedule_reminder(snapshot.reminders(), id, now_ms))
        }
        Action::ReactivateReminder(id) => {
            snapshot.with_reminders(reactivate_reminder(snapshot.reminders(), id))
        }
        Action::ClearAll => snapshot.with_tasks(Vec::new()).with_reminders(Vec::new()),
    }
}

pub fn complete_task(tasks: &[Task], id: &str) -> Vec<Task> {
    map_matching(tasks, |task| task.id == id, |task| task.completed = !task.completed)
}

pub fn delete_task(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks.iter().filter(|task| task.id != id).cloned().collect()
}

pub fn reschedule_task(tasks: &[Task], id: &str, now_ms: EpochMs) -> Vec<Task> {
    map_matching(
        tasks,
        |task| task.id == id,
        |task| task.due_date = now_ms + TASK_RESCHEDULE_OFFSET_MS,
    )
}

/// Appends `task`; an existing id leaves the collection untouched.
pub fn add_task(tasks: &[Task], task: &Task) -> Vec<Task> {
    let mut next = tasks.to_vec();
    if !tasks.iter().any(|existing| existing.id == task.id) {
        next.push(task.clone());
    }
    next
}

pub fn mark_reminder_done(reminders: &[Reminder], id: &str) -> Vec<Reminder> {
    reminders
        .iter()
        .filter(|reminder| reminder.id != id)
        .cloned()
        .collect()
}

pub fn dismiss_reminder(reminders: &[Reminder], id: &str) -> Vec<Reminder> {
    map_matching(
        reminders,
        |reminder| reminder.id == id,
        |reminder| reminder.is_active = false,
    )
}

/// Hides the reminder until `now + minutes`. Reactivation is scheduled by the
/// store, not here.
pub fn snooze_reminder(
    reminders: &[Reminder],
    id: &str,
    minutes: u32,
    now_ms: EpochMs,
) -> Vec<Reminder> {
    let until = now_ms + minutes_to_ms(minutes);
    map_matching(
        reminders,
        |reminder| reminder.id == id,
        |reminder| {
            reminder.snoozed_until = Some(until);
            reminder.is_active = false;
        },
    )
}

pub fn reschedule_reminder(reminders: &[Reminder], id: &str, now_ms: EpochMs) -> Vec<Reminder> {
    map_matching(
        reminders,
        |reminder| reminder.id == id,
        |reminder| reminder.time = now_ms + REMINDER_RESCHEDULE_OFFSET_MS,
    )
}

pub fn reactivate_reminder(reminders: &[Reminder], id: &str) -> Vec<Reminder> {
    map_matching(
        reminders,
        |reminder| reminder.id == id,
        |reminder| {
            reminder.is_active = true;
            reminder.snoozed_until = None;
        },
    )
}

fn map_matching<T: Clone>(
    items: &[T],
    matches: impl Fn(&T) -> bool,
    mut update: impl FnMut(&mut T),
) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            let mut next = item.clone();
            if matches(item) {
                update(&mut next);
            }
            next
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{add_task, complete_task, reduce, reschedule_task, TASK_RESCHEDULE_OFFSET_MS};
    use crate::model::task::Category;
    use crate::seed::seed_tasks;
    use crate::state::action::Action;
    use crate::state::snapshot::Snapshot;

    #[test]
    fn complete_task_only_touches_matching_id() {
        let tasks = seed_tasks(0);
        let next = complete_task(&tasks, "2");
        assert!(next[1].completed);
        assert_eq!(next[0], tasks[0]);
        assert_eq!(next[2..], tasks[2..]);
    }

    #[test]
    fn reschedule_keeps_category() {
        let tasks = seed_tasks(0);
        let next = reschedule_task(&tasks, "5", 1_000);
        assert_eq!(next[4].due_date, 1_000 + TASK_RESCHEDULE_OFFSET_MS);
        assert_eq!(next[4].category, Category::ThisMonth);
    }

    #[test]
    fn add_task_ignores_duplicate_id() {
        let tasks = seed_tasks(0);
        let duplicate = tasks[0].clone().with_completed(true);
        assert_eq!(add_task(&tasks, &duplicate), tasks);
    }

    #[test]
    fn clear_all_empties_both_collections() {
        let snapshot = Snapshot::seeded(0);
        let cleared = reduce(&snapshot, &Action::ClearAll, 0);
        assert!(cleared.tasks().is_empty());
        assert!(cleared.reminders().is_empty());
    }
}
