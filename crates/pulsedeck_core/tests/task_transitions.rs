use pulsedeck_core::{Action, Category, ManualClock, Snapshot, Store, DAY_MS};

const START_MS: i64 = 1_760_000_000_000;

fn seeded_store() -> Store<ManualClock> {
    Store::seeded(ManualClock::new(START_MS))
}

#[test]
fn complete_task_twice_restores_original_state() {
    let mut store = seeded_store();
    for task in store.snapshot().tasks().to_vec() {
        assert!(store.complete_task(&task.id));
        assert_eq!(
            store.snapshot().task(&task.id).unwrap().completed,
            !task.completed
        );

        assert!(store.complete_task(&task.id));
        assert_eq!(store.snapshot().task(&task.id).unwrap().completed, task.completed);
    }
}

#[test]
fn unknown_ids_leave_snapshot_untouched() {
    let mut store = seeded_store();
    let before = store.snapshot().clone();

    for action in [
        Action::CompleteTask("missing".into()),
        Action::DeleteTask("missing".into()),
        Action::RescheduleTask("missing".into()),
        Action::MarkReminderDone("missing".into()),
        Action::DismissReminder("missing".into()),
        Action::SnoozeReminder {
            id: "missing".into(),
            minutes: 15,
        },
        Action::RescheduleReminder("missing".into()),
        Action::ReactivateReminder("missing".into()),
    ] {
        assert!(!store.dispatch(action));
        assert!(store.snapshot().is_same(&before));
    }
    assert_eq!(store.pending_reactivations(), 0);
}

#[test]
fn delete_task_removes_exactly_one() {
    let mut store = seeded_store();
    let before = store.snapshot().tasks().len();

    assert!(store.delete_task("4"));
    assert_eq!(store.snapshot().tasks().len(), before - 1);
    assert!(store.snapshot().task("4").is_none());

    assert!(!store.delete_task("4"));
    assert_eq!(store.snapshot().tasks().len(), before - 1);
}

#[test]
fn reschedule_task_moves_due_date_but_keeps_category() {
    let mut store = seeded_store();
    store.clock().advance(5_000);

    assert!(store.reschedule_task("2"));
    let task = store.snapshot().task("2").unwrap();
    assert_eq!(task.due_date, START_MS + 5_000 + DAY_MS);
    assert_eq!(task.category, Category::Today);
}

#[test]
fn previous_snapshot_is_not_mutated() {
    let mut store = seeded_store();
    let before: Snapshot = store.snapshot().clone();

    store.complete_task("1");
    store.delete_task("2");

    assert!(!before.task("1").unwrap().completed);
    assert!(before.task("2").is_some());
    assert_eq!(before.reminders(), store.snapshot().reminders());
}

#[test]
fn add_task_appends_once() {
    let mut store = seeded_store();
    let task = pulsedeck_core::Task::new("extra", "Call the bank", "", START_MS, Category::Today)
        .unwrap();

    assert!(store.add_task(task.clone()));
    assert!(!store.add_task(task));
    assert_eq!(store.snapshot().tasks().last().unwrap().id, "extra");
    assert_eq!(store.snapshot().tasks().len(), 6);
}

#[test]
fn clear_all_empties_store() {
    let mut store = seeded_store();
    store.snooze_reminder("1", 5);

    assert!(store.clear_all());
    assert!(store.snapshot().tasks().is_empty());
    assert!(store.snapshot().reminders().is_empty());
    assert_eq!(store.pending_reactivations(), 0);
    assert!(!store.clear_all());
}
