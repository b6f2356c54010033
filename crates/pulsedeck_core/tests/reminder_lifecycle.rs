use pulsedeck_core::{ManualClock, Store, HOUR_MS, MINUTE_MS};

const START_MS: i64 = 1_760_000_000_000;

fn seeded_store() -> Store<ManualClock> {
    Store::seeded(ManualClock::new(START_MS))
}

#[test]
fn snooze_hides_then_reactivates_after_elapsed_time() {
    let mut store = seeded_store();

    assert!(store.snooze_reminder("2", 15));
    let snoozed = store.snapshot().reminder("2").unwrap();
    assert!(!snoozed.is_active);
    assert_eq!(snoozed.snoozed_until, Some(START_MS + 15 * MINUTE_MS));
    assert_eq!(store.pending_reactivation("2"), Some(START_MS + 15 * MINUTE_MS));

    store.clock().advance_minutes(14);
    assert!(store.tick().is_empty());
    assert!(!store.snapshot().reminder("2").unwrap().is_active);

    store.clock().advance_minutes(1);
    assert_eq!(store.tick(), vec!["2".to_string()]);
    let reactivated = store.snapshot().reminder("2").unwrap();
    assert!(reactivated.is_active);
    assert_eq!(reactivated.snoozed_until, None);
    assert_eq!(store.pending_reactivation("2"), None);
}

#[test]
fn resnooze_replaces_earlier_reactivation() {
    let mut store = seeded_store();
    store.snooze_reminder("1", 15);

    store.clock().advance_minutes(5);
    store.snooze_reminder("1", 60);
    assert_eq!(store.pending_reactivations(), 1);

    store.clock().advance_minutes(10);
    assert!(store.tick().is_empty());
    assert!(!store.snapshot().reminder("1").unwrap().is_active);

    store.clock().advance_minutes(50);
    assert_eq!(store.tick(), vec!["1".to_string()]);
    assert!(store.snapshot().reminder("1").unwrap().is_active);
}

#[test]
fn mark_done_removes_reminder_and_cancels_reactivation() {
    let mut store = seeded_store();
    store.snooze_reminder("3", 5);

    assert!(store.mark_reminder_done("3"));
    assert!(store.snapshot().reminder("3").is_none());
    assert_eq!(store.snapshot().reminders().len(), 2);
    assert_eq!(store.pending_reactivation("3"), None);

    store.clock().advance_minutes(10);
    assert!(store.tick().is_empty());
}

#[test]
fn dismiss_deactivates_and_cancels_reactivation() {
    let mut store = seeded_store();
    store.snooze_reminder("1", 5);

    store.dismiss_reminder("1");
    store.clock().advance_minutes(10);
    assert!(store.tick().is_empty());

    let reminder = store.snapshot().reminder("1").unwrap();
    assert!(!reminder.is_active);
    assert!(store.views().urgent_reminder().is_none());
}

#[test]
fn reschedule_reminder_moves_time_two_hours_out() {
    let mut store = seeded_store();
    store.clock().advance(MINUTE_MS);

    assert!(store.reschedule_reminder("3"));
    assert_eq!(
        store.snapshot().reminder("3").unwrap().time,
        START_MS + MINUTE_MS + 2 * HOUR_MS
    );
}

#[test]
fn active_reminders_never_include_future_snoozes() {
    let mut store = seeded_store();
    store.snooze_reminder("1", 30);
    store.snooze_reminder("3", 5);

    for _ in 0..8 {
        let now = store.now_ms();
        for reminder in store.views().active_reminders() {
            assert!(reminder.snoozed_until.map_or(true, |until| until <= now));
        }
        store.clock().advance_minutes(5);
        store.tick();
    }
    assert_eq!(store.views().active_reminders().len(), 3);
}

#[test]
fn reschedule_while_snoozed_keeps_pending_reactivation() {
    let mut store = seeded_store();
    store.snooze_reminder("2", 15);
    let due = store.pending_reactivation("2");

    store.clock().advance_minutes(5);
    assert!(store.reschedule_reminder("2"));
    let moved = store.snapshot().reminder("2").unwrap();
    assert_eq!(moved.time, START_MS + 5 * MINUTE_MS + 2 * HOUR_MS);
    assert!(!moved.is_active);
    assert_eq!(store.pending_reactivation("2"), due);

    store.clock().advance_minutes(10);
    assert_eq!(store.tick(), vec!["2".to_string()]);
    assert!(store.snapshot().reminder("2").unwrap().is_active);
}

#[test]
fn zero_minute_snooze_hides_until_next_tick() {
    let mut store = seeded_store();
    assert!(store.snooze_reminder("3", 0));

    let hidden = store.snapshot().reminder("3").unwrap();
    assert!(!hidden.is_active);
    assert_eq!(hidden.snoozed_until, Some(START_MS));
    assert_eq!(store.pending_reactivation("3"), Some(START_MS));
    assert!(store.views().active_reminders().iter().all(|r| r.id != "3"));

    assert_eq!(store.tick(), vec!["3".to_string()]);
    assert!(store.views().active_reminders().iter().any(|r| r.id == "3"));
}
