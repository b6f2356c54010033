//! Derived read-only projections over a snapshot.
//!
//! # Responsibility
//! - Compute category buckets, visibility filters and aggregate counts.
//! - Project the analytics record into rounded percents and a peak hour.
//!
//! # Invariants
//! - Views are pure and recomputed on every call; nothing is cached.
//! - Filters preserve the original relative order of the collection.

use crate::clock::EpochMs;
use crate::model::analytics::{Analytics, HourLoad};
use crate::model::reminder::{Reminder, ReminderPriority};
use crate::model::task::{Category, Task};
use crate::state::snapshot::Snapshot;
use serde::Serialize;

/// Aggregate timeline counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Aggregate reminder counters shown in the reminders header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReminderStats {
    /// Visible reminders.
    pub active: usize,
    /// Visible reminders with priority urgent or high.
    pub high_priority: usize,
    /// Reminders with `is_active == false` (dismissed or snoozed).
    pub inactive: usize,
}

/// Category share of the analytics total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub count: u32,
    pub percent: u8,
}

/// Headline figures of the analytics section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSummary {
    pub completion_rate: u8,
    pub productivity_score: u8,
    pub streak_days: u32,
    pub weekly_average: u8,
    pub category_shares: Vec<CategoryShare>,
    pub peak_hour: Option<HourLoad>,
}

/// `part / whole` as a percent rounded half up; 0 when `whole` is 0.
pub fn round_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let percent = (part * 200 + whole) / (2 * whole);
    percent.min(usize::from(u8::MAX)) as u8
}

pub fn tasks_by_category(tasks: &[Task], category: Category) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.category == category)
        .collect()
}

/// Task count per category in timeline display order.
pub fn category_counts(tasks: &[Task]) -> [(Category, usize); 4] {
    Category::ALL.map(|category| {
        let count = tasks.iter().filter(|task| task.category == category).count();
        (category, count)
    })
}

pub fn task_stats(tasks: &[Task], now_ms: EpochMs) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    let overdue = tasks.iter().filter(|task| task.is_overdue(now_ms)).count();
    TaskStats {
        total,
        completed,
        pending: total - completed,
        overdue,
    }
}

/// Completed share of all tasks as a whole percent, rounded half up.
pub fn completion_rate(tasks: &[Task]) -> u8 {
    let completed = tasks.iter().filter(|task| task.completed).count();
    round_percent(completed, tasks.len())
}

pub fn active_reminders(reminders: &[Reminder], now_ms: EpochMs) -> Vec<&Reminder> {
    reminders
        .iter()
        .filter(|reminder| reminder.is_visible(now_ms))
        .collect()
}

/// First visible urgent reminder.
pub fn urgent_reminder(reminders: &[Reminder], now_ms: EpochMs) -> Option<&Reminder> {
    reminders.iter().find(|reminder| {
        reminder.is_visible(now_ms) && reminder.priority == ReminderPriority::Urgent
    })
}

pub fn reminder_stats(reminders: &[Reminder], now_ms: EpochMs) -> ReminderStats {
    let active = active_reminders(reminders, now_ms);
    ReminderStats {
        active: active.len(),
        high_priority: active
            .iter()
            .filter(|reminder| reminder.priority.is_high())
            .count(),
        inactive: reminders
            .iter()
            .filter(|reminder| !reminder.is_active)
            .count(),
    }
}

/// Mean of the weekly scores, rounded half up; 0 for an empty week.
pub fn weekly_average(weekly_progress: &[u8]) -> u8 {
    let sum: usize = weekly_progress.iter().map(|&score| usize::from(score)).sum();
    round_percent(sum, weekly_progress.len() * 100)
}

/// Each breakdown entry as a percent of the analytics total.
pub fn category_shares(analytics: &Analytics) -> Vec<CategoryShare> {
    let total = analytics.total_tasks as usize;
    analytics
        .category_breakdown
        .iter()
        .map(|entry| CategoryShare {
            category: entry.category.clone(),
            count: entry.count,
            percent: round_percent(entry.count as usize, total),
        })
        .collect()
}

/// Busiest hour; the earliest listed hour wins a tie.
pub fn peak_hour(time_distribution: &[HourLoad]) -> Option<HourLoad> {
    time_distribution
        .iter()
        .copied()
        .reduce(|best, load| if load.tasks > best.tasks { load } else { best })
}

pub fn analytics_summary(analytics: &Analytics) -> AnalyticsSummary {
    AnalyticsSummary {
        completion_rate: round_percent(
            analytics.completed_tasks as usize,
            analytics.total_tasks as usize,
        ),
        productivity_score: analytics.productivity_score,
        streak_days: analytics.streak_days,
        weekly_average: weekly_average(&analytics.weekly_progress),
        category_shares: category_shares(analytics),
        peak_hour: peak_hour(&analytics.time_distribution),
    }
}

/// Snapshot-bound facade over the view functions.
#[derive(Debug, Clone, Copy)]
pub struct Views<'a> {
    snapshot: &'a Snapshot,
    now_ms: EpochMs,
}

impl<'a> Views<'a> {
    pub fn new(snapshot: &'a Snapshot, now_ms: EpochMs) -> Self {
        Self { snapshot, now_ms }
    }

    pub fn now_ms(&self) -> EpochMs {
        self.now_ms
    }

    pub fn tasks_by_category(&self, category: Category) -> Vec<&'a Task> {
        tasks_by_category(self.snapshot.tasks(), category)
    }

    pub fn category_counts(&self) -> [(Category, usize); 4] {
        category_counts(self.snapshot.tasks())
    }

    pub fn task_stats(&self) -> TaskStats {
        task_stats(self.snapshot.tasks(), self.now_ms)
    }

    pub fn completion_rate(&self) -> u8 {
        completion_rate(self.snapshot.tasks())
    }

    pub fn active_reminders(&self) -> Vec<&'a Reminder> {
        active_reminders(self.snapshot.reminders(), self.now_ms)
    }

    pub fn urgent_reminder(&self) -> Option<&'a Reminder> {
        urgent_reminder(self.snapshot.reminders(), self.now_ms)
    }

    pub fn reminder_stats(&self) -> ReminderStats {
        reminder_stats(self.snapshot.reminders(), self.now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::{category_counts, completion_rate, round_percent, task_stats, TaskStats};
    use crate::model::task::Category;
    use crate::seed::seed_tasks;

    #[test]
    fn stats_on_empty_collection_are_zero() {
        assert_eq!(task_stats(&[], 0), TaskStats::default());
        assert_eq!(completion_rate(&[]), 0);
    }

    #[test]
    fn seed_counts_per_category() {
        let counts = category_counts(&seed_tasks(0));
        assert_eq!(
            counts,
            [
                (Category::Today, 2),
                (Category::Tomorrow, 1),
                (Category::ThisWeek, 1),
                (Category::ThisMonth, 1),
            ]
        );
        assert_eq!(completion_rate(&seed_tasks(0)), 20);
    }

    #[test]
    fn round_percent_rounds_half_up() {
        assert_eq!(round_percent(1, 3), 33);
        assert_eq!(round_percent(2, 3), 67);
        assert_eq!(round_percent(1, 8), 13);
        assert_eq!(round_percent(3, 3), 100);
        assert_eq!(round_percent(5, 0), 0);
    }
}
