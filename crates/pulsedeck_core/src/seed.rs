//! Fixed sample data loaded at startup.
//!
//! Timestamps are offsets from the clock reading passed in, so the demo looks
//! the same whenever it starts.

use crate::clock::{EpochMs, DAY_MS, HOUR_MS, MINUTE_MS};
use crate::model::analytics::{Analytics, CategoryCount, HourLoad};
use crate::model::reminder::{Reminder, ReminderKind, ReminderPriority, ReminderSource};
use crate::model::task::{Category, Task, TaskPriority, TaskSource};

/// Five timeline tasks spread across all four categories.
pub fn seed_tasks(now_ms: EpochMs) -> Vec<Task> {
    vec![
        task(
            "1",
            "Prepare client presentation",
            "Create slides for Monday's client meeting",
            now_ms + DAY_MS,
            TaskPriority::High,
            TaskSource::Gmail,
            false,
            Category::Tomorrow,
        ),
        task(
            "2",
            "Review project proposal",
            "Go through the Q4 project proposal document",
            now_ms,
            TaskPriority::Medium,
            TaskSource::Slack,
            false,
            Category::Today,
        ),
        task(
            "3",
            "Team standup meeting",
            "Daily standup at 10 AM",
            now_ms,
            TaskPriority::Medium,
            TaskSource::Notion,
            true,
            Category::Today,
        ),
        task(
            "4",
            "Update documentation",
            "Update API documentation for new features",
            now_ms + 3 * DAY_MS,
            TaskPriority::Low,
            TaskSource::Whatsapp,
            false,
            Category::ThisWeek,
        ),
        task(
            "5",
            "Quarterly review",
            "Prepare quarterly performance review",
            now_ms + 15 * DAY_MS,
            TaskPriority::High,
            TaskSource::Gmail,
            false,
            Category::ThisMonth,
        ),
    ]
}

/// Three upcoming reminders; exactly one is urgent.
pub fn seed_reminders(now_ms: EpochMs) -> Vec<Reminder> {
    vec![
        reminder(
            "1",
            "Client Meeting in 30 minutes",
            "Quarterly review meeting with Johnson & Co.",
            now_ms + 30 * MINUTE_MS,
            ReminderPriority::Urgent,
            ReminderKind::Meeting,
            ReminderSource::Calendar,
        ),
        reminder(
            "2",
            "Project Deadline Today",
            "Submit final designs for the mobile app project",
            now_ms + 2 * HOUR_MS,
            ReminderPriority::High,
            ReminderKind::Deadline,
            ReminderSource::Notion,
        ),
        reminder(
            "3",
            "Follow up with team",
            "Check progress on the backend implementation",
            now_ms + 4 * HOUR_MS,
            ReminderPriority::Medium,
            ReminderKind::Task,
            ReminderSource::Slack,
        ),
    ]
}

/// Fixed productivity figures for the analytics section.
pub fn seed_analytics() -> Analytics {
    Analytics {
        completed_tasks: 47,
        pending_tasks: 12,
        total_tasks: 59,
        productivity_score: 87,
        streak_days: 15,
        weekly_progress: vec![85, 92, 78, 95, 88, 91, 87],
        category_breakdown: vec![
            category_count("Work", 35),
            category_count("Personal", 15),
            category_count("Learning", 9),
        ],
        time_distribution: [(9, 8), (10, 12), (11, 15), (14, 10), (15, 7), (16, 5)]
            .into_iter()
            .map(|(hour, tasks)| HourLoad { hour, tasks })
            .collect(),
    }
}

fn category_count(category: &str, count: u32) -> CategoryCount {
    CategoryCount {
        category: category.to_string(),
        count,
    }
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    title: &str,
    description: &str,
    due_date: EpochMs,
    priority: TaskPriority,
    source: TaskSource,
    completed: bool,
    category: Category,
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        due_date,
        priority,
        source,
        completed,
        category,
    }
}

fn reminder(
    id: &str,
    title: &str,
    description: &str,
    time: EpochMs,
    priority: ReminderPriority,
    kind: ReminderKind,
    source: ReminderSource,
) -> Reminder {
    Reminder {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        time,
        priority,
        kind,
        source,
        is_active: true,
        snoozed_until: None,
    }
}

#[cfg(test)]
mod tests {
    use super::{seed_analytics, seed_reminders, seed_tasks};
    use crate::model::task::Category;
    use std::collections::HashSet;

    #[test]
    fn seed_records_pass_validation_and_have_unique_ids() {
        let tasks = seed_tasks(0);
        let reminders = seed_reminders(0);
        for task in &tasks {
            task.validate().expect("seed task should be valid");
        }
        for reminder in &reminders {
            reminder.validate().expect("seed reminder should be valid");
        }
        let task_ids: HashSet<_> = tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(task_ids.len(), tasks.len());
    }

    #[test]
    fn seed_tasks_cover_every_category() {
        let tasks = seed_tasks(0);
        for category in Category::ALL {
            assert!(tasks.iter().any(|task| task.category == category));
        }
    }

    #[test]
    fn seed_analytics_totals_add_up() {
        let analytics = seed_analytics();
        assert_eq!(
            analytics.completed_tasks + analytics.pending_tasks,
            analytics.total_tasks
        );
        let breakdown: u32 = analytics
            .category_breakdown
            .iter()
            .map(|entry| entry.count)
            .sum();
        assert_eq!(breakdown, analytics.total_tasks);
        assert_eq!(analytics.weekly_progress.len(), 7);
    }
}
