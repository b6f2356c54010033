//! Plain-text rendering of the derived views.

use pulsedeck_core::seed::seed_analytics;
use pulsedeck_core::views::analytics_summary;
use pulsedeck_core::{
    AnalyticsSummary, Author, Category, ChatMessage, Clock, Settings, Store, Views,
};
use std::fmt::Write;

/// Renders the timeline, the reminders section when enabled, and analytics.
pub fn render_sections<C: Clock>(store: &Store<C>, settings: &Settings) -> String {
    let views = store.views();
    let mut out = String::new();
    render_timeline(&mut out, &views);
    if settings.smart_reminders {
        render_reminders(&mut out, &views, settings.notifications);
    }
    render_analytics(&mut out, &analytics_summary(&seed_analytics()));
    out
}

fn render_timeline(out: &mut String, views: &Views<'_>) {
    let stats = views.task_stats();
    let _ = writeln!(out, "== Timeline ==");
    let _ = writeln!(
        out,
        "total={} completed={} pending={} overdue={} completion={}%",
        stats.total,
        stats.completed,
        stats.pending,
        stats.overdue,
        views.completion_rate()
    );

    for (category, count) in views.category_counts() {
        let _ = writeln!(out, "-- {} ({count})", category.label());
        for task in views.tasks_by_category(category) {
            let mark = if task.completed { "x" } else { " " };
            let overdue = if task.is_overdue(views.now_ms()) {
                " [overdue]"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "  [{mark}] #{} {} ({:?}, {:?}){overdue}",
                task.id, task.title, task.priority, task.source
            );
        }
    }
}

fn render_reminders(out: &mut String, views: &Views<'_>, notifications: bool) {
    let stats = views.reminder_stats();
    let _ = writeln!(out, "== Smart Reminders ==");
    let _ = writeln!(
        out,
        "active={} high_priority={} inactive={}",
        stats.active, stats.high_priority, stats.inactive
    );

    if notifications {
        if let Some(urgent) = views.urgent_reminder() {
            let _ = writeln!(out, "!! URGENT: {}", urgent.title);
        }
    }

    let active = views.active_reminders();
    if active.is_empty() {
        let _ = writeln!(out, "  all caught up");
    }
    for reminder in active {
        let due = if reminder.is_overdue(views.now_ms()) {
            "overdue".to_string()
        } else {
            format!("in {}m", reminder.minutes_until(views.now_ms()))
        };
        let _ = writeln!(
            out,
            "  #{} {} [{:?} {:?}] {due} via {:?}",
            reminder.id, reminder.title, reminder.priority, reminder.kind, reminder.source
        );
    }
}

fn render_analytics(out: &mut String, summary: &AnalyticsSummary) {
    let _ = writeln!(out, "== Analytics ==");
    let _ = writeln!(
        out,
        "completion={}% productivity={} streak={}d weekly_avg={}%",
        summary.completion_rate,
        summary.productivity_score,
        summary.streak_days,
        summary.weekly_average
    );
    for share in &summary.category_shares {
        let _ = writeln!(
            out,
            "  {}: {} tasks ({}% of total)",
            share.category, share.count, share.percent
        );
    }
    if let Some(peak) = summary.peak_hour {
        let _ = writeln!(out, "  peak hour: {:02}:00 ({} tasks)", peak.hour, peak.tasks);
    }
}

/// Renders chat messages starting at `from`.
pub fn render_chat(messages: &[ChatMessage], from: usize) -> String {
    let mut out = String::new();
    for message in messages.iter().skip(from) {
        let who = match message.author {
            Author::User => "you",
            Author::Assistant => "assistant",
        };
        let _ = writeln!(out, "  {who}: {}", message.text);
    }
    out
}

/// One-line summary of a category bucket, used by the demo script.
pub fn category_line(views: &Views<'_>, category: Category) -> String {
    let ids: Vec<&str> = views
        .tasks_by_category(category)
        .into_iter()
        .map(|task| task.id.as_str())
        .collect();
    format!("{}: [{}]", category.label(), ids.join(", "))
}

#[cfg(test)]
mod tests {
    use super::render_sections;
    use pulsedeck_core::{ManualClock, Settings, Store};

    #[test]
    fn hides_reminders_when_disabled() {
        let store = Store::seeded(ManualClock::new(0));
        let settings = Settings {
            smart_reminders: false,
            ..Settings::default()
        };
        let text = render_sections(&store, &settings);
        assert!(text.contains("== Timeline =="));
        assert!(!text.contains("Smart Reminders"));
    }

    #[test]
    fn analytics_block_shows_rounded_figures() {
        let store = Store::seeded(ManualClock::new(0));
        let text = render_sections(&store, &Settings::default());
        assert!(text.contains("== Analytics =="));
        assert!(text.contains("completion=80% productivity=87 streak=15d weekly_avg=88%"));
        assert!(text.contains("  Work: 35 tasks (59% of total)"));
        assert!(text.contains("  peak hour: 11:00 (15 tasks)"));
    }

    #[test]
    fn urgent_banner_follows_notifications_toggle() {
        let store = Store::seeded(ManualClock::new(0));
        let shown = render_sections(&store, &Settings::default());
        assert!(shown.contains("!! URGENT: Client Meeting in 30 minutes"));

        let settings = Settings {
            notifications: false,
            ..Settings::default()
        };
        assert!(!render_sections(&store, &settings).contains("URGENT"));
    }
}
