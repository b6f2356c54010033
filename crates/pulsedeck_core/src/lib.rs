//! Core state model for the PulseDeck productivity demo.
//! Tasks, reminders, their transitions and derived views live here; rendering
//! does not.

pub mod assistant;
pub mod clock;
pub mod logging;
pub mod model;
pub mod seed;
pub mod settings;
pub mod state;
pub mod views;

pub use assistant::chat::{
    detect_task_keyword, Author, ChatAssistant, ChatMessage, PollOutcome, SendOutcome,
};
pub use clock::{Clock, EpochMs, ManualClock, SystemClock, DAY_MS, HOUR_MS, MINUTE_MS};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::analytics::{Analytics, CategoryCount, HourLoad};
pub use model::reminder::{Reminder, ReminderKind, ReminderPriority, ReminderSource};
pub use model::task::{Category, Task, TaskPriority, TaskSource};
pub use model::{EntityId, ModelValidationError};
pub use settings::{Settings, SettingsError, StorageKind};
pub use state::action::Action;
pub use state::scheduler::SnoozeScheduler;
pub use state::snapshot::Snapshot;
pub use state::store::Store;
pub use views::{AnalyticsSummary, CategoryShare, ReminderStats, TaskStats, Views};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
