//! Dispatched descriptions of transition operations.

use crate::model::task::Task;
use crate::model::EntityId;

/// One transition request handled by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Toggles `completed`.
    CompleteTask(EntityId),
    DeleteTask(EntityId),
    /// Moves `due_date` to now + 24h. Category is left as is.
    RescheduleTask(EntityId),
    /// Appends a task unless the id is already taken.
    AddTask(Task),
    /// Removes the reminder from the collection.
    MarkReminderDone(EntityId),
    DismissReminder(EntityId),
    SnoozeReminder { id: EntityId, minutes: u32 },
    /// Moves `time` to now + 2h.
    RescheduleReminder(EntityId),
    /// Deferred half of a snooze.
    ReactivateReminder(EntityId),
    /// Empties both collections.
    ClearAll,
}

impl Action {
    /// Stable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CompleteTask(_) => "complete_task",
            Self::DeleteTask(_) => "delete_task",
            Self::RescheduleTask(_) => "reschedule_task",
            Self::AddTask(_) => "add_task",
            Self::MarkReminderDone(_) => "mark_reminder_done",
            Self::DismissReminder(_) => "dismiss_reminder",
            Self::SnoozeReminder { .. } => "snooze_reminder",
            Self::RescheduleReminder(_) => "reschedule_reminder",
            Self::ReactivateReminder(_) => "reactivate_reminder",
            Self::ClearAll => "clear_all",
        }
    }

    /// Target entity id, when the action addresses one entity.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::CompleteTask(id)
            | Self::DeleteTask(id)
            | Self::RescheduleTask(id)
            | Self::MarkReminderDone(id)
            | Self::DismissReminder(id)
            | Self::RescheduleReminder(id)
            | Self::ReactivateReminder(id)
            | Self::SnoozeReminder { id, .. } => Some(id.as_str()),
            Self::AddTask(task) => Some(task.id.as_str()),
            Self::ClearAll => None,
        }
    }
}
